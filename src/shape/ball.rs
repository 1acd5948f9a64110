use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap, SupportPoint};

/// A Ball shape.
///
/// Its support mapping only ever returns its center. The radius is applied as radial
/// padding by the queries.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ball {
    /// The center of the ball.
    pub center: Point<Real>,
    /// The radius of the ball.
    pub radius: Real,
}

impl Ball {
    /// Creates a new ball with the given center and radius.
    #[inline]
    pub fn new(center: Point<Real>, radius: Real) -> Ball {
        Ball { center, radius }
    }

    /// Creates a new ball, checking that its radius is non-negative and its center finite.
    pub fn try_new(center: Point<Real>, radius: Real) -> Result<Ball, ShapeError> {
        if !center.coords.iter().all(|e| e.is_finite()) {
            return Err(ShapeError::NonFiniteVertex(0));
        }

        if !(radius >= 0.0) || !radius.is_finite() {
            return Err(ShapeError::NegativeRadius);
        }

        Ok(Self::new(center, radius))
    }
}

impl SupportMap for Ball {
    #[inline]
    fn local_support_point(&self, _: &Vector<Real>) -> SupportPoint {
        SupportPoint::new(self.center, 0)
    }

    #[inline]
    fn vertex(&self, _: u32) -> Point<Real> {
        self.center
    }

    #[inline]
    fn radial_padding(&self) -> Real {
        self.radius
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.radius))
    }
}
