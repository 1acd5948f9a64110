use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap, SupportPoint};

/// A capsule shape defined as a round segment.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The first endpoint of the capsule's principal axis (vertex 0).
    pub a: Point<Real>,
    /// The second endpoint of the capsule's principal axis (vertex 1).
    pub b: Point<Real>,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule aligned with the `y` axis and with the given half-height and radius.
    pub fn new_y(half_height: Real, radius: Real) -> Self {
        let b = Point::from(Vector::y() * half_height);
        Self::new(-b, b, radius)
    }

    /// Creates a new capsule defined as the segment between `a` and `b` and with the given `radius`.
    pub fn new(a: Point<Real>, b: Point<Real>, radius: Real) -> Self {
        Self { a, b, radius }
    }

    /// Creates a new capsule, checking that its inputs are finite and its radius non-negative.
    pub fn try_new(a: Point<Real>, b: Point<Real>, radius: Real) -> Result<Self, ShapeError> {
        for (i, pt) in [a, b].iter().enumerate() {
            if !pt.coords.iter().all(|e| e.is_finite()) {
                return Err(ShapeError::NonFiniteVertex(i));
            }
        }

        if !(radius >= 0.0) || !radius.is_finite() {
            return Err(ShapeError::NegativeRadius);
        }

        Ok(Self::new(a, b, radius))
    }
}

impl SupportMap for Capsule {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> SupportPoint {
        if self.b.coords.dot(dir) > self.a.coords.dot(dir) {
            SupportPoint::new(self.b, 1)
        } else {
            SupportPoint::new(self.a, 0)
        }
    }

    #[inline]
    fn vertex(&self, id: u32) -> Point<Real> {
        if id == 1 {
            self.b
        } else {
            self.a
        }
    }

    #[inline]
    fn radial_padding(&self) -> Real {
        self.radius
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }

    fn local_aabb(&self) -> Aabb {
        let padding = Vector::repeat(self.radius);
        Aabb::new(
            self.a.inf(&self.b) - padding,
            self.b.sup(&self.a) + padding,
        )
    }
}
