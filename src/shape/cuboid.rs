//! Support mapping based Cuboid shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::shape::{ShapeError, SupportMap, SupportPoint};

/// Shape of a box.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The center of the cuboid.
    pub center: Point<Real>,
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

// NOTE: format of the cuboid vertex id:
// the i-th bit of `id` is set to 1 iff. the i-th component of the vertex (relative to
// the cuboid center) is negative.
impl Cuboid {
    /// Creates a new box from its center and half-extents. Half-extents are the box
    /// half-width along each axis. Each half-extent must be positive.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>) -> Cuboid {
        Cuboid {
            center,
            half_extents,
        }
    }

    /// Creates a new box, checking that its half-extents are non-negative.
    pub fn try_new(center: Point<Real>, half_extents: Vector<Real>) -> Result<Cuboid, ShapeError> {
        if !center.coords.iter().all(|e| e.is_finite()) {
            return Err(ShapeError::NonFiniteVertex(0));
        }

        if !half_extents.iter().all(|e| *e >= 0.0 && e.is_finite()) {
            return Err(ShapeError::NegativeHalfExtent);
        }

        Ok(Self::new(center, half_extents))
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> SupportPoint {
        let mut res = self.half_extents;
        let mut id = 0;

        for i in 0..DIM {
            // A `-0.0` component selects the positive side.
            if dir[i] < 0.0 {
                res[i] = -res[i];
                id |= 1 << i;
            }
        }

        SupportPoint::new(self.center + res, id)
    }

    fn vertex(&self, id: u32) -> Point<Real> {
        let mut res = self.half_extents;

        for i in 0..DIM {
            if id & (1 << i) != 0 {
                res[i] = -res[i]
            }
        }

        self.center + res
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, self.half_extents)
    }
}
