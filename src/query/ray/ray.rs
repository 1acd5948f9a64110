//! Half-lines and the trait of shapes they can hit.

use crate::math::{Point, Real, Vector};

/// A half-line starting at `origin` and following `dir`.
///
/// `dir` is not required to be normalized: a time of impact `t` designates the point
/// `origin + dir * t`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Where the half-line begins.
    pub origin: Point<Real>,
    /// The direction followed by the half-line.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Builds a ray from its origin and direction.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// This ray with its direction flipped.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.origin, -self.dir)
    }
}

/// Shapes that can report where a ray, expressed in their local frame, hits them.
pub trait RayCast {
    /// The time of impact of `ray` on this shape, if it is not greater than `max_time_of_impact`.
    ///
    /// With `solid` set, an origin inside the shape yields zero. Otherwise the ray is
    /// reported where it leaves the shape.
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real, solid: bool) -> Option<Real>;

    /// Whether `ray` touches this shape before `max_time_of_impact`.
    #[inline]
    fn intersects_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> bool {
        self.cast_local_ray(ray, max_time_of_impact, true).is_some()
    }
}
