//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap, SupportPoint};

/// A triangle shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct Triangle {
    /// The triangle first point (vertex 0).
    pub a: Point<Real>,
    /// The triangle second point (vertex 1).
    pub b: Point<Real>,
    /// The triangle third point (vertex 2).
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// Creates a triangle from three points, checking they are finite.
    pub fn try_new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Result<Triangle, ShapeError> {
        for (i, pt) in [a, b, c].iter().enumerate() {
            if !pt.coords.iter().all(|e| e.is_finite()) {
                return Err(ShapeError::NonFiniteVertex(i));
            }
        }

        Ok(Self::new(a, b, c))
    }

    /// The three vertices of this triangle, in id order.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The centroid of this triangle.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }
}

impl SupportMap for Triangle {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> SupportPoint {
        let d1 = self.a.coords.dot(dir);
        let d2 = self.b.coords.dot(dir);
        let d3 = self.c.coords.dot(dir);

        let (mut best, mut best_dot) = (0, d1);

        if d2 > best_dot {
            best = 1;
            best_dot = d2;
        }

        if d3 > best_dot {
            best = 2;
        }

        SupportPoint::new(self.vertices()[best], best as u32)
    }

    #[inline]
    fn vertex(&self, id: u32) -> Point<Real> {
        match id {
            1 => self.b,
            2 => self.c,
            _ => self.a,
        }
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        self.centroid()
    }

    #[inline]
    fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices())
    }
}
