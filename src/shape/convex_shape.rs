use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{Ball, Capsule, ConvexHull, Cuboid, SupportMap, SupportPoint, Triangle};

/// Enum representing the convex shapes a shape cast can be performed on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ConvexShape {
    /// A ball shape.
    Ball(Ball),
    /// A capsule shape.
    Capsule(Capsule),
    /// A cuboid shape.
    Cuboid(Cuboid),
    /// A triangle shape.
    Triangle(Triangle),
    /// A convex hull shape.
    ConvexHull(ConvexHull),
}

macro_rules! dispatch(
    ($shape: expr, $s: ident => $e: expr) => {
        match $shape {
            ConvexShape::Ball($s) => $e,
            ConvexShape::Capsule($s) => $e,
            ConvexShape::Cuboid($s) => $e,
            ConvexShape::Triangle($s) => $e,
            ConvexShape::ConvexHull($s) => $e,
        }
    }
);

impl SupportMap for ConvexShape {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> SupportPoint {
        dispatch!(self, s => s.local_support_point(dir))
    }

    #[inline]
    fn vertex(&self, id: u32) -> Point<Real> {
        dispatch!(self, s => s.vertex(id))
    }

    #[inline]
    fn radial_padding(&self) -> Real {
        dispatch!(self, s => s.radial_padding())
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        dispatch!(self, s => s.center())
    }

    #[inline]
    fn local_aabb(&self) -> Aabb {
        dispatch!(self, s => s.local_aabb())
    }
}

impl From<Ball> for ConvexShape {
    fn from(s: Ball) -> Self {
        ConvexShape::Ball(s)
    }
}

impl From<Capsule> for ConvexShape {
    fn from(s: Capsule) -> Self {
        ConvexShape::Capsule(s)
    }
}

impl From<Cuboid> for ConvexShape {
    fn from(s: Cuboid) -> Self {
        ConvexShape::Cuboid(s)
    }
}

impl From<Triangle> for ConvexShape {
    fn from(s: Triangle) -> Self {
        ConvexShape::Triangle(s)
    }
}

impl From<ConvexHull> for ConvexShape {
    fn from(s: ConvexHull) -> Self {
        ConvexShape::ConvexHull(s)
    }
}
