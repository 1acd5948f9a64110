//! Traits for support mapping based shapes.

use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};

/// A point on the surface of a convex shape, tagged with the feature it comes from.
///
/// For a single shape `id` is the vertex index (or the corner code of a cuboid). For a
/// pair of shapes it packs both ids as `(id1 << 16) | id2`. Two support points with the
/// same `id` always come from the same vertex, which is what the portal refinement uses
/// to detect convergence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SupportPoint {
    /// The position of the support point.
    pub point: Point<Real>,
    /// The identifier of the vertex this point was computed from.
    pub id: u32,
}

impl SupportPoint {
    /// Creates a new support point.
    #[inline]
    pub fn new(point: Point<Real>, id: u32) -> Self {
        Self { point, id }
    }

    /// Is this the same feature as `other`?
    ///
    /// The ids must match and the positions must be bitwise equal. For shapes without
    /// radial padding the second condition always holds when the first one does.
    #[inline]
    pub fn same_feature(&self, other: &SupportPoint) -> bool {
        self.id == other.id && self.point == other.point
    }

    /// Applies the transformation `m` to the point, keeping its id.
    #[inline]
    pub fn transformed(&self, m: &Isometry<Real>) -> Self {
        Self {
            point: m * self.point,
            id: self.id,
        }
    }
}

/// Traits of convex shapes representable by a support mapping function.
///
/// The support point returned by a shape is always one of its vertices: radially padded
/// shapes (balls and capsules) return a vertex of their core, and expose their radius
/// through [`SupportMap::radial_padding`].
pub trait SupportMap {
    // Evaluates the support function of this shape.
    //
    // A support function is a function associating a vector to the shape point which maximizes
    // their dot product. Ties are broken in favor of the lowest feature id.
    fn local_support_point(&self, dir: &Vector<Real>) -> SupportPoint;

    // Evaluates the support function of this shape transformed by `transform`.
    fn support_point(&self, transform: &Isometry<Real>, dir: &Vector<Real>) -> SupportPoint {
        let local_dir = transform.inverse_transform_vector(dir);
        self.local_support_point(&local_dir).transformed(transform)
    }

    /// The vertex identified by `id`, in the local-space of this shape.
    ///
    /// `id` must have been returned by `local_support_point`.
    fn vertex(&self, id: u32) -> Point<Real>;

    /// The radius of the sphere this shape is Minkowski-summed with.
    fn radial_padding(&self) -> Real {
        0.0
    }

    /// A point strictly inside of this shape (unless the shape is flat).
    fn center(&self) -> Point<Real>;

    /// The local-space AABB of this shape, radial padding included.
    fn local_aabb(&self) -> Aabb;
}
