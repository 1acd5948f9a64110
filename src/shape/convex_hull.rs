use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap, SupportPoint};
use crate::utils;
use std::sync::Arc;

/// The maximum number of vertices of a convex hull.
///
/// Support points of a pair of shapes pack both vertex ids in a single `u32`, so each
/// one has to fit in 16 bits.
pub const MAX_HULL_VERTICES: usize = 1 << 16;

static_assertions::const_assert!(MAX_HULL_VERTICES - 1 <= u16::MAX as usize);

/// A convex hull given by its vertices, with a per-axis scale factor.
///
/// The vertex buffer is shared and immutable so the same hull can be instantiated with
/// several scale factors without copying it. The vertices are not required to all lie on
/// the hull boundary: interior points simply never get returned by the support mapping.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexHull {
    points: Arc<[Point<Real>]>,
    scale: Vector<Real>,
}

impl ConvexHull {
    /// Creates a new convex hull from its vertices, with a unit scale.
    pub fn try_new(points: impl Into<Arc<[Point<Real>]>>) -> Result<Self, ShapeError> {
        Self::try_new_scaled(points, Vector::repeat(1.0))
    }

    /// Creates a new convex hull from its vertices and a per-axis scale factor.
    pub fn try_new_scaled(
        points: impl Into<Arc<[Point<Real>]>>,
        scale: Vector<Real>,
    ) -> Result<Self, ShapeError> {
        let points = points.into();

        if points.is_empty() {
            return Err(ShapeError::EmptyHull);
        }

        if points.len() > MAX_HULL_VERTICES {
            return Err(ShapeError::TooManyVertices(points.len()));
        }

        if let Some(i) = points
            .iter()
            .position(|pt| !pt.coords.iter().all(|e| e.is_finite()))
        {
            return Err(ShapeError::NonFiniteVertex(i));
        }

        if !scale.iter().all(|e| e.is_finite()) {
            return Err(ShapeError::NonFiniteScale);
        }

        Ok(Self { points, scale })
    }

    /// Returns a copy of this hull sharing the same vertex buffer, with a different scale.
    pub fn scaled(&self, scale: Vector<Real>) -> Result<Self, ShapeError> {
        if !scale.iter().all(|e| e.is_finite()) {
            return Err(ShapeError::NonFiniteScale);
        }

        Ok(Self {
            points: self.points.clone(),
            scale,
        })
    }

    /// The unscaled vertices of this hull.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The shared buffer holding the unscaled vertices of this hull.
    #[inline]
    pub fn shared_points(&self) -> &Arc<[Point<Real>]> {
        &self.points
    }

    /// The per-axis scale factor of this hull.
    #[inline]
    pub fn scale(&self) -> &Vector<Real> {
        &self.scale
    }
}

impl SupportMap for ConvexHull {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> SupportPoint {
        // dot(p * scale, dir) = dot(p, scale * dir)
        let scaled_dir = self.scale.component_mul(dir);
        let id = utils::point_cloud_support_point_id(&scaled_dir, &self.points);
        SupportPoint::new(self.vertex(id as u32), id as u32)
    }

    #[inline]
    fn vertex(&self, id: u32) -> Point<Real> {
        debug_assert!(
            (id as usize) < self.points.len(),
            "Vertex id {} out of range for a hull with {} points.",
            id,
            self.points.len()
        );
        let pt = self.points.get(id as usize).unwrap_or(&self.points[0]);
        Point::from(pt.coords.component_mul(&self.scale))
    }

    fn center(&self) -> Point<Real> {
        let sum = self
            .points
            .iter()
            .fold(Vector::zeros(), |acc, pt| acc + pt.coords);
        Point::from((sum / self.points.len() as Real).component_mul(&self.scale))
    }

    fn local_aabb(&self) -> Aabb {
        Aabb::from_points(
            self.points
                .iter()
                .map(|pt| Point::from(pt.coords.component_mul(&self.scale))),
        )
    }
}
