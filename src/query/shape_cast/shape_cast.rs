use crate::math::{Isometry, Real, UnitVector};
use crate::query::shape_cast::{cast_convex_convex, CastObserver};
use crate::shape::ConvexShape;

/// The status of a convex shape cast.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastStatus {
    /// The cast completed normally.
    Converged,
    /// An iteration cap was reached. The result is the best estimate found so far.
    OutOfIterations,
    /// A portal collapsed on duplicate features. The result is the best estimate found so far.
    Degenerate,
}

impl CastStatus {
    /// Keeps the first abnormal status between `self` and `other`.
    #[inline]
    pub fn merge(self, other: CastStatus) -> CastStatus {
        if self == CastStatus::Converged {
            other
        } else {
            self
        }
    }
}

/// The result of a convex shape cast.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvexCastResult {
    /// The distance travelled by the first shape along the cast direction when it first
    /// touches the second shape.
    ///
    /// This is negative if both shapes already overlap at the start of the cast, and set to
    /// `Real::MAX` if the cast line never touches the second shape.
    pub distance_of_impact: Real,
    /// Is `distance_of_impact` within the maximum cast distance?
    pub hit: bool,
    /// Diagnostic about how the cast completed.
    pub status: CastStatus,
}

impl ConvexCastResult {
    /// A result indicating that the cast line does not touch the second shape.
    #[inline]
    pub fn miss() -> Self {
        Self {
            distance_of_impact: Real::MAX,
            hit: false,
            status: CastStatus::Converged,
        }
    }

    /// Did an iteration cap or a degenerate configuration occur during the cast?
    #[inline]
    pub fn something_went_wrong(&self) -> bool {
        self.status != CastStatus::Converged
    }
}

/// Configuration for controlling the behavior of convex shape casts.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConvexCastOptions {
    /// The maximum distance the first shape can travel along the cast direction.
    pub max_cast_distance: Real,
    /// The maximum number of iterations of each iterative stage.
    pub max_iterations: usize,
    /// Vectors with all their components smaller than this (in magnitude) are rescaled
    /// before being used as search directions.
    pub tiny_threshold: Real,
    /// The factor applied to rescaled tiny vectors.
    pub tiny_rescale: Real,
    /// Below this (absolute) cosine between the portal normal and the cast direction, the
    /// portal is considered parallel to the cast direction.
    pub parallel_epsilon: Real,
    /// Convergence tolerance for shapes with radial padding (balls and capsules),
    /// relative to the size of the configuration.
    pub rounded_tolerance: Real,
}

impl ConvexCastOptions {
    /// Cast options with all default values except for the maximum cast distance.
    pub fn with_max_cast_distance(max_cast_distance: Real) -> Self {
        Self {
            max_cast_distance,
            ..Default::default()
        }
    }
}

impl Default for ConvexCastOptions {
    fn default() -> Self {
        Self {
            max_cast_distance: Real::MAX,
            max_iterations: 100,
            tiny_threshold: 1.0e-4,
            tiny_rescale: 1000.0,
            parallel_epsilon: 1.0e-5,
            rounded_tolerance: 1.0e-5,
        }
    }
}

/// Computes the distance the shape `g1` travels along `dir` before touching `g2`.
///
/// `g2` is positioned at `pos12` in the local-space of `g1`, and `dir` is expressed in
/// that same local-space.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use portalcast3d::math::{Isometry, Point, Vector, UnitVector};
/// use portalcast3d::query::{cast_convex, ConvexCastOptions};
/// use portalcast3d::shape::{Ball, ConvexShape};
///
/// let ball = ConvexShape::from(Ball::new(Point::origin(), 1.0));
/// let pos12 = Isometry::translation(5.0, 0.0, 0.0);
/// let dir = UnitVector::new_normalize(Vector::x());
///
/// let result = cast_convex(&pos12, &dir, &ball, &ball, ConvexCastOptions::default());
/// assert!(result.hit);
/// assert!((result.distance_of_impact - 3.0).abs() < 1.0e-3);
/// # }
/// ```
pub fn cast_convex(
    pos12: &Isometry<Real>,
    dir: &UnitVector<Real>,
    g1: &ConvexShape,
    g2: &ConvexShape,
    options: ConvexCastOptions,
) -> ConvexCastResult {
    cast_convex_convex(pos12, dir, g1, g2, options, &mut ())
}

/// Same as [`cast_convex`], but reports every stage of the computation to `observer`.
pub fn cast_convex_with_observer<O: CastObserver>(
    pos12: &Isometry<Real>,
    dir: &UnitVector<Real>,
    g1: &ConvexShape,
    g2: &ConvexShape,
    options: ConvexCastOptions,
    observer: &mut O,
) -> ConvexCastResult {
    cast_convex_convex(pos12, dir, g1, g2, options, observer)
}
