use crate::math::{Isometry, Point, Real, UnitVector};
use crate::query::mpr::{self, PlanarResult, ShapePair};
use crate::query::shape_cast::{
    CastGate, CastObserver, CastStatus, ConvexCastOptions, ConvexCastResult,
};
use crate::query::{Ray, RayCast};
use crate::shape::SupportMap;

/// Distance travelled by `g1` along `dir` before touching `g2` placed at `pos12`.
///
/// The cheap tests come first: support values along the cast direction, then the AABB
/// of the CSO, then the planar reduction. Only then is the entry point located in 3-D.
pub fn cast_convex_convex<G1, G2, O>(
    pos12: &Isometry<Real>,
    dir: &UnitVector<Real>,
    g1: &G1,
    g2: &G2,
    options: ConvexCastOptions,
    observer: &mut O,
) -> ConvexCastResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
    O: ?Sized + CastObserver,
{
    let pair = ShapePair::new(pos12, g1, g2);

    /*
     * Reachability: the line enters the CSO no earlier than `-h(dir)` and leaves it
     * no later than `h(-dir)`.
     */
    let h_fwd = pair.support_value(dir);
    let h_bwd = pair.support_value(&-dir.into_inner());

    if h_bwd < 0.0 || -h_fwd > options.max_cast_distance {
        observer.gate_rejected(CastGate::Reachability);
        return ConvexCastResult::miss();
    }

    /*
     * Lateral AABB test.
     */
    let aabb = pair.aabb();
    if !aabb.contains_local_point(&Point::origin()) {
        let line = Ray::new(Point::origin(), -dir.into_inner());

        if !aabb.intersects_local_ray(&line, Real::MAX)
            && !aabb.intersects_local_ray(&line.reversed(), Real::MAX)
        {
            observer.gate_rejected(CastGate::LateralAabb);
            return ConvexCastResult::miss();
        }
    }

    /*
     * Planar reduction.
     */
    let (planar, planar_status) = match mpr::planar_reduction(&pair, dir, &options, observer) {
        PlanarResult::Separated => {
            observer.gate_rejected(CastGate::Planar);
            return ConvexCastResult::miss();
        }
        PlanarResult::Overlapping(portal) => (portal, CastStatus::Converged),
        PlanarResult::OutOfIterations(portal) => (portal, CastStatus::OutOfIterations),
    };

    /*
     * 3-D resolution.
     */
    let Some((entry, entry_status)) = mpr::line_entry(&pair, dir, &planar, &options, observer)
    else {
        return ConvexCastResult::miss();
    };

    let mut status = planar_status.merge(entry_status);

    if entry < 0.0 {
        // The line entered the CSO before the start of the cast. The shapes overlap at
        // the start only if the line leaves the CSO after it.
        let Some((reverse_entry, exit_status)) =
            mpr::line_entry(&pair, &-*dir, &planar, &options, observer)
        else {
            return ConvexCastResult::miss();
        };

        status = status.merge(exit_status);

        if -reverse_entry < 0.0 {
            observer.gate_rejected(CastGate::Reachability);
            return ConvexCastResult::miss();
        }
    }

    let result = ConvexCastResult {
        distance_of_impact: entry,
        hit: entry <= options.max_cast_distance,
        status,
    };

    observer.resolved(&result);
    result
}
