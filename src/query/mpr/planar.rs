//! Reduction of the cast to the plane orthogonal to the cast direction.
//!
//! The cast line intersects the CSO iff the origin belongs to the projection of the CSO
//! on the plane orthogonal to the cast direction. This runs a 2-D portal refinement in
//! that plane, starting from the projected center of the CSO.

use crate::math::{Real, UnitVector, Vector};
use crate::query::mpr::ShapePair;
use crate::query::shape_cast::{CastObserver, ConvexCastOptions};
use crate::shape::{SupportMap, SupportPoint};
use crate::utils::{self, WBasis};

/// A two-point portal of the projected CSO containing the origin.
///
/// The directions used to compute each support point are kept so that the points can be
/// recomputed with their padding from their ids.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlanarPortal {
    /// The first support point.
    pub a: SupportPoint,
    /// The direction `a` was computed along.
    pub dir_a: Vector<Real>,
    /// The second support point.
    pub b: SupportPoint,
    /// The direction `b` was computed along.
    pub dir_b: Vector<Real>,
}

/// The outcome of the planar reduction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlanarResult {
    /// The cast line does not intersect the CSO.
    Separated,
    /// The cast line intersects the CSO.
    Overlapping(PlanarPortal),
    /// The iteration cap was reached. The line is assumed to intersect the CSO.
    OutOfIterations(PlanarPortal),
}

/// Determines whether the line through the origin directed by `axis` intersects the CSO.
pub fn planar_reduction<G1, G2, O>(
    pair: &ShapePair<G1, G2>,
    axis: &UnitVector<Real>,
    options: &ConvexCastOptions,
    observer: &mut O,
) -> PlanarResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
    O: ?Sized + CastObserver,
{
    let flatten = |v: &Vector<Real>| v - axis.into_inner() * axis.dot(v);
    let rescale = |v: Vector<Real>| {
        utils::rescale_if_tiny(v, options.tiny_threshold, options.tiny_rescale)
    };

    // Rounding errors on projected points grow with the coordinates of the CSO.
    let aabb = pair.aabb();
    let scale = aabb.mins.coords.amax().max(aabb.maxs.coords.amax());
    let tolerance = options.tiny_threshold * scale;

    let start = flatten(&pair.center().coords);
    let to_origin = -start;

    if to_origin.norm() <= tolerance {
        // The projected center is the origin: pick any two supports spanning the plane.
        let [e1, e2] = axis.into_inner().orthonormal_basis();
        let a = pair.support(&e1);
        let mut dir_b = e2;
        let mut b = pair.support(&dir_b);

        if b.same_feature(&a) {
            dir_b = -e2;
            b = pair.support(&dir_b);
        }

        observer.planar_iteration(0, &a, &b);
        return PlanarResult::Overlapping(PlanarPortal {
            a,
            dir_a: e1,
            b,
            dir_b,
        });
    }

    let dir_a = rescale(to_origin);
    let mut a = pair.support(&dir_a);

    if flatten(&a.point.coords).dot(&dir_a) < -tolerance * dir_a.norm() {
        return PlanarResult::Separated;
    }

    let flat_a = flatten(&a.point.coords);
    let mut dir_b = axis.cross(&(flat_a - start));
    let alignment = dir_b.dot(&to_origin);

    if alignment.abs() <= options.parallel_epsilon * dir_b.norm() * to_origin.norm() {
        // `a` lies on the ray from the start point to the origin, past the origin. The
        // origin is inside of the projection of the CSO.
        dir_b = rescale(dir_b);
        let mut b = pair.support(&dir_b);

        if b.same_feature(&a) {
            dir_b = -dir_b;
            b = pair.support(&dir_b);
        }

        observer.planar_iteration(0, &a, &b);
        return PlanarResult::Overlapping(PlanarPortal { a, dir_a, b, dir_b });
    }

    if alignment < 0.0 {
        dir_b = -dir_b;
    }

    dir_b = rescale(dir_b);
    let mut b = pair.support(&dir_b);

    if flatten(&b.point.coords).dot(&dir_b) < -tolerance * dir_b.norm() {
        return PlanarResult::Separated;
    }

    let mut dir_a = dir_a;
    observer.planar_iteration(0, &a, &b);

    for niter in 1..=options.max_iterations {
        let flat_a = flatten(&a.point.coords);
        let flat_b = flatten(&b.point.coords);

        // Portal normal, pointing away from the start point.
        let mut normal = axis.cross(&(flat_b - flat_a));
        if normal.dot(&(flat_a - start)) < 0.0 {
            normal = -normal;
        }
        let normal = rescale(normal);

        if flat_a.dot(&normal) >= 0.0 {
            // The origin is inside of the triangle formed by the start point and the portal.
            return PlanarResult::Overlapping(PlanarPortal { a, dir_a, b, dir_b });
        }

        let s = pair.support(&normal);
        let flat_s = flatten(&s.point.coords);

        if flat_s.dot(&normal) < -tolerance * normal.norm()
            || s.same_feature(&a)
            || s.same_feature(&b)
        {
            return PlanarResult::Separated;
        }

        if pair.is_rounded() {
            let advance = (flat_s - flat_a).dot(&normal);
            if advance <= options.rounded_tolerance * normal.norm() {
                return PlanarResult::Separated;
            }
        }

        // Split the wedge with the line from the start point to `s` and keep the half
        // containing the origin.
        let side_origin = axis.dot(&(flat_s - start).cross(&to_origin));
        let side_a = axis.dot(&(flat_s - start).cross(&(flat_a - start)));

        if (side_origin >= 0.0) == (side_a >= 0.0) {
            b = s;
            dir_b = normal;
        } else {
            a = s;
            dir_a = normal;
        }

        observer.planar_iteration(niter, &a, &b);
    }

    log::debug!(
        "planar reduction: reached the iteration cap ({}).",
        options.max_iterations
    );
    PlanarResult::OutOfIterations(PlanarPortal { a, dir_a, b, dir_b })
}
