//! Refinement of a portal toward the boundary of the CSO, and extraction of the distance
//! from the ray origin to the refined portal.

use crate::math::{Point, Real, Vector};
use crate::query::closest_points::closest_points_segment_segment;
use crate::query::mpr::{side, Portal, ShapePair};
use crate::query::ray::{local_ray_intersection_with_quad, Ray};
use crate::query::shape_cast::{CastObserver, CastStatus, ConvexCastOptions};
use crate::shape::{SupportMap, SupportPoint};
use crate::utils;
use std::mem;

/// Moves `portal` toward the part of the CSO boundary facing the ray origin.
///
/// The CSO is translated by `-shift` and the ray starts at the origin with the direction
/// `dir`. The portal must be crossed by the ray, which stays true after each step.
pub fn refine_portal<G1, G2, O>(
    pair: &ShapePair<G1, G2>,
    shift: &Vector<Real>,
    dir: &Vector<Real>,
    mut portal: Portal,
    options: &ConvexCastOptions,
    observer: &mut O,
) -> (Portal, CastStatus)
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
    O: ?Sized + CastObserver,
{
    let rescale =
        |v: Vector<Real>| utils::rescale_if_tiny(v, options.tiny_threshold, options.tiny_rescale);
    let support = |search_dir: &Vector<Real>| {
        let sp = pair.support(search_dir);
        SupportPoint::new(sp.point - shift, sp.id)
    };

    let scale = portal
        .vertices()
        .iter()
        .fold(1.0 as Real, |acc, pt| acc.max(pt.point.coords.amax()));
    let tolerance = options.rounded_tolerance * scale;
    let mut last_evicted: Option<SupportPoint> = None;

    for niter in 0..options.max_iterations {
        let mut normal = (portal.b.point - portal.a.point).cross(&(portal.c.point - portal.b.point));

        if normal.dot(dir) > 0.0 {
            normal = -normal;
        }

        if normal == Vector::zeros() {
            normal = -*dir;
        }

        let normal = rescale(normal);
        let pt = support(&normal);

        observer.refine_iteration(niter, &portal, &pt);

        if portal.contains_feature(&pt) {
            return (portal, CastStatus::Converged);
        }

        // Stop instead of bouncing between two vertices.
        if last_evicted.is_some_and(|evicted| pt.same_feature(&evicted)) {
            log::debug!(
                "portal refinement: vertex {:#x} evicted then found again.",
                pt.id
            );
            return (portal, CastStatus::Converged);
        }

        let advance = (pt.point - portal.a.point).dot(&normal);

        if pair.is_rounded() {
            if advance <= tolerance * normal.norm() {
                return (portal, CastStatus::Converged);
            }
        } else if advance <= 0.0 {
            // A new vertex coplanar with the portal, e.g., the fourth corner of a box face.
            log::debug!(
                "portal refinement: support {:#x} does not advance past the portal.",
                pt.id
            );
            return (portal, CastStatus::Converged);
        }

        // Pick the sub-portal containing the ray. If rounding errors make all of them
        // fail, take the least violating one.
        let s_pa = side(&pt, &portal.a, dir);
        let s_pb = side(&pt, &portal.b, dir);
        let s_pc = side(&pt, &portal.c, dir);
        let scores = [s_pb.min(-s_pc), (-s_pa).min(s_pc), (-s_pb).min(s_pa)];

        let mut best = 0;
        for i in 1..3 {
            if scores[i] > scores[best] {
                best = i;
            }
        }

        let evicted = match best {
            0 => mem::replace(&mut portal.a, pt),
            1 => mem::replace(&mut portal.b, pt),
            _ => mem::replace(&mut portal.c, pt),
        };

        portal.ensure_orientation();
        last_evicted = Some(evicted);
    }

    log::debug!(
        "portal refinement: reached the iteration cap ({}).",
        options.max_iterations
    );
    (portal, CastStatus::OutOfIterations)
}

/// The distance from the origin to the portal, along the ray with the unit direction `dir`.
///
/// If the portal plane is almost parallel to `dir`, the portal is either a thin sliver
/// (handled as its longest edge) or coplanar with the ray (handled by casting the ray on
/// the prism obtained by extruding the portal along its normal).
pub fn portal_distance(portal: &Portal, dir: &Vector<Real>, options: &ConvexCastOptions) -> Real {
    let [a, b, c] = [portal.a.point, portal.b.point, portal.c.point];
    let edges = [(a, b), (b, c), (c, a)];

    let mut longest = edges[0];
    let mut longest_sq = (a - b).norm_squared();
    for edge in &edges[1..] {
        let len_sq = (edge.1 - edge.0).norm_squared();
        if len_sq > longest_sq {
            longest = *edge;
            longest_sq = len_sq;
        }
    }

    if longest_sq == 0.0 {
        return a.coords.norm();
    }

    let normal = (b - a).cross(&(c - a));
    let normal_len = normal.norm();

    if normal_len <= options.parallel_epsilon * longest_sq {
        // The triangle collapsed to a segment.
        return segment_distance(&longest.0, &longest.1, dir);
    }

    let normal = normal / normal_len;
    let denom = normal.dot(dir);

    if denom.abs() >= options.parallel_epsilon {
        return (normal.dot(&a.coords) / denom).abs();
    }

    // The ray lies in the portal plane: it enters the portal through one of its edges.
    let offset = normal * longest_sq.sqrt();
    let ray = Ray::new(Point::origin(), *dir);
    let mut best: Option<Real> = None;

    for (p, q) in &edges {
        let toi = local_ray_intersection_with_quad(
            &(p + offset),
            &(q + offset),
            &(q - offset),
            &(p - offset),
            &ray,
        );

        if let Some(toi) = toi {
            best = Some(best.map_or(toi, |b| b.min(toi)));
        }
    }

    best.unwrap_or_else(|| segment_distance(&longest.0, &longest.1, dir))
}

/// Distance from the origin to the point of the segment `[p, q]` closest to the ray.
fn segment_distance(p: &Point<Real>, q: &Point<Real>, dir: &Vector<Real>) -> Real {
    // With a segment aligned with the ray, this selects the endpoint closest to the origin.
    let (p, q) = if p.coords.dot(dir) <= q.coords.dot(dir) {
        (p, q)
    } else {
        (q, p)
    };

    let reach = p.coords.norm().max(q.coords.norm()) * 2.0 + 1.0;
    let ray_end = Point::from(dir * reach);
    let (closest, _) = closest_points_segment_segment((p, q), (&Point::origin(), &ray_end));
    closest.coords.norm()
}
