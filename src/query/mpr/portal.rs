//! Search for a triangular portal of the CSO crossed by a ray starting at the origin.

use crate::math::{Real, Vector};
use crate::query::mpr::ShapePair;
use crate::query::shape_cast::{CastObserver, CastStatus, ConvexCastOptions};
use crate::shape::{SupportMap, SupportPoint};
use crate::utils;

/// Three support points of the CSO, translated so that the ray starts at the origin.
///
/// The portal is valid when the ray lies inside of the cone formed by the origin and the
/// three vertices, i.e., when `side(a, b)`, `side(b, c)`, and `side(c, a)` are all
/// non-negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Portal {
    /// The first vertex of the portal.
    pub a: SupportPoint,
    /// The second vertex of the portal.
    pub b: SupportPoint,
    /// The third vertex of the portal.
    pub c: SupportPoint,
}

/// The outcome of a portal search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PortalSearch {
    /// The portal is crossed by the ray.
    Found(Portal, CastStatus),
    /// The ray does not intersect the CSO.
    Separated,
}

/// On which side of the plane spanned by the origin, `x` and `y` does the ray `dir` lie?
///
/// Positive when `dir` lies on the side `cross(x, y)` points to.
#[inline]
pub fn side(x: &SupportPoint, y: &SupportPoint, dir: &Vector<Real>) -> Real {
    x.point.coords.cross(&y.point.coords).dot(dir)
}

impl Portal {
    /// Creates a portal, re-ordering its vertices to make it counterclockwise around the
    /// origin.
    pub fn new(a: SupportPoint, b: SupportPoint, c: SupportPoint) -> Self {
        let mut portal = Portal { a, b, c };
        portal.ensure_orientation();
        portal
    }

    /// Swaps `b` and `c` if `a, b, c` are clockwise when seen from the origin.
    #[inline]
    pub fn ensure_orientation(&mut self) {
        let normal = self.a.point.coords.cross(&self.b.point.coords);
        if normal.dot(&self.c.point.coords) < 0.0 {
            std::mem::swap(&mut self.b, &mut self.c);
        }
    }

    /// Is `pt` the same feature as one of the portal's vertices?
    #[inline]
    pub fn contains_feature(&self, pt: &SupportPoint) -> bool {
        pt.same_feature(&self.a) || pt.same_feature(&self.b) || pt.same_feature(&self.c)
    }

    /// Is the ray directed by `dir` inside of the cone spanned by this portal?
    #[inline]
    pub fn is_crossed_by(&self, dir: &Vector<Real>) -> bool {
        side(&self.a, &self.b, dir) >= 0.0
            && side(&self.b, &self.c, dir) >= 0.0
            && side(&self.c, &self.a, dir) >= 0.0
    }

    /// The vertices of the portal.
    #[inline]
    pub fn vertices(&self) -> [&SupportPoint; 3] {
        [&self.a, &self.b, &self.c]
    }
}

/// Finds a portal crossed by the ray from the origin with direction `dir`.
///
/// The CSO is translated by `-shift`. The search starts from the portal formed by `a`,
/// `b`, and a third support point on the side of the plane `(origin, a, b)` containing
/// the ray.
pub fn search_portal<G1, G2, O>(
    pair: &ShapePair<G1, G2>,
    shift: &Vector<Real>,
    dir: &Vector<Real>,
    a: SupportPoint,
    b: SupportPoint,
    options: &ConvexCastOptions,
    observer: &mut O,
) -> PortalSearch
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

    let mut search_dir = a.point.coords.cross(&b.point.coords);
    if search_dir.dot(dir) < 0.0 {
        search_dir = -search_dir;
    }

    if search_dir == Vector::zeros() {
        // `a`, `b`, and the origin are aligned.
        let [e1, _] = utils::WBasis::orthonormal_basis(*dir);
        search_dir = e1;
    }

    let c = support(&rescale(search_dir));
    let mut portal = Portal::new(a, b, c);

    observer.portal_search_iteration(0, &portal);

    for niter in 1..=options.max_iterations {
        let faces = [
            (side(&portal.a, &portal.b, dir), portal.a, portal.b),
            (side(&portal.b, &portal.c, dir), portal.b, portal.c),
            (side(&portal.c, &portal.a, dir), portal.c, portal.a),
        ];

        let Some(face) = faces.iter().position(|f| f.0 < 0.0) else {
            return PortalSearch::Found(portal, CastStatus::Converged);
        };

        let (_, x, y) = faces[face];
        let search_dir = rescale(-x.point.coords.cross(&y.point.coords));
        let new_pt = support(&search_dir);

        if new_pt.point.coords.dot(&search_dir) <= 0.0 {
            // The whole CSO is on the other side of the face plane.
            return PortalSearch::Separated;
        }

        if new_pt.same_feature(&x) || new_pt.same_feature(&y) {
            log::debug!("portal search: duplicate support point {:#x}.", new_pt.id);
            return PortalSearch::Found(portal, CastStatus::Degenerate);
        }

        // Replace the vertex opposite to the face.
        match face {
            0 => portal.c = new_pt,
            1 => portal.a = new_pt,
            _ => portal.b = new_pt,
        }

        portal.ensure_orientation();
        observer.portal_search_iteration(niter, &portal);
    }

    log::debug!(
        "portal search: reached the iteration cap ({}).",
        options.max_iterations
    );
    PortalSearch::Found(portal, CastStatus::OutOfIterations)
}
