use crate::math::{Real, UnitVector, Vector};
use crate::query::mpr::{
    portal_distance, refine_portal, search_portal, PlanarPortal, PortalSearch, ShapePair,
};
use crate::query::shape_cast::{CastGate, CastObserver, CastStatus, ConvexCastOptions};
use crate::shape::{SupportMap, SupportPoint};

/// Extra clearance between the retracted ray origin and the CSO.
const SLIDE_MARGIN: Real = 1.0e-2;

/// Where the line `p(t) = -t * axis` enters the CSO.
///
/// The line must intersect the CSO, as certified by the `planar` portal. Returns the
/// parameter `t` of the entry point, or `None` if the 3-D portal search finds the line
/// misses the CSO after all.
pub fn line_entry<G1, G2, O>(
    pair: &ShapePair<G1, G2>,
    axis: &UnitVector<Real>,
    planar: &PlanarPortal,
    options: &ConvexCastOptions,
    observer: &mut O,
) -> Option<(Real, CastStatus)>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
    O: ?Sized + CastObserver,
{
    let axis = axis.into_inner();
    let h_fwd = pair.support_value(&axis);
    let h_bwd = pair.support_value(&-axis);

    // Retract the origin of the line strictly before its earliest possible entry, so it
    // can be used as the origin of a ray.
    let thickness = h_fwd + h_bwd;
    let margin = thickness.abs() * 0.5 + SLIDE_MARGIN;
    let slide = h_fwd + margin;
    let shift = axis * slide;
    let dir = -axis;

    let rederive = |id: u32, search_dir: &Vector<Real>| {
        let sp = pair.support_from_id(id, search_dir);
        SupportPoint::new(sp.point - shift, sp.id)
    };
    let a = rederive(planar.a.id, &planar.dir_a);
    let b = rederive(planar.b.id, &planar.dir_b);

    match search_portal(pair, &shift, &dir, a, b, options, observer) {
        PortalSearch::Separated => {
            observer.gate_rejected(CastGate::PortalSearch);
            None
        }
        PortalSearch::Found(portal, search_status) => {
            let (portal, refine_status) =
                refine_portal(pair, &shift, &dir, portal, options, observer);
            let distance = portal_distance(&portal, &dir, options);
            Some((distance - slide, search_status.merge(refine_status)))
        }
    }
}
