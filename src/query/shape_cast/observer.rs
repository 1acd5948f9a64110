use crate::query::mpr::Portal;
use crate::query::shape_cast::ConvexCastResult;
use crate::shape::SupportPoint;

/// The early-out tests of a convex shape cast.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CastGate {
    /// The support values along the cast direction show the cast line cannot reach the CSO.
    Reachability,
    /// The cast line misses the AABB of the CSO.
    LateralAabb,
    /// The cast line misses the CSO projected on the plane orthogonal to the cast direction.
    Planar,
    /// No portal of the CSO is crossed by the cast line.
    PortalSearch,
}

/// Receives the intermediate states of a convex shape cast.
///
/// Every method does nothing by default. `()` is the no-op observer.
pub trait CastObserver {
    /// Called when the cast is rejected by one of its early-out tests.
    fn gate_rejected(&mut self, _gate: CastGate) {}

    /// Called after each step of the planar reduction, with the current 2-point portal.
    fn planar_iteration(&mut self, _iteration: usize, _a: &SupportPoint, _b: &SupportPoint) {}

    /// Called after each step of the portal search.
    fn portal_search_iteration(&mut self, _iteration: usize, _portal: &Portal) {}

    /// Called after each step of the portal refinement, with the support point fetched
    /// along the portal normal.
    fn refine_iteration(&mut self, _iteration: usize, _portal: &Portal, _support: &SupportPoint) {
    }

    /// Called once with the final result of a cast that reached the portal refinement.
    fn resolved(&mut self, _result: &ConvexCastResult) {}
}

impl CastObserver for () {}

/// An observer forwarding every event to the `log` crate at the `trace` level.
#[derive(Copy, Clone, Debug, Default)]
pub struct LogObserver;

impl CastObserver for LogObserver {
    fn gate_rejected(&mut self, gate: CastGate) {
        log::trace!("shape cast rejected by gate {:?}", gate);
    }

    fn planar_iteration(&mut self, iteration: usize, a: &SupportPoint, b: &SupportPoint) {
        log::trace!(
            "planar iteration {}: a = {} ({:#x}), b = {} ({:#x})",
            iteration,
            a.point,
            a.id,
            b.point,
            b.id
        );
    }

    fn portal_search_iteration(&mut self, iteration: usize, portal: &Portal) {
        log::trace!("portal search iteration {}: {:?}", iteration, portal);
    }

    fn refine_iteration(&mut self, iteration: usize, portal: &Portal, support: &SupportPoint) {
        log::trace!(
            "refine iteration {}: {:?}, support = {} ({:#x})",
            iteration,
            portal,
            support.point,
            support.id
        );
    }

    fn resolved(&mut self, result: &ConvexCastResult) {
        log::trace!("shape cast resolved: {:?}", result);
    }
}
