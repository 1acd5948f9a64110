use crate::math::{Point, Real, Vector};

/// Computes the index of the support point of a cloud of points.
///
/// Points are scanned in increasing index order and only a strictly greater dot product
/// replaces the current best, so ties resolve to the lowest index.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> usize {
    let mut best_pt = 0;
    let mut best_dot = points[0].coords.dot(dir);

    for (i, p) in points.iter().enumerate().skip(1) {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    best_pt
}
