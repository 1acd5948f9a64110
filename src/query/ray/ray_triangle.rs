use crate::math::{Point, Real};
use crate::query::Ray;
use na::Vector3;

/// Computes the intersection between a triangle and a ray.
///
/// If an intersection is found, the time of impact and the barycentric coordinates of
/// the intersection point are returned. Both faces of the triangle can be hit. A ray
/// lying in the plane of the triangle never hits it.
pub fn local_ray_intersection_with_triangle(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    ray: &Ray,
) -> Option<(Real, Vector3<Real>)> {
    let ab = *b - *a;
    let ac = *c - *a;

    // normal
    let n = ab.cross(&ac);
    let d = n.dot(&ray.dir);

    // the normal and the ray direction are parallel
    if d == 0.0 {
        return None;
    }

    let ap = ray.origin - *a;
    let t = ap.dot(&n);

    // the ray does not intersect the halfspace defined by the triangle
    if (t < 0.0 && d < 0.0) || (t > 0.0 && d > 0.0) {
        return None;
    }

    let d = d.abs();

    //
    // intersection: compute barycentric coordinates
    //
    let e = -ray.dir.cross(&ap);

    let mut v;
    let mut w;
    let toi;

    if t < 0.0 {
        v = -ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        let invd = 1.0 / d;
        toi = -t * invd;
        v *= invd;
        w *= invd;
    } else {
        v = ac.dot(&e);

        if v < 0.0 || v > d {
            return None;
        }

        w = -ab.dot(&e);

        if w < 0.0 || v + w > d {
            return None;
        }

        let invd = 1.0 / d;
        toi = t * invd;
        v *= invd;
        w *= invd;
    }

    Some((toi, Vector3::new(-v - w + 1.0, v, w)))
}

/// Computes the time of impact between a ray and the planar quad `a, b, c, d`.
///
/// The quad is split along its `a, c` diagonal and the earliest hit of both halves is
/// returned.
pub fn local_ray_intersection_with_quad(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    d: &Point<Real>,
    ray: &Ray,
) -> Option<Real> {
    let toi1 = local_ray_intersection_with_triangle(a, b, c, ray).map(|inter| inter.0);
    let toi2 = local_ray_intersection_with_triangle(a, c, d, ray).map(|inter| inter.0);

    match (toi1, toi2) {
        (Some(t1), Some(t2)) => Some(t1.min(t2)),
        (t1, t2) => t1.or(t2),
    }
}
