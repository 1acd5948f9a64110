use portalcast3d::math::{Isometry, Point, Real, UnitVector, Vector};
use portalcast3d::query::{self, CastStatus, ConvexCastOptions};
use portalcast3d::shape::{Ball, ConvexShape, Cuboid};

fn ball(radius: Real) -> ConvexShape {
    Ball::new(Point::origin(), radius).into()
}

#[test]
fn sphere_sphere_head_on() {
    let b = ball(1.0);
    let pos12 = Isometry::translation(5.0, 0.0, 0.0);
    let dir = UnitVector::new_normalize(Vector::x());

    let res = query::cast_convex(&pos12, &dir, &b, &b, ConvexCastOptions::default());

    assert!(res.hit);
    assert!(!res.something_went_wrong());
    assert_relative_eq!(res.distance_of_impact, 3.0, epsilon = 1.0e-3);
}

#[test]
fn sphere_sphere_iteration_cap() {
    let b = ball(1.0);
    let pos12 = Isometry::translation(5.0, 0.5, 0.0);
    let dir = UnitVector::new_normalize(Vector::x());
    let options = ConvexCastOptions {
        max_iterations: 0,
        ..ConvexCastOptions::default()
    };

    let res = query::cast_convex(&pos12, &dir, &b, &b, options);

    // The unrefined portal is a chord plane of the CSO, past the true contact at
    // 5 - sqrt(3.75).
    assert!(res.hit);
    assert!(res.something_went_wrong());
    assert_eq!(res.status, CastStatus::OutOfIterations);
    assert!(res.distance_of_impact.is_finite());
    assert!(res.distance_of_impact > 5.0 - (3.75 as Real).sqrt());
}

#[test]
fn sphere_sphere_off_center() {
    let b = ball(1.0);
    let pos12 = Isometry::translation(5.0, 1.0, 0.0);
    let dir = UnitVector::new_normalize(Vector::x());

    let res = query::cast_convex(&pos12, &dir, &b, &b, ConvexCastOptions::default());

    // Centers 2 apart at contact, 1 apart laterally.
    assert!(res.hit);
    assert_relative_eq!(
        res.distance_of_impact,
        5.0 - (3.0 as Real).sqrt(),
        epsilon = 1.0e-3
    );
}

#[test]
fn sphere_sphere_misses() {
    let b = ball(1.0);
    let dir = UnitVector::new_normalize(Vector::x());

    let lateral = Isometry::translation(5.0, 2.5, 0.0);
    let res = query::cast_convex(&lateral, &dir, &b, &b, ConvexCastOptions::default());
    assert!(!res.hit);

    let behind = Isometry::translation(-5.0, 0.0, 0.0);
    let res = query::cast_convex(&behind, &dir, &b, &b, ConvexCastOptions::default());
    assert!(!res.hit);

    let too_far = Isometry::translation(5.0, 0.0, 0.0);
    let res = query::cast_convex(
        &too_far,
        &dir,
        &b,
        &b,
        ConvexCastOptions::with_max_cast_distance(2.0),
    );
    assert!(!res.hit);
}

#[test]
fn sphere_cuboid_diagonal() {
    let b = ball(0.5);
    let cuboid = ConvexShape::from(Cuboid::new(Point::origin(), Vector::repeat(1.0)));
    let pos12 = Isometry::translation(-3.0, -3.0, -3.0);
    let dir = UnitVector::new_normalize(-Vector::repeat(1.0));

    let res = query::cast_convex(&pos12, &dir, &b, &cuboid, ConvexCastOptions::default());

    // The ball hits the corner (-2, -2, -2) of the cuboid.
    assert!(res.hit);
    assert_relative_eq!(
        res.distance_of_impact,
        2.0 * (3.0 as Real).sqrt() - 0.5,
        epsilon = 1.0e-3
    );
}
