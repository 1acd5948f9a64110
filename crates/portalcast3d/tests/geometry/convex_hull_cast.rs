use portalcast3d::math::{Isometry, Point, UnitVector, Vector};
use portalcast3d::query::{self, CastStatus, ConvexCastOptions};
use portalcast3d::shape::{ConvexHull, ConvexShape, Cuboid};

fn octahedron() -> ConvexShape {
    ConvexHull::try_new(vec![
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ])
    .unwrap()
    .into()
}

#[test]
fn octahedron_cuboid() {
    let hull = octahedron();
    let cuboid = ConvexShape::from(Cuboid::new(Point::origin(), Vector::repeat(0.5)));
    let pos12 = Isometry::translation(4.0, 0.0, 0.0);
    let dir = UnitVector::new_normalize(Vector::x());

    let res = query::cast_convex(&pos12, &dir, &hull, &cuboid, ConvexCastOptions::default());

    assert!(res.hit);
    assert_eq!(res.status, CastStatus::Converged);
    assert_relative_eq!(res.distance_of_impact, 2.5, epsilon = 1.0e-4);
}

#[test]
fn cuboid_octahedron_reversed_roles() {
    let hull = octahedron();
    let cuboid = ConvexShape::from(Cuboid::new(Point::origin(), Vector::repeat(0.5)));
    let pos12 = Isometry::translation(-4.0, 0.0, 0.0);
    let dir = UnitVector::new_normalize(-Vector::x());

    let res = query::cast_convex(&pos12, &dir, &cuboid, &hull, ConvexCastOptions::default());

    assert!(res.hit);
    assert_relative_eq!(res.distance_of_impact, 2.5, epsilon = 1.0e-4);
}

#[test]
fn scaled_octahedron_face_hit() {
    let hull = octahedron();
    let flat = match &hull {
        ConvexShape::ConvexHull(h) => ConvexShape::from(h.scaled(Vector::new(1.0, 1.0, 0.1)).unwrap()),
        _ => unreachable!(),
    };
    let cuboid = ConvexShape::from(Cuboid::new(Point::origin(), Vector::new(2.0, 2.0, 0.5)));
    let pos12 = Isometry::translation(0.0, 0.0, 3.0);
    let dir = UnitVector::new_normalize(Vector::z());

    let res = query::cast_convex(&pos12, &dir, &flat, &cuboid, ConvexCastOptions::default());

    // Apex at z = 0.1 against the face at z = 2.5.
    assert!(res.hit);
    assert_relative_eq!(res.distance_of_impact, 2.4, epsilon = 1.0e-4);
}
