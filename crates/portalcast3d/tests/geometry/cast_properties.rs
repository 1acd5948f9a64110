use oorandom::Rand32;
use portalcast3d::math::{Isometry, Point, Real, UnitVector, Vector};
use portalcast3d::query::{self, ConvexCastOptions};
use portalcast3d::shape::{Ball, Capsule, ConvexHull, ConvexShape, Cuboid, SupportMap, Triangle};

fn shapes() -> Vec<ConvexShape> {
    vec![
        Ball::new(Point::new(0.1, 0.0, 0.0), 0.5).into(),
        Capsule::new_y(0.75, 0.3).into(),
        Cuboid::new(Point::origin(), Vector::new(0.5, 0.3, 0.7)).into(),
        Triangle::new(
            Point::new(-0.5, -0.5, 0.0),
            Point::new(0.5, -0.5, 0.0),
            Point::new(0.0, 0.5, 0.2),
        )
        .into(),
        ConvexHull::try_new(vec![
            Point::new(0.6, 0.0, 0.0),
            Point::new(-0.4, 0.5, 0.0),
            Point::new(-0.4, -0.5, 0.1),
            Point::new(0.0, 0.0, 0.8),
            Point::new(0.0, 0.1, -0.6),
        ])
        .unwrap()
        .into(),
    ]
}

fn random_unit(rng: &mut Rand32) -> UnitVector<Real> {
    loop {
        let v = Vector::new(
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
            rng.rand_float() * 2.0 - 1.0,
        );

        if let Some(dir) = UnitVector::try_new(v, 1.0e-3) {
            return dir;
        }
    }
}

fn random_pose(rng: &mut Rand32, spread: Real) -> Isometry<Real> {
    let translation = random_unit(rng).into_inner() * spread * rng.rand_float();
    let axisangle = random_unit(rng).into_inner() * rng.rand_float() * 3.0;
    Isometry::new(translation, axisangle)
}

#[test]
fn cast_is_bitwise_deterministic() {
    let mut rng = Rand32::new(42);
    let shapes = shapes();

    for _ in 0..200 {
        let g1 = &shapes[rng.rand_range(0..5) as usize];
        let g2 = &shapes[rng.rand_range(0..5) as usize];
        let pos12 = random_pose(&mut rng, 4.0);
        let dir = random_unit(&mut rng);

        let res1 = query::cast_convex(&pos12, &dir, g1, g2, ConvexCastOptions::default());
        let res2 = query::cast_convex(&pos12, &dir, g1, g2, ConvexCastOptions::default());

        assert_eq!(
            res1.distance_of_impact.to_bits(),
            res2.distance_of_impact.to_bits()
        );
        assert_eq!(res1.hit, res2.hit);
        assert_eq!(res1.status, res2.status);
        assert!(!res1.distance_of_impact.is_nan());
    }
}

#[test]
fn overlapping_shapes_hit_at_non_positive_distance() {
    let mut rng = Rand32::new(7);
    let shapes = shapes();

    for _ in 0..200 {
        let g1 = &shapes[rng.rand_range(0..5) as usize];
        // Keep at least one solid shape so the shared center is interior to the CSO.
        let g2 = &shapes[rng.rand_range(0..3) as usize];
        let rotation = random_pose(&mut rng, 0.0).rotation;
        let translation = g1.center().coords - rotation * g2.center().coords;
        let pos12 = Isometry::from_parts(translation.into(), rotation);
        let dir = random_unit(&mut rng);

        let res = query::cast_convex(&pos12, &dir, g1, g2, ConvexCastOptions::default());

        assert!(res.hit);
        assert!(res.distance_of_impact <= 1.0e-4);
    }
}

#[test]
fn hits_are_monotonic_in_max_cast_distance() {
    let mut rng = Rand32::new(1234);
    let shapes = shapes();

    for _ in 0..200 {
        let g1 = &shapes[rng.rand_range(0..5) as usize];
        let g2 = &shapes[rng.rand_range(0..5) as usize];
        let pos12 = random_pose(&mut rng, 4.0);
        let dir = random_unit(&mut rng);

        let unbounded = query::cast_convex(&pos12, &dir, g1, g2, ConvexCastOptions::default());

        if unbounded.hit && unbounded.distance_of_impact > 0.0 {
            let toi = unbounded.distance_of_impact;

            for max_dist in [toi, toi * 1.5 + 0.1, toi * 10.0] {
                let bounded = query::cast_convex(
                    &pos12,
                    &dir,
                    g1,
                    g2,
                    ConvexCastOptions::with_max_cast_distance(max_dist),
                );
                assert!(bounded.hit);
                assert_eq!(bounded.distance_of_impact.to_bits(), toi.to_bits());
                assert_eq!(bounded.status, unbounded.status);
            }

            let short = query::cast_convex(
                &pos12,
                &dir,
                g1,
                g2,
                ConvexCastOptions::with_max_cast_distance(toi * 0.5),
            );
            assert!(!short.hit);
        }
    }
}

#[test]
fn swapping_caster_and_target_preserves_hits() {
    let cuboid = ConvexShape::from(Cuboid::new(Point::origin(), Vector::new(0.5, 0.3, 0.7)));
    let capsule = ConvexShape::from(Capsule::new_y(0.75, 0.3));
    let ball = ConvexShape::from(Ball::new(Point::origin(), 0.5));

    let cases = [
        (&cuboid, &capsule, Vector::new(3.0, 0.2, 0.1), Vector::x(), true),
        (&cuboid, &ball, Vector::new(3.0, 2.0, 0.0), Vector::x(), false),
        (&capsule, &ball, Vector::new(0.0, 4.0, 0.5), Vector::y(), true),
        (&capsule, &cuboid, Vector::new(-2.0, -2.0, 0.0), Vector::new(-1.0, -1.0, 0.0), true),
        (&ball, &cuboid, Vector::new(-2.0, 2.0, 0.0), Vector::new(1.0, 1.0, 0.0), false),
    ];

    for (g1, g2, translation, dir, expected) in cases {
        let pos12 = Isometry::new(translation, Vector::new(0.1, 0.2, 0.3));
        let dir = UnitVector::new_normalize(dir);

        let res12 = query::cast_convex(&pos12, &dir, g1, g2, ConvexCastOptions::default());

        // Seen from the target, the caster moves in the opposite direction.
        let pos21 = pos12.inverse();
        let dir21 = UnitVector::new_normalize(pos12.inverse_transform_vector(&-dir.into_inner()));
        let res21 = query::cast_convex(&pos21, &dir21, g2, g1, ConvexCastOptions::default());

        assert_eq!(res12.hit, expected);
        assert_eq!(res21.hit, expected);

        if expected {
            assert_relative_eq!(
                res12.distance_of_impact,
                res21.distance_of_impact,
                epsilon = 1.0e-3
            );
        }
    }
}

#[test]
fn casts_aimed_at_the_target_center_hit() {
    let mut rng = Rand32::new(99);
    let shapes = shapes();
    // Only solid shapes: the cast line passes through the interior of the CSO.
    let solids = [&shapes[0], &shapes[1], &shapes[2], &shapes[4]];

    for i in 0..200 {
        let g1 = solids[rng.rand_range(0..4) as usize];
        let g2 = solids[rng.rand_range(0..4) as usize];
        let dir = random_unit(&mut rng);
        let rotation = random_pose(&mut rng, 0.0).rotation;

        // Every other cast is slightly off-center, well within both shapes.
        let lateral = if i % 2 == 0 {
            Vector::zeros()
        } else {
            random_unit(&mut rng)
                .cross(&dir.into_inner())
                .try_normalize(1.0e-3)
                .unwrap_or_else(Vector::zeros)
                * 0.1
        };

        let target = g1.center().coords + dir.into_inner() * 3.0 + lateral;
        let translation = target - rotation * g2.center().coords;
        let pos12 = Isometry::from_parts(translation.into(), rotation);

        let res12 = query::cast_convex(&pos12, &dir, g1, g2, ConvexCastOptions::default());

        let pos21 = pos12.inverse();
        let dir21 = UnitVector::new_normalize(pos12.inverse_transform_vector(&-dir.into_inner()));
        let res21 = query::cast_convex(&pos21, &dir21, g2, g1, ConvexCastOptions::default());

        assert!(res12.hit, "cast {} missed: {:?}", i, res12);
        assert!(res21.hit, "reversed cast {} missed: {:?}", i, res21);
        assert!(res12.distance_of_impact > 0.0 && res12.distance_of_impact < 3.0);
        assert_relative_eq!(
            res12.distance_of_impact,
            res21.distance_of_impact,
            epsilon = 1.0e-3
        );
    }
}
