use portalcast3d::math::{Isometry, Point, Real, UnitVector, Vector};
use portalcast3d::query::{
    self, CastGate, CastObserver, CastStatus, ConvexCastOptions, ConvexCastResult,
};
use portalcast3d::query::mpr::Portal;
use portalcast3d::shape::{ConvexShape, Cuboid, SupportPoint};

fn unit_cube() -> ConvexShape {
    Cuboid::new(Point::origin(), Vector::repeat(0.5)).into()
}

#[derive(Default)]
struct Recorder {
    gates: Vec<CastGate>,
    planar_steps: usize,
    refine_steps: usize,
    resolved: Option<ConvexCastResult>,
}

impl CastObserver for Recorder {
    fn gate_rejected(&mut self, gate: CastGate) {
        self.gates.push(gate);
    }

    fn planar_iteration(&mut self, _: usize, _: &SupportPoint, _: &SupportPoint) {
        self.planar_steps += 1;
    }

    fn refine_iteration(&mut self, _: usize, _: &Portal, _: &SupportPoint) {
        self.refine_steps += 1;
    }

    fn resolved(&mut self, result: &ConvexCastResult) {
        self.resolved = Some(*result);
    }
}

#[test]
fn box_box_head_on() {
    let cube = unit_cube();
    let pos12 = Isometry::translation(5.0, 0.0, 0.0);
    let dir = UnitVector::new_normalize(Vector::x());
    let mut recorder = Recorder::default();

    let res = query::cast_convex_with_observer(
        &pos12,
        &dir,
        &cube,
        &cube,
        ConvexCastOptions::default(),
        &mut recorder,
    );

    assert!(res.hit);
    assert_eq!(res.status, CastStatus::Converged);
    assert_relative_eq!(res.distance_of_impact, 4.0, epsilon = 1.0e-4);
    assert!(recorder.gates.is_empty());
    assert!(recorder.refine_steps > 0);
    assert_eq!(recorder.resolved, Some(res));
}

#[test]
fn box_box_lateral_miss_is_rejected_early() {
    let cube = unit_cube();
    let pos12 = Isometry::translation(0.0, 5.0, 0.0);
    let dir = UnitVector::new_normalize(Vector::x());
    let mut recorder = Recorder::default();

    let res = query::cast_convex_with_observer(
        &pos12,
        &dir,
        &cube,
        &cube,
        ConvexCastOptions::default(),
        &mut recorder,
    );

    assert!(!res.hit);
    assert_eq!(res.distance_of_impact, Real::MAX);
    assert_eq!(recorder.gates, vec![CastGate::LateralAabb]);
    assert_eq!(recorder.planar_steps, 0);
    assert_eq!(recorder.refine_steps, 0);
    assert_eq!(recorder.resolved, None);
}

#[test]
fn box_box_planar_miss_inside_aabb() {
    let cube = unit_cube();
    // Rotated by 45 degrees around the cast direction, the target's AABB contains the
    // cast line but the target itself does not.
    let pos12 = Isometry::new(
        Vector::new(5.0, 0.9, 0.9),
        Vector::x() * std::f64::consts::FRAC_PI_4 as Real,
    );
    let dir = UnitVector::new_normalize(Vector::x());
    let mut recorder = Recorder::default();

    let res = query::cast_convex_with_observer(
        &pos12,
        &dir,
        &cube,
        &cube,
        ConvexCastOptions::default(),
        &mut recorder,
    );

    assert!(!res.hit);
    assert_eq!(recorder.gates, vec![CastGate::Planar]);
    assert_eq!(recorder.refine_steps, 0);
}

#[test]
fn box_rotated_box() {
    let cube = unit_cube();
    let pos12 = Isometry::new(
        Vector::new(5.0, 0.0, 0.0),
        Vector::z() * std::f64::consts::FRAC_PI_4 as Real,
    );
    let dir = UnitVector::new_normalize(Vector::x());

    let res = query::cast_convex(&pos12, &dir, &cube, &cube, ConvexCastOptions::default());

    // The front face of the caster hits the edge of the target at x = 5 - sqrt(2) / 2.
    assert!(res.hit);
    assert_relative_eq!(
        res.distance_of_impact,
        4.5 - (0.5 as Real).sqrt(),
        epsilon = 1.0e-4
    );
}

#[test]
fn box_box_oblique_cast() {
    let cube = unit_cube();
    let pos12 = Isometry::translation(4.0, 3.0, 0.0);
    let dir = UnitVector::new_normalize(Vector::new(4.0, 3.0, 0.0));

    let res = query::cast_convex(&pos12, &dir, &cube, &cube, ConvexCastOptions::default());

    // The x faces meet first: 4 * t / 5 = 3.
    assert!(res.hit);
    assert_relative_eq!(res.distance_of_impact, 3.75, epsilon = 1.0e-4);
}

#[test]
fn box_box_initially_overlapping() {
    let cube = unit_cube();
    let pos12 = Isometry::translation(0.25, 0.0, 0.0);
    let dir = UnitVector::new_normalize(Vector::x());

    let res = query::cast_convex(&pos12, &dir, &cube, &cube, ConvexCastOptions::default());

    assert!(res.hit);
    assert!(res.distance_of_impact <= 0.0);
    assert_relative_eq!(res.distance_of_impact, -0.75, epsilon = 1.0e-4);
}
