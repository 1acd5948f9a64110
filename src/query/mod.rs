//! Non-persistent geometric queries.
//!
//! The main entry point of this module is [`cast_convex()`], which determines when a
//! convex shape translating along a straight line first touches another convex shape.
//! An observer can be attached to the cast with [`cast_convex_with_observer()`].
//!
//! The primitive queries it relies on are exposed as well:
//!
//! * [`RayCast`] for ray-casting on AABBs,
//! * [`ray::local_ray_intersection_with_triangle()`] and
//!   [`ray::local_ray_intersection_with_quad()`] for planar polygons,
//! * [`closest_points::closest_points_segment_segment()`] for segments.

pub use self::ray::{Ray, RayCast};
pub use self::shape_cast::{
    cast_convex, cast_convex_with_observer, CastGate, CastObserver, CastStatus,
    ConvexCastOptions, ConvexCastResult, LogObserver,
};

pub mod closest_points;
pub mod mpr;
pub mod ray;
pub mod shape_cast;
