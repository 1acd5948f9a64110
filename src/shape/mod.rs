//! Shapes supported by portalcast3d.

pub use self::ball::Ball;
pub use self::capsule::Capsule;
pub use self::convex_hull::{ConvexHull, MAX_HULL_VERTICES};
pub use self::convex_shape::ConvexShape;
pub use self::cuboid::Cuboid;
pub use self::shape_error::ShapeError;
#[doc(inline)]
pub use self::support_map::{SupportMap, SupportPoint};
pub use self::triangle::Triangle;

mod ball;
mod capsule;
mod convex_hull;
mod convex_shape;
mod cuboid;
mod shape_error;
#[doc(hidden)]
pub mod support_map;
mod triangle;
