//! Implementation details of the `cast_convex` function.

pub use self::observer::{CastGate, CastObserver, LogObserver};
pub use self::shape_cast::{
    cast_convex, cast_convex_with_observer, CastStatus, ConvexCastOptions, ConvexCastResult,
};
pub use self::shape_cast_convex_convex::cast_convex_convex;

mod observer;
mod shape_cast;
mod shape_cast_convex_convex;
