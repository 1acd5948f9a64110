//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast};
pub use self::ray_triangle::{
    local_ray_intersection_with_quad, local_ray_intersection_with_triangle,
};

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_triangle;
