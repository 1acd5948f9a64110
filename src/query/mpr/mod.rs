//! Minkowski Portal Refinement (MPR) for convex shape casting.
//!
//! The cast is reduced to a line/CSO intersection: the caster hits the target at the
//! distance `t` iff `-t * dir` belongs to the Configuration-Space Obstacle (CSO) of both
//! shapes. The intersection is first confirmed in the plane orthogonal to `dir`, then the
//! entry point of the line is located by refining a triangular portal of the CSO crossed
//! by the line.
//!
//! Support points carry stable vertex ids. Seeing the same id twice means the refinement
//! cannot make progress anymore, which is how convergence is detected without relying on
//! floating-point tolerances for shapes without radial padding.

pub use self::line_entry::line_entry;
pub use self::planar::{planar_reduction, PlanarPortal, PlanarResult};
pub use self::portal::{search_portal, side, Portal, PortalSearch};
pub use self::refine::{portal_distance, refine_portal};
pub use self::shape_pair::{pack_pair_id, unpack_pair_id, ShapePair, PAIR_ID_MASK};

mod line_entry;
mod planar;
mod portal;
mod refine;
mod shape_pair;
