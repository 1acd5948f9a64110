//! Various unsorted geometrical and logical operators.

pub use self::isometry_ops::IsometryOps;
pub use self::point_cloud_support_point::point_cloud_support_point_id;
pub use self::tiny_vector::{is_tiny, rescale_if_tiny};
pub(crate) use self::wops::WBasis;

mod isometry_ops;
mod point_cloud_support_point;
mod tiny_vector;
mod wops;
