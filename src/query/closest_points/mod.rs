//! Implementation details of the closest points computations.

pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_parameters,
};

mod closest_points_segment_segment;
