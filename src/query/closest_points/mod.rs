//! Implementation details of the closest points computations.

pub use self::closest_points_segment_segment::{
    closest_points_segment_segment, closest_points_segment_segment_with_parameters,
    distance_squared_segment_segment,
};

mod closest_points_segment_segment;
