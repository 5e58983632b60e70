use crate::shape::{Cuboid, Segment};

/// Test if a segment intersects a cuboid.
///
/// The segment is expressed in the cuboid's local frame where it is clipped against the
/// cuboid's axis-aligned faces.
#[inline]
pub fn intersection_test_cuboid_segment(cuboid1: &Cuboid, segment2: &Segment) -> bool {
    let a = cuboid1.to_local_point(&segment2.a);
    let b = cuboid1.to_local_point(&segment2.b);
    cuboid1.local_aabb().clip_segment_parameters(&a, &b).is_some()
}

/// Test if a segment intersects a cuboid.
#[inline]
pub fn intersection_test_segment_cuboid(segment1: &Segment, cuboid2: &Cuboid) -> bool {
    intersection_test_cuboid_segment(cuboid2, segment1)
}
