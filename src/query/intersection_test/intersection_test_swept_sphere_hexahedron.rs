use crate::math::Real;
use crate::shape::{ConvexHexahedron, Segment};

/// Intersection test between a swept sphere and a convex hexahedron.
///
/// The swept sphere is the set of points at a distance smaller than `radius` from `segment`.
/// It is quickly rejected if both ends of its segment lie farther than `radius` outside of
/// the same face plane. Otherwise the distance between the segment and the hexahedron's faces
/// and edges is compared to the radius.
pub fn intersection_test_swept_sphere_hexahedron(
    segment: &Segment,
    radius: Real,
    hexa: &ConvexHexahedron,
) -> bool {
    let outside = hexa.planes().iter().any(|plane| {
        plane.signed_distance(&segment.a) > radius && plane.signed_distance(&segment.b) > radius
    });

    !outside && hexa.distance_squared_to_segment(segment) <= radius * radius
}

/// Intersection test between a segment and a convex hexahedron.
///
/// The segment is clipped against the six planes of the hexahedron.
#[inline]
pub fn intersection_test_segment_hexahedron(segment: &Segment, hexa: &ConvexHexahedron) -> bool {
    hexa.clip_segment(segment).is_some()
}
