use crate::math::Point;
use crate::shape::{ConvexHexahedron, Ellipsoid, Segment};

/// Intersection test between an ellipsoid and a segment.
///
/// The segment is mapped to the space where the ellipsoid is the unit sphere centered at the
/// origin. Segments are transformed into segments by this affine map.
///
/// A flat ellipsoid cannot be mapped to the unit sphere. The test then conservatively reports
/// an intersection.
pub fn intersection_test_ellipsoid_segment(ellipsoid: &Ellipsoid, segment: &Segment) -> bool {
    match ellipsoid.unit_sphere_transform() {
        Some(inv) => {
            let local = Segment::new(
                inv.transform_point(&segment.a),
                inv.transform_point(&segment.b),
            );
            local.distance_squared_to_point(&Point::origin()) <= 1.0
        }
        None => {
            log::debug!("Flat ellipsoid: the intersection test is approximated by its bounding sphere.");
            true
        }
    }
}

/// Intersection test between an ellipsoid and a convex hexahedron, e.g. a cuboid or a frustum.
///
/// The hexahedron is mapped to the space where the ellipsoid is the unit sphere centered at
/// the origin. Its image by this affine map is still a convex hexahedron.
///
/// A flat ellipsoid cannot be mapped to the unit sphere. The test then conservatively reports
/// an intersection.
pub fn intersection_test_ellipsoid_hexahedron(
    ellipsoid: &Ellipsoid,
    hexa: &ConvexHexahedron,
) -> bool {
    match ellipsoid.unit_sphere_transform() {
        Some(inv) => hexa.transformed(&inv).intersects_ball(&Point::origin(), 1.0),
        None => {
            log::debug!("Flat ellipsoid: the intersection test is approximated by its bounding sphere.");
            true
        }
    }
}
