use crate::query::sat;
use crate::shape::ConvexHexahedron;

/// Intersection test between two convex hexahedra, e.g., cuboids and frusta.
///
/// If a corner of one hexahedron lies inside of the other, they intersect. Otherwise the
/// separating axis theorem is applied with the face normals of both hexahedra and the cross
/// products of their edges as candidate axes.
pub fn intersection_test_hexahedron_hexahedron(
    hexa1: &ConvexHexahedron,
    hexa2: &ConvexHexahedron,
) -> bool {
    if hexa1.corners().iter().any(|pt| hexa2.contains_point(pt))
        || hexa2.corners().iter().any(|pt| hexa1.contains_point(pt))
    {
        return true;
    }

    let sep1 = sat::hexahedron_hexahedron_find_separating_normal_oneway(hexa1, hexa2).0;

    if sep1 > 0.0 {
        return false;
    }

    let sep2 = sat::hexahedron_hexahedron_find_separating_normal_oneway(hexa2, hexa1).0;

    if sep2 > 0.0 {
        return false;
    }

    let sep3 = sat::hexahedron_hexahedron_find_separating_edge(hexa1, hexa2).0;
    sep3 <= 0.0
}
