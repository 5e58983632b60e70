use crate::math::{Real, Vector, DEFAULT_EPSILON};
use crate::shape::ConvexHexahedron;

/// Computes the separation distance between two hexahedra along a given axis.
///
/// Both hexahedra are projected on `axis`. The result is positive if the projections are
/// disjoint (the hexahedra are then separated by at least this distance divided by the norm
/// of `axis`), zero if they touch, and negative if they overlap.
pub fn hexahedron_hexahedron_compute_separation_wrt_line(
    hexa1: &ConvexHexahedron,
    hexa2: &ConvexHexahedron,
    axis: &Vector<Real>,
) -> Real {
    let (min1, max1) = hexa1.project_on(axis);
    let (min2, max2) = hexa2.project_on(axis);
    (min2 - max1).max(min1 - max2)
}

/// Finds the face normal of `hexa1` along which both hexahedra are the most separated.
///
/// Returns the separation along that normal, positive if the hexahedra do not intersect, and
/// the normal itself.
pub fn hexahedron_hexahedron_find_separating_normal_oneway(
    hexa1: &ConvexHexahedron,
    hexa2: &ConvexHexahedron,
) -> (Real, Vector<Real>) {
    hexa1
        .planes()
        .iter()
        .map(|plane| {
            let sep =
                hexahedron_hexahedron_compute_separation_wrt_line(hexa1, hexa2, &plane.normal);
            (sep, plane.normal)
        })
        .fold((-Real::MAX, Vector::zeros()), |best, candidate| {
            if candidate.0 > best.0 {
                candidate
            } else {
                best
            }
        })
}

/// Finds the best separating axis among the cross products of the edges of both hexahedra.
///
/// Returns the separation along that axis, positive if the hexahedra do not intersect, and
/// the axis itself. Parallel edges are ignored.
pub fn hexahedron_hexahedron_find_separating_edge(
    hexa1: &ConvexHexahedron,
    hexa2: &ConvexHexahedron,
) -> (Real, Vector<Real>) {
    let mut best_sep = -Real::MAX;
    let mut best_axis = Vector::zeros();

    for edge1 in hexa1.edges() {
        let dir1 = edge1.scaled_direction();

        for edge2 in hexa2.edges() {
            if let Some(axis) = dir1
                .cross(&edge2.scaled_direction())
                .try_normalize(DEFAULT_EPSILON)
            {
                let sep = hexahedron_hexahedron_compute_separation_wrt_line(hexa1, hexa2, &axis);

                if sep > best_sep {
                    best_sep = sep;
                    best_axis = axis;
                }
            }
        }
    }

    (best_sep, best_axis)
}
