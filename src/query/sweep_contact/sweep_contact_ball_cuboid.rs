use crate::math::{Point, Real, Vector, DIM};
use crate::query::details::{ray_toi_with_aabb, ray_toi_with_capsule};
use crate::query::Ray;
use crate::shape::Cuboid;

/// Time of impact of a moving ball on a fixed cuboid.
///
/// The ball of radius `radius1` moves from `start1` by `motion1`. Its center hits the cuboid
/// dilated by `radius1`, which is the union of:
///
/// * the three boxes obtained by extending the cuboid by `radius1` along one of its local
///   axes, covering the regions facing its faces.
/// * the twelve capsules of radius `radius1` around its edges, covering the regions facing
///   its edges and corners.
///
/// The first time of impact is the smallest among these parts.
pub fn sweep_contact_ball_cuboid(
    start1: &Point<Real>,
    motion1: &Vector<Real>,
    radius1: Real,
    cuboid2: &Cuboid,
) -> Option<Real> {
    let aabb = cuboid2.local_aabb();
    let local_start = cuboid2.to_local_point(start1);

    if na::distance_squared(&aabb.clamp_point(&local_start), &local_start) <= radius1 * radius1 {
        return Some(0.0);
    }

    let local_ray = Ray::new(local_start, cuboid2.to_local_vector(motion1));
    let ray = Ray::new(*start1, *motion1);

    let faces = (0..DIM).filter_map(|i| ray_toi_with_aabb(&aabb.loosened_along(i, radius1), &local_ray));
    let edges = cuboid2
        .hexahedron()
        .edges()
        .into_iter()
        .filter_map(|edge| ray_toi_with_capsule(&edge, radius1, &ray));

    faces.chain(edges).fold(None, |best: Option<Real>, toi| {
        Some(best.map_or(toi, |best| best.min(toi)))
    })
}
