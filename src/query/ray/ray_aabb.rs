use crate::bounding_volume::Aabb;
use crate::math::Real;
use crate::query::Ray;

/// Computes the time of impact of a ray on a solid AABB.
///
/// A ray starting inside of the AABB hits it at time zero.
#[inline]
pub fn ray_toi_with_aabb(aabb: &Aabb, ray: &Ray) -> Option<Real> {
    aabb.clip_ray_parameters(ray).map(|(t0, _)| t0)
}
