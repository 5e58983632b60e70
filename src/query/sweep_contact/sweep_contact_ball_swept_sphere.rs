use crate::math::{Point, Real, Vector};
use crate::query::details::ray_toi_with_capsule;
use crate::query::Ray;
use crate::shape::Segment;

/// Time of impact of a moving ball on a fixed swept sphere.
///
/// The ball of radius `radius1` moves from `start1` by `motion1`. The swept sphere is the set
/// of points at a distance smaller than `radius2` from `segment2`: a capsule, or the segment
/// itself if `radius2` is zero. The ball's center hits the capsule of radius
/// `radius1 + radius2` around `segment2`, either its cylindrical part or one of the spheres
/// at its ends.
#[inline]
pub fn sweep_contact_ball_swept_sphere(
    start1: &Point<Real>,
    motion1: &Vector<Real>,
    radius1: Real,
    segment2: &Segment,
    radius2: Real,
) -> Option<Real> {
    ray_toi_with_capsule(segment2, radius1 + radius2, &Ray::new(*start1, *motion1))
}
