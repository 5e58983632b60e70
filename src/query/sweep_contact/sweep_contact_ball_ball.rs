use crate::math::{Point, Real, Vector};
use crate::query::details::ray_toi_with_ball;
use crate::query::Ray;

/// Time of impact of a moving ball on a fixed ball.
///
/// The first ball of radius `radius1` moves from `start1` by `motion1`. The result is the
/// fraction of `motion1` travelled before both balls touch, zero if they overlap initially.
/// It may be greater than one.
#[inline]
pub fn sweep_contact_ball_ball(
    start1: &Point<Real>,
    motion1: &Vector<Real>,
    radius1: Real,
    center2: &Point<Real>,
    radius2: Real,
) -> Option<Real> {
    let ray = Ray::new(*start1, *motion1);
    ray_toi_with_ball(center2, radius1 + radius2, &ray, true).1
}

/// Time of impact of two balls moving during the same time interval.
///
/// The first ball moves from `start1` by `motion1` while the second one moves from `start2` by
/// `motion2`. The result is the fraction of the time interval elapsed before both balls touch,
/// zero if they overlap initially. It may be greater than one.
#[inline]
pub fn sweep_contact_moving_ball_moving_ball(
    start1: &Point<Real>,
    motion1: &Vector<Real>,
    radius1: Real,
    start2: &Point<Real>,
    motion2: &Vector<Real>,
    radius2: Real,
) -> Option<Real> {
    // Relative motion of the first ball as seen from the second one.
    let ray = Ray::new(Point::from(start1 - start2), motion1 - motion2);
    ray_toi_with_ball(&Point::origin(), radius1 + radius2, &ray, true).1
}
