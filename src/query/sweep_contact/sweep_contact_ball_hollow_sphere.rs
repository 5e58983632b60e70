use crate::math::{Point, Real, Vector};
use crate::query::details::ray_toi_with_ball;
use crate::query::Ray;
use crate::shape::HollowSphere;

/// Time of impact of a moving ball on a fixed hollow sphere.
///
/// The ball of radius `radius1` moves from `start1` by `motion1`. A ball starting fully
/// inside of the cavity hits the shell when it reaches the cavity's boundary from the
/// inside. Otherwise it hits the outer sphere.
///
/// The result is the fraction of `motion1` travelled before the first contact, zero if the
/// ball overlaps the shell initially.
pub fn sweep_contact_ball_hollow_sphere(
    start1: &Point<Real>,
    motion1: &Vector<Real>,
    radius1: Real,
    hollow_sphere2: &HollowSphere,
) -> Option<Real> {
    let center2 = hollow_sphere2.position();
    let dist = na::distance(start1, &center2);
    let ray = Ray::new(*start1, *motion1);

    if dist + radius1 < hollow_sphere2.inner_radius() {
        // Leaving the ball of the centers positions free of contact with the shell.
        let free_radius = hollow_sphere2.inner_radius() - radius1;
        ray_toi_with_ball(&center2, free_radius, &ray, false).1
    } else if dist <= hollow_sphere2.outer_radius() + radius1 {
        Some(0.0)
    } else {
        ray_toi_with_ball(&center2, hollow_sphere2.outer_radius() + radius1, &ray, true).1
    }
}
