use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::query::Ray;
use num::Zero;

impl Aabb {
    /// Computes the parameters of the two intersection points between a line and this AABB.
    ///
    /// The parameters are such that the point are given by `orig + dir * parameter`.
    /// Returns `None` if there is no intersection.
    #[inline]
    pub fn clip_line_parameters(
        &self,
        orig: &Point<Real>,
        dir: &Vector<Real>,
    ) -> Option<(Real, Real)> {
        clip_aabb_line(self, orig, dir)
    }

    /// Computes the parameters of the portion of the segment `[a, b]` inside of this AABB.
    ///
    /// The parameters lie in `[0, 1]` and are such that the points are given by
    /// `a + (b - a) * parameter`.
    #[inline]
    pub fn clip_segment_parameters(
        &self,
        a: &Point<Real>,
        b: &Point<Real>,
    ) -> Option<(Real, Real)> {
        clip_aabb_line(self, a, &(b - a)).and_then(|(t0, t1)| {
            let (t0, t1) = (t0.max(0.0), t1.min(1.0));
            (t0 <= t1).then_some((t0, t1))
        })
    }

    /// Computes the parameters of the two intersection points between a ray and this AABB.
    ///
    /// The parameters are such that the point are given by `ray.orig + ray.dir * parameter`.
    /// Returns `None` if there is no intersection.
    #[inline]
    pub fn clip_ray_parameters(&self, ray: &Ray) -> Option<(Real, Real)> {
        self.clip_line_parameters(&ray.origin, &ray.dir)
            .and_then(|(t0, t1)| if t1 < 0.0 { None } else { Some((t0.max(0.0), t1)) })
    }
}

/// Computes the parameters of the points where a line enters and leaves an AABB.
///
/// This uses the slab test: the line is clipped against each pair of planes bounding the
/// AABB along one axis.
pub fn clip_aabb_line(
    aabb: &Aabb,
    origin: &Point<Real>,
    dir: &Vector<Real>,
) -> Option<(Real, Real)> {
    let mut tmin = -Real::MAX;
    let mut tmax = Real::MAX;

    for i in 0usize..DIM {
        if dir[i].is_zero() {
            if origin[i] < aabb.mins[i] || origin[i] > aabb.maxs[i] {
                return None;
            }
        } else {
            let denom = 1.0 / dir[i];
            let mut near = (aabb.mins[i] - origin[i]) * denom;
            let mut far = (aabb.maxs[i] - origin[i]) * denom;

            if near > far {
                core::mem::swap(&mut near, &mut far);
            }

            tmin = tmin.max(near);
            tmax = tmax.min(far);

            if tmin > tmax {
                return None;
            }
        }
    }

    Some((tmin, tmax))
}
