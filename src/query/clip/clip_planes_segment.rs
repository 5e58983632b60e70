use crate::math::Real;
use crate::shape::{Plane, Segment};

/// Clips a segment against the intersection of the negative half-spaces of `planes`.
///
/// This is the Cyrus–Beck algorithm. Returns the parameters, in `[0, 1]`, of the portion of
/// `seg` lying on the negative side of every plane, or `None` if there is no such portion.
pub fn clip_planes_segment(planes: &[Plane], seg: &Segment) -> Option<(Real, Real)> {
    let dir = seg.scaled_direction();
    let mut t0: Real = 0.0;
    let mut t1: Real = 1.0;

    for plane in planes {
        let dist = plane.signed_distance(&seg.a);
        let denom = plane.normal.dot(&dir);

        if denom == 0.0 {
            // Parallel to the plane: fully inside or fully outside.
            if dist > 0.0 {
                return None;
            }
        } else {
            let t = -dist / denom;

            if denom < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }

            if t0 > t1 {
                return None;
            }
        }
    }

    Some((t0, t1))
}
