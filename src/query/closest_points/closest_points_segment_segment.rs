use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::Segment;

use na;

/// Closest points between segments.
///
/// Returns the point of `seg1` and the point of `seg2` closest to each other.
#[inline]
pub fn closest_points_segment_segment(
    seg1: &Segment,
    seg2: &Segment,
) -> (Point<Real>, Point<Real>) {
    let (s, t) = closest_points_segment_segment_with_parameters(seg1, seg2);
    (seg1.point_at(s), seg2.point_at(t))
}

/// The squared distance between two segments.
#[inline]
pub fn distance_squared_segment_segment(seg1: &Segment, seg2: &Segment) -> Real {
    let (p1, p2) = closest_points_segment_segment(seg1, seg2);
    na::distance_squared(&p1, &p2)
}

/// Closest points between two segments, given as parameters along each segment.
///
/// The parameters `(s, t)` lie in `[0, 1]` and identify the points `seg1.point_at(s)` and
/// `seg2.point_at(t)`. Degenerate segments are handled as points.
#[inline]
pub fn closest_points_segment_segment_with_parameters(
    seg1: &Segment,
    seg2: &Segment,
) -> (Real, Real) {
    // Inspired by RealField-time collision detection by Christer Ericson.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let a = d1.norm_squared();
    let e = d2.norm_squared();
    let f = d2.dot(&r);

    let mut s;
    let mut t;

    let _eps = DEFAULT_EPSILON;
    if a <= _eps && e <= _eps {
        s = 0.0;
        t = 0.0;
    } else if a <= _eps {
        s = 0.0;
        t = na::clamp(f / e, 0.0, 1.0);
    } else {
        let c = d1.dot(&r);
        if e <= _eps {
            t = 0.0;
            s = na::clamp(-c / a, 0.0, 1.0);
        } else {
            let b = d1.dot(&d2);
            let ae = a * e;
            let bb = b * b;
            let denom = ae - bb;

            // Use absolute and ulps error to test collinearity.
            if denom > _eps && !ulps_eq!(ae, bb) {
                s = na::clamp((b * f - c * e) / denom, 0.0, 1.0);
            } else {
                s = 0.0;
            }

            t = (b * s + f) / e;

            if t < 0.0 {
                t = 0.0;
                s = na::clamp(-c / a, 0.0, 1.0);
            } else if t > 1.0 {
                t = 1.0;
                s = na::clamp((b - c) / a, 0.0, 1.0);
            }
        }
    }

    (s, t)
}
