use crate::math::Real;
use crate::query::details::ray_toi_with_ball;
use crate::query::Ray;
use crate::shape::Segment;
use num::Zero;

/// Computes the time of impact of a ray on the capsule with the medial axis `segment`.
///
/// The capsule is solid: a ray starting inside of it hits it at time zero.
pub fn ray_toi_with_capsule(segment: &Segment, radius: Real, ray: &Ray) -> Option<Real> {
    if segment.distance_squared_to_point(&ray.origin) <= radius * radius {
        return Some(0.0);
    }

    let caps = [segment.a, segment.b]
        .iter()
        .filter_map(|center| ray_toi_with_ball(center, radius, ray, true).1)
        .fold(None, |best: Option<Real>, t| Some(best.map_or(t, |best| best.min(t))));

    let axis = segment.scaled_direction();
    let dd = axis.norm_squared();

    if dd.is_zero() {
        return caps;
    }

    // Intersection with the infinite cylinder around the axis, expressed with the components
    // orthogonal to the axis only.
    let m = ray.origin - segment.a;
    let md = m.dot(&axis);
    let nd = ray.dir.dot(&axis);
    let a = dd * ray.dir.norm_squared() - nd * nd;
    let b = dd * m.dot(&ray.dir) - nd * md;
    let c = dd * (m.norm_squared() - radius * radius) - md * md;

    if a <= 0.0 {
        // The ray is parallel to the axis: only the caps can be hit first.
        return caps;
    }

    let discr = b * b - a * c;

    if discr < 0.0 {
        return caps;
    }

    let t = (-b - discr.sqrt()) / a;
    let along_axis = (md + t * nd) / dd;

    if t >= 0.0 && (0.0..=1.0).contains(&along_axis) {
        Some(caps.map_or(t, |caps| caps.min(t)))
    } else {
        caps
    }
}

#[cfg(test)]
mod test {
    use super::ray_toi_with_capsule;
    use crate::math::{Point, Vector};
    use crate::query::Ray;
    use crate::shape::Segment;

    fn vertical_segment() -> Segment {
        Segment::new(Point::new(0.0, -2.0, 0.0), Point::new(0.0, 2.0, 0.0))
    }

    #[test]
    fn ray_hits_cylindrical_part() {
        let ray = Ray::new(Point::new(-5.0, 1.0, 0.0), Vector::x());
        assert!(relative_eq!(
            ray_toi_with_capsule(&vertical_segment(), 1.0, &ray).unwrap(),
            4.0
        ));
    }

    #[test]
    fn ray_hits_cap() {
        let ray = Ray::new(Point::new(0.0, 10.0, 0.0), -Vector::y());
        assert!(relative_eq!(
            ray_toi_with_capsule(&vertical_segment(), 1.0, &ray).unwrap(),
            7.0
        ));
    }

    #[test]
    fn ray_misses_capsule() {
        let ray = Ray::new(Point::new(-5.0, 4.0, 0.0), Vector::x());
        assert!(ray_toi_with_capsule(&vertical_segment(), 1.0, &ray).is_none());

        let ray = Ray::new(Point::new(-5.0, 0.0, 0.0), -Vector::x());
        assert!(ray_toi_with_capsule(&vertical_segment(), 1.0, &ray).is_none());
    }

    #[test]
    fn ray_starting_inside() {
        let ray = Ray::new(Point::new(0.5, 0.0, 0.0), Vector::x());
        assert_eq!(ray_toi_with_capsule(&vertical_segment(), 1.0, &ray), Some(0.0));
    }
}
