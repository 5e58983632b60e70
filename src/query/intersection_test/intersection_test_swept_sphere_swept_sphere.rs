use crate::math::Real;
use crate::query::details::distance_squared_segment_segment;
use crate::shape::Segment;

/// Intersection test between two swept spheres.
///
/// A swept sphere is the set of points at a distance smaller than `radius` from a segment: it
/// is a capsule, a sphere if its segment has zero length, or a segment if its radius is zero.
/// Both shapes intersect if their segments are closer than the sum of their radii.
#[inline]
pub fn intersection_test_swept_sphere_swept_sphere(
    segment1: &Segment,
    radius1: Real,
    segment2: &Segment,
    radius2: Real,
) -> bool {
    let sum_radius = radius1 + radius2;
    distance_squared_segment_segment(segment1, segment2) <= sum_radius * sum_radius
}

/// Intersection test between two segments.
///
/// Segments have no thickness: they intersect if they are closer than the largest of their
/// [tolerances](Segment::tolerance).
#[inline]
pub fn intersection_test_segment_segment(segment1: &Segment, segment2: &Segment) -> bool {
    let tolerance = segment1.tolerance().max(segment2.tolerance());
    distance_squared_segment_segment(segment1, segment2) <= tolerance * tolerance
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::math::{Point, Vector};

    #[test]
    fn spheres_as_degenerate_swept_spheres() {
        let center1 = Point::origin();
        let center2 = Point::new(1.5, 0.0, 0.0);
        let center3 = Point::new(2.5, 0.0, 0.0);
        let s1 = Segment::new(center1, center1);

        assert!(intersection_test_swept_sphere_swept_sphere(
            &s1,
            1.0,
            &Segment::new(center2, center2),
            1.0
        ));
        assert!(!intersection_test_swept_sphere_swept_sphere(
            &s1,
            1.0,
            &Segment::new(center3, center3),
            1.0
        ));
    }

    #[test]
    fn parallel_capsules() {
        let s1 = Segment::new(Point::new(0.0, -5.0, 0.0), Point::new(0.0, 5.0, 0.0));
        let s2 = Segment::new(Point::new(3.0, 0.0, 0.0), Point::new(3.0, 10.0, 0.0));
        assert!(intersection_test_swept_sphere_swept_sphere(&s1, 1.0, &s2, 2.0));
        assert!(!intersection_test_swept_sphere_swept_sphere(&s1, 1.0, &s2, 1.9));
    }

    #[test]
    fn crossing_and_skew_segments() {
        let s1 = Segment::new(Point::new(-1.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0));
        let s2 = Segment::new(Point::new(0.0, -1.0, 0.0), Point::new(0.0, 1.0, 0.0));
        let s3 = Segment::new(Point::new(0.0, -1.0, 0.1), Point::new(0.0, 1.0, 0.1));
        assert!(intersection_test_segment_segment(&s1, &s2));
        assert!(!intersection_test_segment_segment(&s1, &s3));
    }

    #[test]
    fn segments_crossing_away_from_the_origin() {
        let crossing = Point::new(30.3, 20.7, 10.1);
        let dir1 = Vector::new(1.3, 0.7, -0.4);
        let dir2 = Vector::new(-0.2, 1.1, 0.9);
        let s1 = Segment::new(crossing - dir1 * 5.0, crossing + dir1 * 3.0);
        let s2 = Segment::new(crossing - dir2 * 2.0, crossing + dir2 * 7.0);
        assert!(intersection_test_segment_segment(&s1, &s2));
        assert!(intersection_test_segment_segment(&s2, &s1));

        let offset = dir1.cross(&dir2).normalize() * 0.01;
        let s3 = Segment::new(s2.a + offset, s2.b + offset);
        assert!(!intersection_test_segment_segment(&s1, &s3));
    }
}
