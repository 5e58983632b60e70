use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::{HollowSphere, SinglePoint, Sphere};
use na;

impl PointQuery for SinglePoint {
    #[inline]
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        self.position() == *pt
    }
}

impl PointQuery for Sphere {
    #[inline]
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.position(), pt) <= self.radius() * self.radius()
    }
}

impl PointQuery for HollowSphere {
    #[inline]
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        let dist_sq = na::distance_squared(&self.position(), pt);
        dist_sq <= self.outer_radius() * self.outer_radius()
            && dist_sq >= self.inner_radius() * self.inner_radius()
    }
}

#[cfg(test)]
mod test {
    use crate::math::Point;
    use crate::query::PointQuery;
    use crate::shape::{HollowSphere, SinglePoint, Sphere};

    #[test]
    fn sphere_boundary_is_inside() {
        let sphere = Sphere::new(Point::origin(), 2.0);
        assert!(sphere.is_point_within(&Point::new(0.0, 2.0, 0.0)));
        assert!(!sphere.is_point_within(&Point::new(0.0, 2.1, 0.0)));
    }

    #[test]
    fn hollow_sphere_cavity_is_outside() {
        let shell = HollowSphere::new(Point::origin(), 2.0, 1.0).unwrap();
        assert!(!shell.is_point_within(&Point::origin()));
        assert!(shell.is_point_within(&Point::new(1.0, 0.0, 0.0)));
        assert!(shell.is_point_within(&Point::new(0.0, 0.0, 1.5)));
        assert!(!shell.is_point_within(&Point::new(0.0, 0.0, 2.5)));
    }

    #[test]
    fn single_point_equality() {
        let point = SinglePoint::new(Point::new(1.0, 2.0, 3.0));
        assert!(point.is_point_within(&Point::new(1.0, 2.0, 3.0)));
        assert!(!point.is_point_within(&Point::new(1.0, 2.0, 3.001)));
    }
}
