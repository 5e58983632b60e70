use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::{Capsule, Line};

impl PointQuery for Capsule {
    #[inline]
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        self.segment().distance_squared_to_point(pt) <= self.radius() * self.radius()
    }
}

impl PointQuery for Line {
    #[inline]
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        let segment = self.segment();
        let tolerance = segment.tolerance();
        segment.distance_squared_to_point(pt) <= tolerance * tolerance
    }
}
