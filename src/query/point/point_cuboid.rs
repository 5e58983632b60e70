use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Cuboid;

impl PointQuery for Cuboid {
    #[inline]
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        self.local_aabb()
            .contains_local_point(&self.to_local_point(pt))
    }
}
