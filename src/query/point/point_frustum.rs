use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Frustum;

impl PointQuery for Frustum {
    #[inline]
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        self.bounding_sphere().contains_point(pt) && self.hexahedron().contains_point(pt)
    }
}
