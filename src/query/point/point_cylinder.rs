use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Cylinder;

impl PointQuery for Cylinder {
    #[inline]
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        let dir = self.direction();
        let dpt = pt - self.start();
        let along_axis = dpt.dot(&dir);

        if along_axis < 0.0 || along_axis > self.length() {
            return false;
        }

        let radial = dpt - dir.into_inner() * along_axis;
        radial.norm_squared() <= self.radius() * self.radius()
    }
}
