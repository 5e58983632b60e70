use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Cone;

impl PointQuery for Cone {
    #[inline]
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        let dir = self.direction();
        let length = self.length();
        let dpt = pt - self.apex();
        let height = dpt.dot(&dir);

        if height < 0.0 || height > length {
            return false;
        }

        // radial <= height * tan(half_angle), without the tangent. The second test only
        // matters for flat cones.
        let radial = (dpt - dir.into_inner() * height).norm();
        radial * length <= height * self.radius() && radial <= self.radius()
    }
}
