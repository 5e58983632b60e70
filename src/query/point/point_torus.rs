use crate::math::{Point, Real};
use crate::query::PointQuery;
use crate::shape::Torus;

impl PointQuery for Torus {
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        let local = self
            .rotation()
            .inverse_transform_vector(&(pt - self.position()));
        let major_sq = self.major_radius() * self.major_radius();
        let minor_sq = self.minor_radius() * self.minor_radius();
        let lhs = local.norm_squared() + major_sq - minor_sq;

        // Squaring is valid since the major radius is not smaller than the minor radius.
        lhs * lhs <= 4.0 * major_sq * (local.x * local.x + local.z * local.z)
    }
}
