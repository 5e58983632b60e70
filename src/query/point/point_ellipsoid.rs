use crate::math::{Point, Real, DEFAULT_EPSILON, DIM};
use crate::query::PointQuery;
use crate::shape::Ellipsoid;
use num::Zero;

impl PointQuery for Ellipsoid {
    fn is_point_within(&self, pt: &Point<Real>) -> bool {
        let local = self
            .rotation()
            .inverse_transform_vector(&(pt - self.position()));
        let semi_axes = self.semi_axes();
        let mut sum = 0.0;

        for i in 0..DIM {
            if semi_axes[i].is_zero() {
                // Flat ellipsoid: no thickness along this axis.
                if local[i].abs() > DEFAULT_EPSILON {
                    return false;
                }
            } else {
                sum += (local[i] / semi_axes[i]).powi(2);
            }
        }

        sum <= 1.0
    }
}
