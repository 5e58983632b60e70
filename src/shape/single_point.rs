use crate::math::{Point, Real, Rotation};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::ShapeError;

/// A shape reduced to a single point.
///
/// It has no extent: its volume, containing radius and smallest dimension are all zero.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct SinglePoint {
    position: Point<Real>,
    props: ShapeProperties,
}

impl SinglePoint {
    /// Creates a new point shape located at `position`.
    pub fn new(position: Point<Real>) -> Self {
        Self {
            position,
            props: ShapeProperties::new(0.0, &[position], 0.0, 0.0),
        }
    }

    /// The orientation of this point, always the identity.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::identity()
    }

    /// This point moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::new(position)
    }

    /// This point, unchanged: a point has no orientation.
    pub fn with_rotation(&self, _rotation: Rotation<Real>) -> Self {
        *self
    }

    /// This point, unchanged, if `factor` is a valid scale factor.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let _ = check_scale_factor(factor)?;
        Ok(*self)
    }
}

impl_shape_properties!(SinglePoint);
