use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::ShapeError;
use na::RealField;

/// A solid sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere {
    position: Point<Real>,
    radius: Real,
    rotation: Rotation<Real>,
    props: ShapeProperties,
}

impl Sphere {
    /// Creates a new sphere centered at `position`.
    ///
    /// The `radius` must be non-negative.
    pub fn new(position: Point<Real>, radius: Real) -> Self {
        Self::with_params(position, radius, Rotation::identity())
    }

    fn with_params(position: Point<Real>, radius: Real, rotation: Rotation<Real>) -> Self {
        let offset = Vector::y() * radius;
        let volume = Real::frac_pi_3() * 4.0 * radius.powi(3);

        Self {
            position,
            radius,
            rotation,
            props: ShapeProperties::new(
                radius,
                &[position + offset, position - offset],
                radius * 2.0,
                volume,
            ),
        }
    }

    /// The radius of this sphere.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The orientation of this sphere.
    ///
    /// It has no effect on the sphere's geometry.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        self.rotation
    }

    /// This sphere moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::with_params(position, self.radius, self.rotation)
    }

    /// This sphere with its orientation replaced by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::with_params(self.position, self.radius, rotation)
    }

    /// This sphere with its radius multiplied by `factor`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::with_params(
            self.position,
            self.radius * factor,
            self.rotation,
        ))
    }
}

impl_shape_properties!(Sphere);
