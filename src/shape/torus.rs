use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::{Cylinder, ShapeError};
use crate::utils;
use na::RealField;

/// A solid torus, i.e., a ring with a circular cross-section.
///
/// The torus' symmetry axis is its local `+Y` axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Torus {
    position: Point<Real>,
    major_radius: Real,
    minor_radius: Real,
    rotation: Rotation<Real>,
    props: ShapeProperties,
}

impl Torus {
    /// Creates a new torus centered at `position`, with its symmetry axis along `+Y`.
    ///
    /// The `major_radius` is the distance from the center to the center of the tube, and the
    /// `minor_radius` is the radius of the tube. Fails if `major_radius < minor_radius`.
    pub fn new(
        position: Point<Real>,
        major_radius: Real,
        minor_radius: Real,
    ) -> Result<Self, ShapeError> {
        if major_radius < minor_radius {
            return Err(ShapeError::InvalidTorusRadii {
                major: major_radius,
                minor: minor_radius,
            });
        }

        Ok(Self::with_params(
            position,
            major_radius,
            minor_radius,
            Rotation::identity(),
        ))
    }

    fn with_params(
        position: Point<Real>,
        major_radius: Real,
        minor_radius: Real,
        rotation: Rotation<Real>,
    ) -> Self {
        let up = rotation * Vector::y_axis();
        // The ring's point reaching the highest, offset by the tube's radius.
        let ring_dir = utils::orthogonal_up(&up).unwrap_or_else(|| rotation * Vector::x_axis());
        let offset = ring_dir.into_inner() * major_radius + Vector::y() * minor_radius;
        let volume = Real::two_pi() * Real::pi() * major_radius * minor_radius * minor_radius;

        Self {
            position,
            major_radius,
            minor_radius,
            rotation,
            props: ShapeProperties::new(
                major_radius + minor_radius,
                &[position + offset, position - offset],
                minor_radius * 2.0,
                volume,
            ),
        }
    }

    /// The distance from the center of this torus to the center of its tube.
    #[inline]
    pub fn major_radius(&self) -> Real {
        self.major_radius
    }

    /// The radius of the tube of this torus.
    #[inline]
    pub fn minor_radius(&self) -> Real {
        self.minor_radius
    }

    /// The orientation of this torus.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        self.rotation
    }

    /// The symmetry axis of this torus.
    #[inline]
    pub fn up(&self) -> UnitVector<Real> {
        self.rotation * Vector::y_axis()
    }

    /// The smallest cylinder enclosing this torus.
    ///
    /// Its axis spans the thickness of the tube, and its radius reaches the outer equator.
    pub fn bounding_cylinder(&self) -> Cylinder {
        Cylinder::new(
            self.position,
            self.up().into_inner() * (self.minor_radius * 2.0),
            self.major_radius + self.minor_radius,
        )
    }

    /// This torus moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::with_params(position, self.major_radius, self.minor_radius, self.rotation)
    }

    /// This torus with its orientation replaced by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::with_params(self.position, self.major_radius, self.minor_radius, rotation)
    }

    /// This torus with both radii multiplied by `factor`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::with_params(
            self.position,
            self.major_radius * factor,
            self.minor_radius * factor,
            self.rotation,
        ))
    }
}

impl_shape_properties!(Torus);
