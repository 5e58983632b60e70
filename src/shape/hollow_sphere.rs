use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::{ShapeError, Sphere};
use na::RealField;

/// A sphere with a concentric spherical cavity.
///
/// The solid part is the shell between the inner and the outer radius, both included.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct HollowSphere {
    position: Point<Real>,
    outer_radius: Real,
    inner_radius: Real,
    rotation: Rotation<Real>,
    props: ShapeProperties,
}

impl HollowSphere {
    /// Creates a new hollow sphere centered at `position`.
    ///
    /// Fails if `inner_radius` is greater than `outer_radius`.
    pub fn new(
        position: Point<Real>,
        outer_radius: Real,
        inner_radius: Real,
    ) -> Result<Self, ShapeError> {
        if inner_radius > outer_radius {
            return Err(ShapeError::InvalidHollowSphereRadii {
                outer: outer_radius,
                inner: inner_radius,
            });
        }

        Ok(Self::with_params(
            position,
            outer_radius,
            inner_radius,
            Rotation::identity(),
        ))
    }

    fn with_params(
        position: Point<Real>,
        outer_radius: Real,
        inner_radius: Real,
        rotation: Rotation<Real>,
    ) -> Self {
        let offset = Vector::y() * outer_radius;
        let volume =
            Real::frac_pi_3() * 4.0 * (outer_radius.powi(3) - inner_radius.powi(3));

        Self {
            position,
            outer_radius,
            inner_radius,
            rotation,
            props: ShapeProperties::new(
                outer_radius,
                &[position + offset, position - offset],
                outer_radius * 2.0,
                volume,
            ),
        }
    }

    /// The radius of the outer boundary of this hollow sphere.
    #[inline]
    pub fn outer_radius(&self) -> Real {
        self.outer_radius
    }

    /// The radius of the cavity of this hollow sphere.
    #[inline]
    pub fn inner_radius(&self) -> Real {
        self.inner_radius
    }

    /// The orientation of this hollow sphere.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        self.rotation
    }

    /// The solid sphere delimited by the outer boundary of this hollow sphere.
    pub fn outer_sphere(&self) -> Sphere {
        Sphere::new(self.position, self.outer_radius)
    }

    /// The cavity of this hollow sphere.
    pub fn cavity(&self) -> BoundingSphere {
        BoundingSphere::new(self.position, self.inner_radius)
    }

    /// This hollow sphere moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::with_params(position, self.outer_radius, self.inner_radius, self.rotation)
    }

    /// This hollow sphere with its orientation replaced by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::with_params(self.position, self.outer_radius, self.inner_radius, rotation)
    }

    /// This hollow sphere with both radii multiplied by `factor`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::with_params(
            self.position,
            self.outer_radius * factor,
            self.inner_radius * factor,
            self.rotation,
        ))
    }
}

impl_shape_properties!(HollowSphere);
