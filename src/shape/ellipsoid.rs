use crate::math::{HomogeneousMatrix, Point, Real, Rotation, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::ShapeError;
use na::RealField;

/// A solid ellipsoid, oriented by a rotation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Ellipsoid {
    position: Point<Real>,
    semi_axes: Vector<Real>,
    rotation: Rotation<Real>,
    props: ShapeProperties,
}

impl Ellipsoid {
    /// Creates a new axis-aligned ellipsoid centered at `position`.
    ///
    /// The `semi_axes` are the half-lengths of the ellipsoid along its local axes.
    pub fn new(position: Point<Real>, semi_axes: Vector<Real>) -> Self {
        Self::with_params(position, semi_axes, Rotation::identity())
    }

    fn with_params(
        position: Point<Real>,
        semi_axes: Vector<Real>,
        rotation: Rotation<Real>,
    ) -> Self {
        // The ellipsoid is the image of the unit sphere by `m`. Its extreme point along `+Y`
        // is the image of the unit vector maximizing `(m * u).y`, i.e., along `mᵀ * y`.
        let m = rotation.to_rotation_matrix().into_inner() * na::Matrix3::from_diagonal(&semi_axes);
        let support = m.transpose() * Vector::y();
        let offset = support
            .try_normalize(0.0)
            .map(|dir| m * dir)
            .unwrap_or_else(Vector::zeros);
        let volume = Real::frac_pi_3() * 4.0 * semi_axes.x * semi_axes.y * semi_axes.z;

        Self {
            position,
            semi_axes,
            rotation,
            props: ShapeProperties::new(
                semi_axes.max(),
                &[position + offset, position - offset],
                semi_axes.min() * 2.0,
                volume,
            ),
        }
    }

    /// The half-lengths of this ellipsoid along its local axes.
    #[inline]
    pub fn semi_axes(&self) -> Vector<Real> {
        self.semi_axes
    }

    /// The orientation of this ellipsoid.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        self.rotation
    }

    /// The transformation mapping the unit sphere to this ellipsoid.
    ///
    /// This is the product of a translation, a rotation, and a non-uniform scaling.
    pub fn homogeneous_matrix(&self) -> HomogeneousMatrix<Real> {
        HomogeneousMatrix::new_translation(&self.position.coords)
            * self.rotation.to_homogeneous()
            * HomogeneousMatrix::new_nonuniform_scaling(&self.semi_axes)
    }

    /// The transformation mapping this ellipsoid to the unit sphere.
    ///
    /// Returns `None` if this ellipsoid is flat, i.e., if one of its semi-axes is zero.
    pub fn unit_sphere_transform(&self) -> Option<HomogeneousMatrix<Real>> {
        self.homogeneous_matrix().try_inverse()
    }

    /// This ellipsoid moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::with_params(position, self.semi_axes, self.rotation)
    }

    /// This ellipsoid with its orientation replaced by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::with_params(self.position, self.semi_axes, rotation)
    }

    /// This ellipsoid with its semi-axes multiplied by `factor`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::with_params(
            self.position,
            self.semi_axes * factor,
            self.rotation,
        ))
    }
}

impl_shape_properties!(Ellipsoid);
