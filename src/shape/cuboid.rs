//! Definition of the cuboid shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Rotation, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::{ConvexHexahedron, ShapeError};

/// A rectangular box, oriented by a rotation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    position: Point<Real>,
    extents: Vector<Real>,
    rotation: Rotation<Real>,
    hexahedron: ConvexHexahedron,
    props: ShapeProperties,
}

impl Cuboid {
    /// Creates a new axis-aligned box centered at `position`.
    ///
    /// The `extents` are the full lengths of the box along its local axes. They must all be
    /// non-negative.
    pub fn new(position: Point<Real>, extents: Vector<Real>) -> Self {
        Self::with_params(position, extents, Rotation::identity())
    }

    fn with_params(position: Point<Real>, extents: Vector<Real>, rotation: Rotation<Real>) -> Self {
        let half = extents * 0.5;
        let corners = core::array::from_fn(|i| {
            let local = Vector::new(
                if i & 1 != 0 { half.x } else { -half.x },
                if i & 2 != 0 { half.y } else { -half.y },
                if i & 4 != 0 { half.z } else { -half.z },
            );
            position + rotation * local
        });
        let frame = rotation.to_rotation_matrix().into_inner();
        let hexahedron = ConvexHexahedron::from_corners(corners, frame);

        Self {
            position,
            extents,
            rotation,
            hexahedron,
            props: ShapeProperties::new(
                half.norm(),
                &corners,
                extents.min(),
                extents.x * extents.y * extents.z,
            ),
        }
    }

    /// The full lengths of this box along its local axes.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.extents
    }

    /// The half-lengths of this box along its local axes.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents * 0.5
    }

    /// The orientation of this box.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        self.rotation
    }

    /// The eight corners of this box.
    ///
    /// See [`ConvexHexahedron::corners`] for their ordering.
    #[inline]
    pub fn corners(&self) -> &[Point<Real>; 8] {
        self.hexahedron.corners()
    }

    /// This box as a convex hexahedron.
    #[inline]
    pub fn hexahedron(&self) -> &ConvexHexahedron {
        &self.hexahedron
    }

    /// This box expressed in its own local frame.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), self.half_extents())
    }

    /// Expresses the world-space point `pt` in the local frame of this box.
    #[inline]
    pub fn to_local_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(self.rotation.inverse_transform_vector(&(pt - self.position)))
    }

    /// Expresses the world-space vector `v` in the local frame of this box.
    #[inline]
    pub fn to_local_vector(&self, v: &Vector<Real>) -> Vector<Real> {
        self.rotation.inverse_transform_vector(v)
    }

    /// This box moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::with_params(position, self.extents, self.rotation)
    }

    /// This box with its orientation replaced by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::with_params(self.position, self.extents, rotation)
    }

    /// This box with its extents multiplied by `factor`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::with_params(
            self.position,
            self.extents * factor,
            self.rotation,
        ))
    }
}

impl_shape_properties!(Cuboid);
