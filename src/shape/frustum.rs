use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::{ConvexHexahedron, Plane, ShapeError};
use crate::utils;

/// A truncated rectangular pyramid, like the viewing volume of a perspective camera.
///
/// The frustum's position is its apex, the eye of the camera. It looks along its axis, whose
/// length is the distance from the apex to the far plane. The near plane lies at the near
/// distance from the apex. Its "up" direction is the direction orthogonal to the axis that
/// points the most toward `+Y`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Frustum {
    position: Point<Real>,
    axis: Vector<Real>,
    field_of_view: Real,
    aspect_ratio: Real,
    near_distance: Real,
    hexahedron: ConvexHexahedron,
    props: ShapeProperties,
}

impl Frustum {
    /// Creates a new frustum.
    ///
    /// # Arguments:
    ///   * `apex` - the eye of the frustum.
    ///   * `axis` - the vector from the apex to the center of the far plane.
    ///   * `field_of_view` - the vertical field of view, in radians, in `[0, π)`.
    ///   * `aspect_ratio` - the width of the frustum's sections divided by their height.
    ///   * `near_distance` - the distance from the apex to the near plane. It is clamped to
    ///     `[0, far distance]`.
    pub fn new(
        apex: Point<Real>,
        axis: Vector<Real>,
        field_of_view: Real,
        aspect_ratio: Real,
        near_distance: Real,
    ) -> Self {
        let far = axis.norm();
        let near = na::clamp(near_distance, 0.0, far);

        if near != near_distance {
            log::debug!(
                "Frustum near distance {} clamped to {} (far distance {}).",
                near_distance,
                near,
                far
            );
        }

        let frame = Self::frame(&utils::axis_direction(&axis));
        let tan = (field_of_view / 2.0).tan();
        let corners = core::array::from_fn(|i| {
            let depth = if i & 4 != 0 { far } else { near };
            let half_height = depth * tan;
            let half_width = half_height * aspect_ratio;
            let local = Vector::new(
                if i & 1 != 0 { half_width } else { -half_width },
                if i & 2 != 0 { half_height } else { -half_height },
                depth,
            );
            apex + frame * local
        });
        let hexahedron =
            ConvexHexahedron::from_corners(corners, frame.to_rotation_matrix().into_inner());

        let far_half_height = far * tan;
        let far_half_width = far_half_height * aspect_ratio;
        let volume = 4.0 / 3.0 * aspect_ratio * tan * tan * (far.powi(3) - near.powi(3));

        Self {
            position: apex,
            axis,
            field_of_view,
            aspect_ratio,
            near_distance: near,
            hexahedron,
            props: ShapeProperties::new(
                (far * far + far_half_width * far_half_width + far_half_height * far_half_height)
                    .sqrt(),
                &corners,
                (far - near)
                    .min(far_half_width * 2.0)
                    .min(far_half_height * 2.0),
                volume,
            ),
        }
    }

    /// The rotation mapping local `+Z` to `dir` and local `+Y` to the frustum's up direction.
    fn frame(dir: &UnitVector<Real>) -> Rotation<Real> {
        match utils::orthogonal_up(dir) {
            Some(up) => Rotation::face_towards(dir, &up),
            None => utils::rotation_between_axes(&Vector::z_axis(), dir),
        }
    }

    /// The apex of this frustum, equal to its position.
    #[inline]
    pub fn apex(&self) -> Point<Real> {
        self.position
    }

    /// The vector from the apex to the center of the far plane.
    #[inline]
    pub fn axis(&self) -> Vector<Real> {
        self.axis
    }

    /// The unit viewing direction of this frustum.
    #[inline]
    pub fn direction(&self) -> UnitVector<Real> {
        utils::axis_direction(&self.axis)
    }

    /// The vertical field of view of this frustum, in radians.
    #[inline]
    pub fn field_of_view(&self) -> Real {
        self.field_of_view
    }

    /// The ratio between the width and the height of the sections of this frustum.
    #[inline]
    pub fn aspect_ratio(&self) -> Real {
        self.aspect_ratio
    }

    /// The distance from the apex to the near plane.
    #[inline]
    pub fn near_distance(&self) -> Real {
        self.near_distance
    }

    /// The distance from the apex to the far plane.
    #[inline]
    pub fn far_distance(&self) -> Real {
        self.axis.norm()
    }

    /// The eight corners of this frustum.
    ///
    /// See [`ConvexHexahedron::corners`] for their ordering. The far corners are the ones with
    /// an index greater than or equal to 4.
    #[inline]
    pub fn corners(&self) -> &[Point<Real>; 8] {
        self.hexahedron.corners()
    }

    /// The six planes bounding this frustum: left, right, bottom, top, near, far.
    #[inline]
    pub fn planes(&self) -> &[Plane; 6] {
        self.hexahedron.planes()
    }

    /// This frustum as a convex hexahedron.
    #[inline]
    pub fn hexahedron(&self) -> &ConvexHexahedron {
        &self.hexahedron
    }

    /// The orientation of this frustum, always the identity.
    ///
    /// Its orientation is carried by its axis instead.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::identity()
    }

    /// This frustum with its apex moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::new(
            position,
            self.axis,
            self.field_of_view,
            self.aspect_ratio,
            self.near_distance,
        )
    }

    /// This frustum with its axis rotated by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::new(
            self.position,
            rotation * self.axis,
            self.field_of_view,
            self.aspect_ratio,
            self.near_distance,
        )
    }

    /// This frustum with its near and far distances multiplied by `factor`.
    ///
    /// The field of view and aspect ratio are preserved.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::new(
            self.position,
            self.axis * factor,
            self.field_of_view,
            self.aspect_ratio,
            self.near_distance * factor,
        ))
    }
}

impl_shape_properties!(Frustum);
