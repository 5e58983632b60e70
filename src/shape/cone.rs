use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::{Segment, ShapeError};
use crate::utils;
use na::RealField;

/// A solid right circular cone.
///
/// The cone's axis goes from its apex to the center of its base. The cone's position is the
/// middle of that axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cone {
    position: Point<Real>,
    axis: Vector<Real>,
    radius: Real,
    props: ShapeProperties,
}

impl Cone {
    /// Creates a new cone centered at `position`.
    ///
    /// The apex is located at `position - axis / 2` and the center of the base at
    /// `position + axis / 2`. The base has the given `radius`.
    pub fn new(position: Point<Real>, axis: Vector<Real>, radius: Real) -> Self {
        let segment = Segment::centered(&position, &axis);
        let length = axis.norm();
        let dir = utils::axis_direction(&axis);
        let mut candidates = [segment.a, segment.b, segment.b];

        if let Some(up) = utils::orthogonal_up(&dir) {
            let up = up.into_inner() * radius;
            candidates = [segment.a, segment.b + up, segment.b - up];
        }

        Self {
            position,
            axis,
            radius,
            props: ShapeProperties::new(
                (length * length / 4.0 + radius * radius).sqrt(),
                &candidates,
                (radius * 2.0).min(length),
                Real::frac_pi_3() * radius * radius * length,
            ),
        }
    }

    /// Creates a new cone from its apex, its axis and its half-angle at the apex.
    ///
    /// The `half_angle` is expressed in radians and must lie in `[0, π/2)`.
    pub fn from_apex(apex: Point<Real>, axis: Vector<Real>, half_angle: Real) -> Self {
        let radius = axis.norm() * half_angle.tan();
        Self::new(apex + axis * 0.5, axis, radius)
    }

    /// The axis of this cone, from its apex to the center of its base.
    #[inline]
    pub fn axis(&self) -> Vector<Real> {
        self.axis
    }

    /// The unit direction of this cone's axis.
    #[inline]
    pub fn direction(&self) -> UnitVector<Real> {
        utils::axis_direction(&self.axis)
    }

    /// The height of this cone.
    #[inline]
    pub fn length(&self) -> Real {
        self.axis.norm()
    }

    /// The radius of the base of this cone.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The half-angle at the apex of this cone, in radians.
    #[inline]
    pub fn half_angle(&self) -> Real {
        self.radius.atan2(self.length())
    }

    /// The apex of this cone.
    #[inline]
    pub fn apex(&self) -> Point<Real> {
        self.position - self.axis * 0.5
    }

    /// The center of the base of this cone.
    #[inline]
    pub fn base_center(&self) -> Point<Real> {
        self.position + self.axis * 0.5
    }

    /// The segment from the apex to the base center of this cone.
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.apex(), self.base_center())
    }

    /// The radius of the cross-section located at the parameter `t` of the axis.
    ///
    /// The parameter is `0` at the apex and `1` at the base.
    #[inline]
    pub fn radius_at(&self, t: Real) -> Real {
        self.radius * na::clamp(t, 0.0, 1.0)
    }

    /// The orientation of this cone, always the identity.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::identity()
    }

    /// This cone moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::new(position, self.axis, self.radius)
    }

    /// This cone with its axis rotated by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::new(self.position, rotation * self.axis, self.radius)
    }

    /// This cone with its axis and radius multiplied by `factor`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::new(
            self.position,
            self.axis * factor,
            self.radius * factor,
        ))
    }
}

impl_shape_properties!(Cone);
