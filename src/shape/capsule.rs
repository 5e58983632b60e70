use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::{Segment, ShapeError};
use crate::utils;
use na::RealField;

/// A capsule: the set of points at a distance smaller than `radius` from a segment.
///
/// The segment, or medial axis, is centered on the capsule's position. A capsule with a zero
/// length axis is a sphere.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    position: Point<Real>,
    axis: Vector<Real>,
    radius: Real,
    props: ShapeProperties,
}

impl Capsule {
    /// Creates a new capsule centered at `position`.
    ///
    /// The medial axis goes from `position - axis / 2` to `position + axis / 2`.
    pub fn new(position: Point<Real>, axis: Vector<Real>, radius: Real) -> Self {
        let segment = Segment::centered(&position, &axis);
        let up = Vector::y() * radius;
        let length = axis.norm();
        let volume = Real::pi() * radius * radius * length
            + Real::frac_pi_3() * 4.0 * radius.powi(3);

        Self {
            position,
            axis,
            radius,
            props: ShapeProperties::new(
                length / 2.0 + radius,
                &[
                    segment.a + up,
                    segment.a - up,
                    segment.b + up,
                    segment.b - up,
                ],
                radius * 2.0,
                volume,
            ),
        }
    }

    /// Creates a new capsule with a medial axis going from `start` to `end`.
    pub fn between(start: Point<Real>, end: Point<Real>, radius: Real) -> Self {
        Self::new(na::center(&start, &end), end - start, radius)
    }

    /// The axis of this capsule, from its start to its end.
    #[inline]
    pub fn axis(&self) -> Vector<Real> {
        self.axis
    }

    /// The unit direction of this capsule's axis.
    ///
    /// This is `+Y` if the axis has a zero length.
    #[inline]
    pub fn direction(&self) -> UnitVector<Real> {
        utils::axis_direction(&self.axis)
    }

    /// The length of the medial axis of this capsule.
    #[inline]
    pub fn length(&self) -> Real {
        self.axis.norm()
    }

    /// The radius of this capsule.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The first endpoint of this capsule's medial axis.
    #[inline]
    pub fn start(&self) -> Point<Real> {
        self.position - self.axis * 0.5
    }

    /// The second endpoint of this capsule's medial axis.
    #[inline]
    pub fn end(&self) -> Point<Real> {
        self.position + self.axis * 0.5
    }

    /// The medial axis of this capsule.
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.start(), self.end())
    }

    /// The orientation of this capsule, always the identity.
    ///
    /// Its orientation is carried by its axis instead.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::identity()
    }

    /// This capsule moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::new(position, self.axis, self.radius)
    }

    /// This capsule with its axis rotated by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::new(self.position, rotation * self.axis, self.radius)
    }

    /// This capsule with its axis and radius multiplied by `factor`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::new(
            self.position,
            self.axis * factor,
            self.radius * factor,
        ))
    }
}

impl_shape_properties!(Capsule);
