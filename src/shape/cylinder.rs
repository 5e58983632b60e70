use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::{Capsule, Segment, ShapeError};
use crate::utils;
use na::RealField;

/// A cylinder with flat circular caps.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    position: Point<Real>,
    axis: Vector<Real>,
    radius: Real,
    props: ShapeProperties,
}

impl Cylinder {
    /// Creates a new cylinder centered at `position`.
    ///
    /// The caps are centered at `position - axis / 2` and `position + axis / 2`.
    pub fn new(position: Point<Real>, axis: Vector<Real>, radius: Real) -> Self {
        let segment = Segment::centered(&position, &axis);
        let length = axis.norm();
        let dir = utils::axis_direction(&axis);
        let mut candidates = [segment.a, segment.b, segment.a, segment.b];

        if let Some(up) = utils::orthogonal_up(&dir) {
            let up = up.into_inner() * radius;
            candidates = [segment.a + up, segment.a - up, segment.b + up, segment.b - up];
        }

        Self {
            position,
            axis,
            radius,
            props: ShapeProperties::new(
                (length * length / 4.0 + radius * radius).sqrt(),
                &candidates,
                (radius * 2.0).min(length),
                Real::pi() * radius * radius * length,
            ),
        }
    }

    /// The axis of this cylinder, from the center of its first cap to the center of its
    /// second cap.
    #[inline]
    pub fn axis(&self) -> Vector<Real> {
        self.axis
    }

    /// The unit direction of this cylinder's axis.
    #[inline]
    pub fn direction(&self) -> UnitVector<Real> {
        utils::axis_direction(&self.axis)
    }

    /// The distance between the caps of this cylinder.
    #[inline]
    pub fn length(&self) -> Real {
        self.axis.norm()
    }

    /// The radius of this cylinder.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The center of the first cap.
    #[inline]
    pub fn start(&self) -> Point<Real> {
        self.position - self.axis * 0.5
    }

    /// The center of the second cap.
    #[inline]
    pub fn end(&self) -> Point<Real> {
        self.position + self.axis * 0.5
    }

    /// The segment joining the centers of both caps.
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.start(), self.end())
    }

    /// The capsule with the same axis and radius as this cylinder.
    ///
    /// The capsule encloses the cylinder. It is used as a conservative substitute by the
    /// intersection tests.
    #[inline]
    pub fn as_capsule(&self) -> Capsule {
        Capsule::new(self.position, self.axis, self.radius)
    }

    /// The orientation of this cylinder, always the identity.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::identity()
    }

    /// This cylinder moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::new(position, self.axis, self.radius)
    }

    /// This cylinder with its axis rotated by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::new(self.position, rotation * self.axis, self.radius)
    }

    /// This cylinder with its axis and radius multiplied by `factor`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::new(
            self.position,
            self.axis * factor,
            self.radius * factor,
        ))
    }
}

impl_shape_properties!(Cylinder);

#[cfg(test)]
mod test {
    use super::Cylinder;
    use crate::math::{Point, Real, Vector};
    use na::RealField;

    #[test]
    fn vertical_cylinder() {
        let cylinder = Cylinder::new(Point::origin(), Vector::new(0.0, 4.0, 0.0), 1.5);
        assert_eq!(cylinder.highest_point().y, 2.0);
        assert_eq!(cylinder.lowest_point().y, -2.0);
        assert_eq!(cylinder.containing_radius(), 2.5);
        assert_eq!(cylinder.smallest_dimension(), 3.0);
        assert!(relative_eq!(
            cylinder.volume(),
            Real::pi() * 9.0,
            max_relative = 1.0e-5
        ));
    }

    #[test]
    fn horizontal_cylinder() {
        let cylinder = Cylinder::new(Point::origin(), Vector::new(6.0, 0.0, 0.0), 1.0);
        assert!(relative_eq!(cylinder.highest_point().y, 1.0));
        assert!(relative_eq!(cylinder.lowest_point().y, -1.0));
        assert_eq!(cylinder.smallest_dimension(), 2.0);
        assert_eq!(cylinder.as_capsule().radius(), 1.0);
    }
}
