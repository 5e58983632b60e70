use crate::math::{Point, Real, Rotation, UnitVector, Vector};
use crate::shape::shape_error::check_scale_factor;
use crate::shape::shape_properties::ShapeProperties;
use crate::shape::{Segment, ShapeError};
use crate::utils;

/// A line segment used as a shape.
///
/// It has no thickness: its volume and smallest dimension are zero. Its position is the
/// middle of its path.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Line {
    position: Point<Real>,
    path: Vector<Real>,
    props: ShapeProperties,
}

impl Line {
    /// Creates a new line centered at `position` and spanning `path`.
    pub fn new(position: Point<Real>, path: Vector<Real>) -> Self {
        let segment = Segment::centered(&position, &path);

        Self {
            position,
            path,
            props: ShapeProperties::new(path.norm() / 2.0, &[segment.a, segment.b], 0.0, 0.0),
        }
    }

    /// Creates the line going from `start` to `end`.
    pub fn between(start: Point<Real>, end: Point<Real>) -> Self {
        Self::new(na::center(&start, &end), end - start)
    }

    /// The vector from the start to the end of this line.
    #[inline]
    pub fn path(&self) -> Vector<Real> {
        self.path
    }

    /// The unit direction of this line.
    #[inline]
    pub fn direction(&self) -> UnitVector<Real> {
        utils::axis_direction(&self.path)
    }

    /// The length of this line.
    #[inline]
    pub fn length(&self) -> Real {
        self.path.norm()
    }

    /// The first endpoint of this line.
    #[inline]
    pub fn start(&self) -> Point<Real> {
        self.position - self.path * 0.5
    }

    /// The second endpoint of this line.
    #[inline]
    pub fn end(&self) -> Point<Real> {
        self.position + self.path * 0.5
    }

    /// This line as a segment.
    #[inline]
    pub fn segment(&self) -> Segment {
        Segment::new(self.start(), self.end())
    }

    /// The orientation of this line, always the identity.
    #[inline]
    pub fn rotation(&self) -> Rotation<Real> {
        Rotation::identity()
    }

    /// This line moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Self {
        Self::new(position, self.path)
    }

    /// This line with its path rotated by `rotation`.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Self {
        Self::new(self.position, rotation * self.path)
    }

    /// This line with its path multiplied by `factor`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Self, ShapeError> {
        let factor = check_scale_factor(factor)?;
        Ok(Self::new(self.position, self.path * factor))
    }
}

impl_shape_properties!(Line);
