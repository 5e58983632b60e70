//! Definition of the segment helper.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use na::{self, Unit};
use num::Zero;

/// The number of machine epsilons, per unit of coordinate magnitude, within which points are
/// considered to lie on a segment.
const TOLERANCE_ULPS: Real = 64.0;

/// A segment between two points.
///
/// This is not a shape by itself: it is the medial axis of capsules, cylinders and cones, the
/// edge of a convex hexahedron, and the support of the [`Line`](crate::shape::Line) shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// Creates the segment of the given `axis` centered at `center`.
    #[inline]
    pub fn centered(center: &Point<Real>, axis: &Vector<Real>) -> Segment {
        let half = axis * 0.5;
        Segment::new(center - half, center + half)
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    #[inline]
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    #[inline]
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a` toward `self.b`.
    /// Returns `None` is both points are equal.
    #[inline]
    pub fn direction(&self) -> Option<UnitVector<Real>> {
        Unit::try_new(self.scaled_direction(), DEFAULT_EPSILON)
    }

    /// The point at parameter `t`, i.e., `a + (b - a) * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.a + self.scaled_direction() * t
    }

    /// The parameter in `[0, 1]` of the point of this segment closest to `pt`.
    #[inline]
    pub fn closest_parameter(&self, pt: &Point<Real>) -> Real {
        let ab = self.scaled_direction();
        let sqnab = ab.norm_squared();

        if sqnab.is_zero() {
            0.0
        } else {
            na::clamp((pt - self.a).dot(&ab) / sqnab, 0.0, 1.0)
        }
    }

    /// The point of this segment closest to `pt`.
    #[inline]
    pub fn project_point(&self, pt: &Point<Real>) -> Point<Real> {
        self.point_at(self.closest_parameter(pt))
    }

    /// The absolute distance under which a point is considered to lie on this segment.
    ///
    /// This grows with the magnitude of the segment's coordinates to absorb rounding errors.
    #[inline]
    pub fn tolerance(&self) -> Real {
        let magnitude = self.a.coords.amax().max(self.b.coords.amax()).max(1.0);
        DEFAULT_EPSILON * TOLERANCE_ULPS * magnitude
    }

    /// The squared distance between `pt` and this segment.
    #[inline]
    pub fn distance_squared_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance_squared(pt, &self.project_point(pt))
    }
}
