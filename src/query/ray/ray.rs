//! Structure needed to cast rays.

use crate::math::{Point, Real, Vector};

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending infinitely in a
/// direction. The swept-sphere contact query reduces most of its cases to rays: the center of
/// the swept sphere follows a ray whose direction is the capsule's axis.
///
/// The direction does not need to be normalized. Times of impact are expressed in multiples
/// of `dir`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Computes the point at the given parameter on this ray.
    ///
    /// This is computed as `self.origin + self.dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}
