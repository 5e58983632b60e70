//! Bounding sphere.

use crate::math::{Point, Real};
use na;

/// A Bounding Sphere.
///
/// Every shape has one, centered at the shape's position, with the shape's containing
/// radius. It is used for the cheap rejection performed before every intersection test.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The bounding sphere center.
    pub center: Point<Real>,
    /// The bounding sphere radius.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }

    /// The bounding sphere center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The bounding sphere radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// Checks if this bounding sphere intersects another one.
    ///
    /// Touching spheres intersect.
    #[inline]
    pub fn intersects(&self, other: &BoundingSphere) -> bool {
        let distance_squared = na::distance_squared(&self.center, &other.center);
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    /// Checks if `pt` lies inside of this bounding sphere, or on its boundary.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// Checks if `other` lies strictly inside of this bounding sphere, without touching its
    /// boundary.
    #[inline]
    pub fn strictly_contains(&self, other: &BoundingSphere) -> bool {
        na::distance(&self.center, &other.center) + other.radius < self.radius
    }
}
