//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};

/// An Axis-Aligned Bounding Box.
///
/// Used as the local-space representation of boxes, for example when a cuboid is
/// expressed in its own frame, or when the face regions of a box dilated by a radius
/// are computed.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Aabb {
    /// The point with the smallest coordinates of this box.
    pub mins: Point<Real>,
    /// The point with the greatest coordinates of this box.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// Enlarges this AABB by `amount` along the `axis`-th direction only, on both sides.
    #[inline]
    pub fn loosened_along(&self, axis: usize, amount: Real) -> Aabb {
        let mut result = *self;
        result.mins[axis] -= amount;
        result.maxs[axis] += amount;
        result
    }

    /// Tests if `pt` lies inside of this AABB or on its boundary.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point<Real>) -> bool {
        (0..DIM).all(|i| pt[i] >= self.mins[i] && pt[i] <= self.maxs[i])
    }

    /// The point of this AABB closest to `pt`.
    #[inline]
    pub fn clamp_point(&self, pt: &Point<Real>) -> Point<Real> {
        Point::from(pt.coords.sup(&self.mins.coords).inf(&self.maxs.coords))
    }
}
