use crate::math::{Point, Real};

/// The read-only properties every shape derives from its parameters when it is built.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub(crate) struct ShapeProperties {
    pub containing_radius: Real,
    pub highest_point: Point<Real>,
    pub lowest_point: Point<Real>,
    pub smallest_dimension: Real,
    pub volume: Real,
}

impl ShapeProperties {
    /// Builds the properties, picking the vertical extrema among `candidates`.
    ///
    /// `candidates` must contain the points of the shape that can be extremal along `+Y`
    /// and must not be empty.
    pub fn new(
        containing_radius: Real,
        candidates: &[Point<Real>],
        smallest_dimension: Real,
        volume: Real,
    ) -> Self {
        let first = candidates.first().copied().unwrap_or_else(Point::origin);
        let (lowest_point, highest_point) =
            candidates.iter().fold((first, first), |(lowest, highest), pt| {
                (
                    if pt.y < lowest.y { *pt } else { lowest },
                    if pt.y > highest.y { *pt } else { highest },
                )
            });

        Self {
            containing_radius,
            highest_point,
            lowest_point,
            smallest_dimension,
            volume,
        }
    }
}

/// Implements the accessors every shape shares, reading its cached [`ShapeProperties`].
///
/// The shape must have a `position` and a `props` field, and a `scale_by_dimension` method.
macro_rules! impl_shape_properties(
    ($($Shape: ident),*) => {$(
        impl $Shape {
            /// The position of this shape.
            #[inline]
            pub fn position(&self) -> $crate::math::Point<$crate::math::Real> {
                self.position
            }

            /// The radius of the smallest sphere centered at this shape's position and
            /// enclosing it.
            #[inline]
            pub fn containing_radius(&self) -> $crate::math::Real {
                self.props.containing_radius
            }

            /// The point of this shape with the greatest `y` coordinate.
            #[inline]
            pub fn highest_point(&self) -> $crate::math::Point<$crate::math::Real> {
                self.props.highest_point
            }

            /// The point of this shape with the smallest `y` coordinate.
            #[inline]
            pub fn lowest_point(&self) -> $crate::math::Point<$crate::math::Real> {
                self.props.lowest_point
            }

            /// The smallest extent of this shape along any direction.
            #[inline]
            pub fn smallest_dimension(&self) -> $crate::math::Real {
                self.props.smallest_dimension
            }

            /// The volume of this shape.
            #[inline]
            pub fn volume(&self) -> $crate::math::Real {
                self.props.volume
            }

            /// The bounding sphere of this shape.
            #[inline]
            pub fn bounding_sphere(&self) -> $crate::bounding_volume::BoundingSphere {
                $crate::bounding_volume::BoundingSphere::new(
                    self.position,
                    self.props.containing_radius,
                )
            }

            /// Scales this shape so that its volume gets multiplied by `factor`.
            ///
            /// Every linear dimension is multiplied by the cubic root of `factor`.
            pub fn scale_volume(
                &self,
                factor: $crate::math::Real,
            ) -> Result<Self, $crate::shape::ShapeError> {
                self.scale_by_dimension($crate::shape::shape_error::volume_scale_to_linear(factor)?)
            }

            /// Tests if this shape intersects `other`.
            ///
            /// See [`intersection_test`]($crate::query::intersection_test).
            #[inline]
            pub fn intersects(&self, other: &$crate::shape::Shape) -> bool {
                $crate::query::intersection_test(&$crate::shape::Shape::from(*self), other)
            }
        }
    )*}
);
