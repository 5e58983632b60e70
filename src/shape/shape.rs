use crate::bounding_volume::BoundingSphere;
use crate::math::{Point, Real, Rotation};
use crate::query;
use crate::shape::{
    Capsule, Cone, Cuboid, Cylinder, Ellipsoid, Frustum, HollowSphere, Line, ShapeError,
    SinglePoint, Sphere, Torus,
};

/// Enum representing the type of a shape.
///
/// The declaration order matters: when two shapes are tested for intersection, the one with
/// the smallest type selects the algorithm.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShapeType {
    /// A single point.
    SinglePoint = 0,
    /// A line segment.
    Line,
    /// A sphere.
    Sphere,
    /// A sphere with a spherical cavity.
    HollowSphere,
    /// A capsule.
    Capsule,
    /// A cylinder.
    Cylinder,
    /// A cone.
    Cone,
    /// A rectangular box.
    Cuboid,
    /// An ellipsoid.
    Ellipsoid,
    /// A truncated pyramid.
    Frustum,
    /// A torus.
    Torus,
}

/// A solid shape of any of the supported types.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Shape {
    /// A single point.
    SinglePoint(SinglePoint),
    /// A line segment.
    Line(Line),
    /// A sphere.
    Sphere(Sphere),
    /// A sphere with a spherical cavity.
    HollowSphere(HollowSphere),
    /// A capsule.
    Capsule(Capsule),
    /// A cylinder.
    Cylinder(Cylinder),
    /// A cone.
    Cone(Cone),
    /// A rectangular box.
    Cuboid(Cuboid),
    /// An ellipsoid.
    Ellipsoid(Ellipsoid),
    /// A truncated pyramid.
    Frustum(Frustum),
    /// A torus.
    Torus(Torus),
}

static_assertions::assert_impl_all!(Shape: Send, Sync, Copy);
static_assertions::assert_impl_all!(ShapeType: Send, Sync, Copy, Ord);

/// Evaluates `$e` with `$s` bound to the shape wrapped by `$shape`, whatever its type.
macro_rules! dispatch(
    ($shape: expr, $s: ident => $e: expr) => {
        match $shape {
            Shape::SinglePoint($s) => $e,
            Shape::Line($s) => $e,
            Shape::Sphere($s) => $e,
            Shape::HollowSphere($s) => $e,
            Shape::Capsule($s) => $e,
            Shape::Cylinder($s) => $e,
            Shape::Cone($s) => $e,
            Shape::Cuboid($s) => $e,
            Shape::Ellipsoid($s) => $e,
            Shape::Frustum($s) => $e,
            Shape::Torus($s) => $e,
        }
    }
);

macro_rules! impl_from_shape(
    ($($Variant: ident),*) => {$(
        impl From<$Variant> for Shape {
            #[inline]
            fn from(shape: $Variant) -> Self {
                Shape::$Variant(shape)
            }
        }
    )*}
);

impl_from_shape!(
    SinglePoint,
    Line,
    Sphere,
    HollowSphere,
    Capsule,
    Cylinder,
    Cone,
    Cuboid,
    Ellipsoid,
    Frustum,
    Torus
);

impl Shape {
    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::SinglePoint(_) => ShapeType::SinglePoint,
            Shape::Line(_) => ShapeType::Line,
            Shape::Sphere(_) => ShapeType::Sphere,
            Shape::HollowSphere(_) => ShapeType::HollowSphere,
            Shape::Capsule(_) => ShapeType::Capsule,
            Shape::Cylinder(_) => ShapeType::Cylinder,
            Shape::Cone(_) => ShapeType::Cone,
            Shape::Cuboid(_) => ShapeType::Cuboid,
            Shape::Ellipsoid(_) => ShapeType::Ellipsoid,
            Shape::Frustum(_) => ShapeType::Frustum,
            Shape::Torus(_) => ShapeType::Torus,
        }
    }

    /// The position of this shape.
    ///
    /// This is the center of the shape's bounding sphere, except for the frustum whose
    /// position is its apex.
    pub fn position(&self) -> Point<Real> {
        dispatch!(self, s => s.position())
    }

    /// The orientation of this shape.
    ///
    /// Shapes defined by an axis (capsule, cylinder, cone, frustum, line) always report the
    /// identity.
    pub fn rotation(&self) -> Rotation<Real> {
        dispatch!(self, s => s.rotation())
    }

    /// The radius of the smallest sphere centered at this shape's position and enclosing it.
    pub fn containing_radius(&self) -> Real {
        dispatch!(self, s => s.containing_radius())
    }

    /// The point of this shape with the greatest `y` coordinate.
    pub fn highest_point(&self) -> Point<Real> {
        dispatch!(self, s => s.highest_point())
    }

    /// The point of this shape with the smallest `y` coordinate.
    pub fn lowest_point(&self) -> Point<Real> {
        dispatch!(self, s => s.lowest_point())
    }

    /// The smallest extent of this shape along any direction.
    pub fn smallest_dimension(&self) -> Real {
        dispatch!(self, s => s.smallest_dimension())
    }

    /// The volume of this shape.
    pub fn volume(&self) -> Real {
        dispatch!(self, s => s.volume())
    }

    /// The bounding sphere of this shape.
    pub fn bounding_sphere(&self) -> BoundingSphere {
        dispatch!(self, s => s.bounding_sphere())
    }

    /// Tests if this shape intersects `other`.
    ///
    /// See [`intersection_test`](crate::query::intersection_test).
    pub fn intersects(&self, other: &Shape) -> bool {
        query::intersection_test(self, other)
    }

    /// This shape moved to `position`.
    pub fn with_position(&self, position: Point<Real>) -> Shape {
        dispatch!(self, s => s.with_position(position).into())
    }

    /// This shape with its orientation changed to `rotation`.
    ///
    /// Shapes defined by an axis get their axis rotated by `rotation`; other shapes get
    /// their orientation replaced.
    pub fn with_rotation(&self, rotation: Rotation<Real>) -> Shape {
        dispatch!(self, s => s.with_rotation(rotation).into())
    }

    /// This shape with all its linear dimensions multiplied by `factor`.
    ///
    /// Fails if `factor` is negative or `NaN`.
    pub fn scale_by_dimension(&self, factor: Real) -> Result<Shape, ShapeError> {
        dispatch!(self, s => s.scale_by_dimension(factor).map(Shape::from))
    }

    /// This shape scaled so that its volume gets multiplied by `factor`.
    ///
    /// Fails if `factor` is negative or `NaN`.
    pub fn scale_volume(&self, factor: Real) -> Result<Shape, ShapeError> {
        dispatch!(self, s => s.scale_volume(factor).map(Shape::from))
    }
}
