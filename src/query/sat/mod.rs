//! Application of the Separating Axis Theorem (SAT) for intersection tests.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which their
//! projections do not overlap. For convex polyhedra, it is sufficient to test the face normals
//! of both shapes, and the cross products of every pair of edges taken from each shape.
//!
//! The functions of this module compute, for a set of candidate axes, the best separation
//! distance: positive if the shapes are separated along that axis, negative if their
//! projections overlap.

pub use self::sat_hexahedron_hexahedron::*;

mod sat_hexahedron_hexahedron;
