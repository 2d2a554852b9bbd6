//! Curated API surface.
//!
//! - Shapes and the capability trait, ray-cast configuration.
//! - Exact signed area of a vector pair.

pub use crate::shapes::cast::{fallback_directions, query_rng, random_direction};
pub use crate::shapes::{AnyShape, CastCfg, Circle, Line, Point, Polygon, Ray, Segment, Shape};
pub use crate::vector::{Vector, MAX_COORD};

/// Pre: `a` and `b` respect `MAX_COORD`.
/// Post: signed area of the parallelogram spanned by (a, b), exact.
pub fn parallelogram_area(a: Vector, b: Vector) -> i64 {
    a.cross(b)
}
