//! Closed set of integer 2D shapes with membership predicates.
//!
//! Purpose
//! - Every shape answers the same three questions: translate in place,
//!   does it contain a point, does it share a point with a segment.
//! - All predicates are boundary-inclusive and exact except circle crossing,
//!   which finds roots in `f64` after exact coefficient setup.
//!
//! Model
//! - `Shape` is the capability trait; `AnyShape` is the closed sum type over
//!   the six variants, dispatched by `match`.
//! - Duplication is `Clone` (deep, value semantics); rendering is `Display`.
//!
//! Code cross-refs: `crate::vector::{Vector, MAX_COORD}`, `cast::CastCfg`

mod any;
pub mod cast;
mod circle;
mod line;
mod point;
mod polygon;
mod ray;
mod segment;

pub use any::AnyShape;
pub use cast::CastCfg;
pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use polygon::Polygon;
pub use ray::Ray;
pub use segment::Segment;

use crate::vector::Vector;

/// Operations shared by every shape variant.
pub trait Shape {
    /// Translate in place by `shift`; returns `self` for chaining.
    fn translate(&mut self, shift: Vector) -> &mut Self;

    /// True iff `p` lies on or inside the shape (boundary-inclusive).
    fn contains_point(&self, p: &Point) -> bool;

    /// True iff the shape and `s` share at least one point (endpoint-inclusive).
    fn crosses_segment(&self, s: &Segment) -> bool;
}

/// Product of two cross products; `i128` so the sign is exact under `MAX_COORD`.
#[inline]
pub(crate) fn widened_product(u: i64, v: i64) -> i128 {
    i128::from(u) * i128::from(v)
}

#[cfg(test)]
mod tests;
