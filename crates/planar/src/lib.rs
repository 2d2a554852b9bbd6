//! Integer 2D shapes with exact, boundary-inclusive membership predicates.
//!
//! Contract
//! - Coordinates, direction components and radii satisfy `|v| <= MAX_COORD`.
//!   Under that bound every predicate is overflow-free.
//! - Queries are total: precondition violations (zero ray direction,
//!   coincident line points, negative radius, empty polygon) are caught by
//!   `debug_assert!` in `new` and rejected by the `try_new` constructors.
//!
//! API Policy
//! - `api` is the curated surface; `prelude` covers quick imports.

pub mod api;
pub mod shapes;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use shapes::{AnyShape, CastCfg, Circle, Line, Point, Polygon, Ray, Segment, Shape};
pub use vector::{Vector, MAX_COORD};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::shapes::{AnyShape, CastCfg, Circle, Line, Point, Polygon, Ray, Segment, Shape};
    pub use crate::vector::{Vector, MAX_COORD};
    pub use nalgebra::Vector2 as Vec2;
}
