use std::fmt;

use super::{widened_product, Line, Point, Segment, Shape};
use crate::vector::Vector;

/// Half-infinite line from `origin` along `direction`.
///
/// Invariant: `direction` is non-zero. A zero direction has no supporting line;
/// `new` asserts it in debug builds and `try_new` rejects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ray {
    origin: Point,
    direction: Vector,
}

impl Ray {
    pub fn new(origin: Point, direction: Vector) -> Self {
        debug_assert!(!direction.is_zero(), "Ray needs a non-zero direction");
        Self { origin, direction }
    }

    /// Ray from `origin` through `point`.
    pub fn through(origin: Point, point: Point) -> Self {
        Self::new(origin, point - origin)
    }

    /// `None` for a zero direction or out-of-range input.
    pub fn try_new(origin: Point, direction: Vector) -> Option<Self> {
        if direction.is_zero() || !origin.pos.within_bounds() || !direction.within_bounds() {
            return None;
        }
        Some(Self::new(origin, direction))
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }
    #[inline]
    pub fn direction(&self) -> Vector {
        self.direction
    }

    /// The infinite line carrying the ray.
    #[inline]
    pub fn support_line(&self) -> Line {
        Line::new(self.origin, self.origin + self.direction)
    }
}

impl Shape for Ray {
    fn translate(&mut self, shift: Vector) -> &mut Self {
        self.origin.translate(shift);
        self
    }

    fn contains_point(&self, p: &Point) -> bool {
        self.support_line().contains_point(p) && (*p - self.origin).dot(self.direction) >= 0
    }

    fn crosses_segment(&self, s: &Segment) -> bool {
        let (first, second) = s.borders();
        if self.contains_point(&first) || self.contains_point(&second) {
            return true;
        }
        // Segment through the origin with neither endpoint on the ray.
        if s.contains_point(&self.origin) {
            return true;
        }
        let side_first = (first - self.origin).cross(self.direction);
        let side_second = (second - self.origin).cross(self.direction);
        if widened_product(side_first, side_second) >= 0 {
            return false;
        }
        // The supporting line meets the segment; reject if that happens behind
        // the origin, i.e. `second` and a forward point sit on opposite sides
        // of the line through the origin and `first`.
        let ahead = self.origin + self.direction;
        !Line::new(self.origin, first).crosses_segment(&Segment::new(second, ahead))
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray({}, {})", self.origin, self.direction)
    }
}
