//! Infinite line in implicit form `a·x + b·y + c = 0`.
//!
//! The computational basis the other linear shapes reduce to: `Segment` and
//! `Ray` build a `Line` for their collinearity checks.

use std::fmt;

use super::{widened_product, Point, Segment, Shape};
use crate::vector::Vector;

/// Infinite line through two distinct points.
///
/// Invariants:
/// - `(a, b) != (0, 0)` (defining points differ).
/// - `first` and `second` stay on the line across translations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Line {
    a: i64,
    b: i64,
    c: i64,
    first: Point,
    second: Point,
}

impl Line {
    /// Pre: `first != second`. Coincident points leave the line undefined
    /// (every point satisfies `0 = 0`); use `try_new` for unchecked input.
    pub fn new(first: Point, second: Point) -> Self {
        debug_assert!(first != second, "Line needs two distinct points");
        let (x1, y1) = (i64::from(first.x()), i64::from(first.y()));
        let (x2, y2) = (i64::from(second.x()), i64::from(second.y()));
        Self {
            a: y2 - y1,
            b: x1 - x2,
            c: x1 * (y1 - y2) + y1 * (x2 - x1),
            first,
            second,
        }
    }

    /// `None` if the points coincide or leave the coordinate range.
    pub fn try_new(first: Point, second: Point) -> Option<Self> {
        if first == second || !first.pos.within_bounds() || !second.pos.within_bounds() {
            return None;
        }
        Some(Self::new(first, second))
    }

    /// Coefficients `(a, b, c)`.
    #[inline]
    pub fn coefficients(&self) -> (i64, i64, i64) {
        (self.a, self.b, self.c)
    }
    #[inline]
    pub fn first(&self) -> Point {
        self.first
    }
    #[inline]
    pub fn second(&self) -> Point {
        self.second
    }
    /// Direction from the first to the second defining point.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.second - self.first
    }

    /// `a·x + b·y + c` at `p`; zero exactly on the line, sign gives the side.
    #[inline]
    pub fn eval(&self, p: &Point) -> i128 {
        i128::from(self.a) * i128::from(p.x())
            + i128::from(self.b) * i128::from(p.y())
            + i128::from(self.c)
    }
}

impl Shape for Line {
    fn translate(&mut self, shift: Vector) -> &mut Self {
        self.c -= self.a * i64::from(shift.x) + self.b * i64::from(shift.y);
        self.first.translate(shift);
        self.second.translate(shift);
        self
    }

    fn contains_point(&self, p: &Point) -> bool {
        self.eval(p) == 0
    }

    /// Endpoints on opposite sides, or either endpoint on the line.
    fn crosses_segment(&self, s: &Segment) -> bool {
        let d = self.direction();
        let u = s.begin() - self.first;
        let v = s.end() - self.first;
        widened_product(d.cross(u), d.cross(v)) <= 0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {}, {})", self.a, self.b, self.c)
    }
}
