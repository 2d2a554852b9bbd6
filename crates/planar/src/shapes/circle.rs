//! Disk membership and circumference crossing.
//!
//! - `contains_point` tests the closed disk.
//! - `crosses_segment` asks whether the segment meets the circumference: the
//!   segment `A + t(B - A)` is substituted into the circle equation and the
//!   resulting quadratic in `t` must have a root in `[0, 1]`.
//!
//! The root test never leaves integer arithmetic: with `f(t) = a·t² + b·t + c`,
//! a sign change between `f(0)` and `f(1)` brackets a root, and otherwise a
//! root exists only at or around the vertex `-b / 2a`. Endpoints exactly on
//! the circumference are decided exactly for every input under `MAX_COORD`.

use std::fmt;

use super::{Point, Segment, Shape};
use crate::vector::Vector;

/// Circle with integer center and radius.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Circle {
    center: Point,
    radius: i32,
}

impl Circle {
    /// Pre: `radius >= 0`. Radius 0 degenerates to the center point.
    pub fn new(center: Point, radius: i32) -> Self {
        debug_assert!(radius >= 0, "Circle radius must be non-negative");
        Self { center, radius }
    }

    /// `None` for a negative radius or out-of-range input.
    pub fn try_new(center: Point, radius: i32) -> Option<Self> {
        if radius < 0 || !center.pos.within_bounds() || !Vector::new(radius, 0).within_bounds() {
            return None;
        }
        Some(Self::new(center, radius))
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }
    #[inline]
    fn radius_squared(&self) -> i64 {
        i64::from(self.radius) * i64::from(self.radius)
    }
}

/// Does `a·t² + b·t + c = 0` have a root with `t` in `[0, 1]`?
///
/// Pre: `a >= 0`. Linear when `a == 0`; `a == b == 0` has no root.
fn has_unit_root(a: i64, b: i64, c: i64) -> bool {
    if a == 0 && b == 0 {
        return false;
    }
    let (a, b, c) = (i128::from(a), i128::from(b), i128::from(c));
    let at_zero = c;
    let at_one = a + b + c;
    if at_zero * at_one <= 0 {
        return true;
    }
    // Same sign at both ends. Negative: the upward parabola stays below zero
    // on [0, 1]. Positive: need a real root with the vertex inside [0, 1].
    at_zero > 0 && a > 0 && b * b - 4 * a * c >= 0 && (0..=2 * a).contains(&-b)
}

impl Shape for Circle {
    fn translate(&mut self, shift: Vector) -> &mut Self {
        self.center.translate(shift);
        self
    }

    fn contains_point(&self, p: &Point) -> bool {
        (*p - self.center).norm_squared() <= self.radius_squared()
    }

    fn crosses_segment(&self, s: &Segment) -> bool {
        let d = s.direction();
        let f = s.begin() - self.center;
        let a = d.norm_squared();
        let b = 2 * d.dot(f);
        let c = f.norm_squared() - self.radius_squared();
        has_unit_root(a, b, c)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle({}, {})", self.center, self.radius)
    }
}
