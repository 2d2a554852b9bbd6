use std::fmt;
use std::ops::{Add, Sub};

use super::{Segment, Shape};
use crate::vector::Vector;

/// Zero-dimensional shape: a position. Identity is coordinate equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub pos: Vector,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            pos: Vector::new(x, y),
        }
    }
    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }
}

impl From<Vector> for Point {
    #[inline]
    fn from(pos: Vector) -> Self {
        Self { pos }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// Displacement from `rhs` to `self`.
impl Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        self.pos - rhs.pos
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, shift: Vector) -> Point {
        Point::from(self.pos + shift)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, shift: Vector) -> Point {
        Point::from(self.pos - shift)
    }
}

impl Shape for Point {
    fn translate(&mut self, shift: Vector) -> &mut Self {
        self.pos += shift;
        self
    }

    fn contains_point(&self, p: &Point) -> bool {
        self.pos == p.pos
    }

    fn crosses_segment(&self, s: &Segment) -> bool {
        s.contains_point(self)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.pos.x, self.pos.y)
    }
}
