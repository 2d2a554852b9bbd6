use std::fmt;

use super::{widened_product, Line, Point, Shape};
use crate::vector::Vector;

/// Closed segment between two points. Coinciding endpoints are allowed and
/// behave like a single point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Segment {
    begin: Point,
    end: Point,
}

impl Segment {
    #[inline]
    pub fn new(begin: Point, end: Point) -> Self {
        Self { begin, end }
    }
    #[inline]
    pub fn begin(&self) -> Point {
        self.begin
    }
    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }
    /// Both endpoints, in order.
    #[inline]
    pub fn borders(&self) -> (Point, Point) {
        (self.begin, self.end)
    }
    #[inline]
    pub fn direction(&self) -> Vector {
        self.end - self.begin
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.begin == self.end
    }

    /// Inclusive axis-aligned bounding box test.
    fn bbox_contains(&self, p: &Point) -> bool {
        let (lo_x, hi_x) = min_max(self.begin.x(), self.end.x());
        let (lo_y, hi_y) = min_max(self.begin.y(), self.end.y());
        (lo_x..=hi_x).contains(&p.x()) && (lo_y..=hi_y).contains(&p.y())
    }
}

#[inline]
fn min_max(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl Shape for Segment {
    fn translate(&mut self, shift: Vector) -> &mut Self {
        self.begin.translate(shift);
        self.end.translate(shift);
        self
    }

    /// Collinear with the endpoints and inside their bounding box.
    fn contains_point(&self, p: &Point) -> bool {
        if self.is_degenerate() {
            return self.begin == *p;
        }
        Line::new(self.begin, self.end).contains_point(p) && self.bbox_contains(p)
    }

    fn crosses_segment(&self, other: &Segment) -> bool {
        let (a, b) = self.borders();
        let (c, d) = other.borders();
        let ab = b - a;
        let cd = d - c;
        let straddle_cd = widened_product(ab.cross(c - a), ab.cross(d - a));
        let straddle_ab = widened_product(cd.cross(a - c), cd.cross(b - c));
        let strict = straddle_cd < 0 && straddle_ab < 0;
        let touching = self.contains_point(&c)
            || self.contains_point(&d)
            || other.contains_point(&a)
            || other.contains_point(&b);
        strict || touching
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({}, {})", self.begin, self.end)
    }
}
