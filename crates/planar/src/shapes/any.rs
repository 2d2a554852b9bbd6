use std::fmt;

use super::{Circle, Line, Point, Polygon, Ray, Segment, Shape};
use crate::vector::Vector;

/// Closed sum over every shape variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyShape {
    Point(Point),
    Segment(Segment),
    Ray(Ray),
    Line(Line),
    Circle(Circle),
    Polygon(Polygon),
}

impl AnyShape {
    /// Variant name as used in renderings.
    pub fn kind(&self) -> &'static str {
        match self {
            AnyShape::Point(_) => "Point",
            AnyShape::Segment(_) => "Segment",
            AnyShape::Ray(_) => "Ray",
            AnyShape::Line(_) => "Line",
            AnyShape::Circle(_) => "Circle",
            AnyShape::Polygon(_) => "Polygon",
        }
    }
}

impl Shape for AnyShape {
    fn translate(&mut self, shift: Vector) -> &mut Self {
        match self {
            AnyShape::Point(s) => {
                s.translate(shift);
            }
            AnyShape::Segment(s) => {
                s.translate(shift);
            }
            AnyShape::Ray(s) => {
                s.translate(shift);
            }
            AnyShape::Line(s) => {
                s.translate(shift);
            }
            AnyShape::Circle(s) => {
                s.translate(shift);
            }
            AnyShape::Polygon(s) => {
                s.translate(shift);
            }
        }
        self
    }

    fn contains_point(&self, p: &Point) -> bool {
        match self {
            AnyShape::Point(s) => s.contains_point(p),
            AnyShape::Segment(s) => s.contains_point(p),
            AnyShape::Ray(s) => s.contains_point(p),
            AnyShape::Line(s) => s.contains_point(p),
            AnyShape::Circle(s) => s.contains_point(p),
            AnyShape::Polygon(s) => s.contains_point(p),
        }
    }

    fn crosses_segment(&self, seg: &Segment) -> bool {
        match self {
            AnyShape::Point(s) => s.crosses_segment(seg),
            AnyShape::Segment(s) => s.crosses_segment(seg),
            AnyShape::Ray(s) => s.crosses_segment(seg),
            AnyShape::Line(s) => s.crosses_segment(seg),
            AnyShape::Circle(s) => s.crosses_segment(seg),
            AnyShape::Polygon(s) => s.crosses_segment(seg),
        }
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyShape::Point(s) => fmt::Display::fmt(s, f),
            AnyShape::Segment(s) => fmt::Display::fmt(s, f),
            AnyShape::Ray(s) => fmt::Display::fmt(s, f),
            AnyShape::Line(s) => fmt::Display::fmt(s, f),
            AnyShape::Circle(s) => fmt::Display::fmt(s, f),
            AnyShape::Polygon(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<Point> for AnyShape {
    fn from(s: Point) -> Self {
        AnyShape::Point(s)
    }
}
impl From<Segment> for AnyShape {
    fn from(s: Segment) -> Self {
        AnyShape::Segment(s)
    }
}
impl From<Ray> for AnyShape {
    fn from(s: Ray) -> Self {
        AnyShape::Ray(s)
    }
}
impl From<Line> for AnyShape {
    fn from(s: Line) -> Self {
        AnyShape::Line(s)
    }
}
impl From<Circle> for AnyShape {
    fn from(s: Circle) -> Self {
        AnyShape::Circle(s)
    }
}
impl From<Polygon> for AnyShape {
    fn from(s: Polygon) -> Self {
        AnyShape::Polygon(s)
    }
}
