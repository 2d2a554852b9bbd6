//! JSON documents accepted by the CLI and their conversion into shapes.
//!
//! Shapes are `kind`-tagged objects; coordinates are `[x, y]` pairs.
//! Building validates every constructor precondition, so malformed input
//! becomes an error instead of an undefined geometric answer.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use planar::{AnyShape, Circle, Line, Point, Polygon, Ray, Segment, Vector};

/// Coordinate pair `[x, y]`.
pub type Xy = [i32; 2];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeDoc {
    Point { x: i32, y: i32 },
    Segment { begin: Xy, end: Xy },
    Ray { origin: Xy, direction: Xy },
    Line { first: Xy, second: Xy },
    Circle { center: Xy, radius: i32 },
    Polygon { vertices: Vec<Xy> },
}

impl ShapeDoc {
    pub fn build(&self) -> Result<AnyShape> {
        let shape: AnyShape = match self {
            ShapeDoc::Point { x, y } => point([*x, *y])?.into(),
            ShapeDoc::Segment { begin, end } => segment([*begin, *end])?.into(),
            ShapeDoc::Ray { origin, direction } => {
                Ray::try_new(point(*origin)?, Vector::new(direction[0], direction[1]))
                    .ok_or_else(|| anyhow!("ray direction must be non-zero and in range"))?
                    .into()
            }
            ShapeDoc::Line { first, second } => Line::try_new(point(*first)?, point(*second)?)
                .ok_or_else(|| anyhow!("line needs two distinct points"))?
                .into(),
            ShapeDoc::Circle { center, radius } => Circle::try_new(point(*center)?, *radius)
                .ok_or_else(|| anyhow!("circle radius must be non-negative, got {radius}"))?
                .into(),
            ShapeDoc::Polygon { vertices } => {
                let pts = vertices.iter().map(|v| point(*v)).collect::<Result<Vec<_>>>()?;
                Polygon::try_new(pts)
                    .ok_or_else(|| anyhow!("polygon needs at least one vertex"))?
                    .into()
            }
        };
        Ok(shape)
    }
}

/// Batch query document for `run`.
#[derive(Clone, Debug, Deserialize)]
pub struct QueryDoc {
    pub shapes: Vec<ShapeDoc>,
    #[serde(default)]
    pub points: Vec<Xy>,
    #[serde(default)]
    pub segments: Vec<[Xy; 2]>,
}

/// Per-shape answers, in the order of the query's points and segments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShapeReport {
    pub rendering: String,
    pub contains: Vec<bool>,
    pub crosses: Vec<bool>,
}

pub fn point(xy: Xy) -> Result<Point> {
    let p = Point::new(xy[0], xy[1]);
    if !p.pos.within_bounds() {
        bail!("coordinate {p} exceeds ±{}", planar::MAX_COORD);
    }
    Ok(p)
}

pub fn segment([a, b]: [Xy; 2]) -> Result<Segment> {
    Ok(Segment::new(point(a)?, point(b)?))
}

/// Shape from inline JSON, or from a file when prefixed with `@`.
pub fn read_shape(arg: &str) -> Result<AnyShape> {
    let text = match arg.strip_prefix('@') {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading shape file {path}"))?
        }
        None => arg.to_string(),
    };
    let doc: ShapeDoc = serde_json::from_str(&text).context("parsing shape JSON")?;
    doc.build()
}

/// `"x,y"` → `[x, y]`.
pub fn parse_xy(s: &str) -> Result<Xy> {
    let nums = parse_ints(s)?;
    match nums.as_slice() {
        [x, y] => Ok([*x, *y]),
        _ => bail!("expected `x,y`, got `{s}`"),
    }
}

/// `"x1,y1,x2,y2"` → `[[x1, y1], [x2, y2]]`.
pub fn parse_segment(s: &str) -> Result<[Xy; 2]> {
    let nums = parse_ints(s)?;
    match nums.as_slice() {
        [x1, y1, x2, y2] => Ok([[*x1, *y1], [*x2, *y2]]),
        _ => bail!("expected `x1,y1,x2,y2`, got `{s}`"),
    }
}

fn parse_ints(s: &str) -> Result<Vec<i32>> {
    s.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i32>()
                .with_context(|| format!("invalid integer `{part}`"))
        })
        .collect()
}
