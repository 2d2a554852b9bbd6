//! Query evaluation with CLI-controlled ray-cast settings.

use planar::shapes::cast::query_rng;
use planar::{AnyShape, CastCfg, Point, Segment, Shape};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::input::ShapeReport;

/// Evaluates queries; polygon containment honours `cfg` and an optional fixed seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    pub cfg: CastCfg,
    pub seed: Option<u64>,
}

impl Evaluator {
    pub fn contains(&self, shape: &AnyShape, p: &Point) -> bool {
        match shape {
            AnyShape::Polygon(poly) => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => query_rng(p, poly.vertices().len() as u64),
                };
                poly.contains_point_with(p, self.cfg, &mut rng)
            }
            other => other.contains_point(p),
        }
    }

    pub fn crosses(&self, shape: &AnyShape, s: &Segment) -> bool {
        shape.crosses_segment(s)
    }

    pub fn report(&self, shape: &AnyShape, points: &[Point], segments: &[Segment]) -> ShapeReport {
        ShapeReport {
            rendering: shape.to_string(),
            contains: points.iter().map(|p| self.contains(shape, p)).collect(),
            crosses: segments.iter().map(|s| self.crosses(shape, s)).collect(),
        }
    }
}
