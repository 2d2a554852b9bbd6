use std::fmt;

use rand::Rng;

use super::cast::{self, CastCfg};
use super::{Point, Ray, Segment, Shape};
use crate::vector::Vector;

/// Implicitly closed vertex loop (edge from the last vertex back to the first).
///
/// Self-intersecting loops are accepted; containment then follows the
/// even-odd rule of the ray cast.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Pre: at least one vertex.
    pub fn new(vertices: Vec<Point>) -> Self {
        debug_assert!(!vertices.is_empty(), "Polygon needs at least one vertex");
        Self { vertices }
    }

    /// `None` for an empty vertex list or out-of-range coordinates.
    pub fn try_new(vertices: Vec<Point>) -> Option<Self> {
        if vertices.is_empty() || vertices.iter().any(|v| !v.pos.within_bounds()) {
            return None;
        }
        Some(Self::new(vertices))
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Edges in order, including the closing edge. A single vertex yields one
    /// zero-length edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Segment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Containment with an explicit direction source (boundary-inclusive).
    ///
    /// Boundary hits return immediately; otherwise the parity of edges crossed
    /// by a ray that avoids every vertex decides.
    pub fn contains_point_with<R: Rng + ?Sized>(&self, p: &Point, cfg: CastCfg, rng: &mut R) -> bool {
        if self.edges().any(|e| e.contains_point(p)) {
            return true;
        }
        let ray = self.vertex_free_ray(p, cfg, rng);
        let hits = self.edges().filter(|e| ray.crosses_segment(e)).count();
        hits % 2 == 1
    }

    /// Ray from `p` passing through no vertex. Pre: `p` is not a vertex.
    fn vertex_free_ray<R: Rng + ?Sized>(&self, p: &Point, cfg: CastCfg, rng: &mut R) -> Ray {
        let is_free = |ray: &Ray| !self.vertices.iter().any(|v| ray.contains_point(v));
        for _ in 0..cfg.max_random_attempts {
            let ray = Ray::new(*p, cast::random_direction(rng, cfg));
            if is_free(&ray) {
                return ray;
            }
        }
        tracing::debug!(
            attempts = cfg.max_random_attempts,
            vertices = self.vertices.len(),
            "random ray directions exhausted, scanning fallback directions"
        );
        let fallback = cast::fallback_directions(self.vertices.len())
            .map(|dir| Ray::new(*p, dir))
            .find(is_free);
        // n vertices block at most n of the n + 1 fallback directions.
        fallback.unwrap_or_else(|| Ray::new(*p, Vector::new(1, 1)))
    }
}

impl Shape for Polygon {
    fn translate(&mut self, shift: Vector) -> &mut Self {
        for v in &mut self.vertices {
            v.translate(shift);
        }
        self
    }

    /// Deterministic: the ray directions come from an RNG seeded by `p`.
    fn contains_point(&self, p: &Point) -> bool {
        let mut rng = cast::query_rng(p, self.vertices.len() as u64);
        self.contains_point_with(p, CastCfg::default(), &mut rng)
    }

    /// Any edge, the closing edge included, crosses `s`.
    fn crosses_segment(&self, s: &Segment) -> bool {
        self.edges().any(|e| e.crosses_segment(s))
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon(")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}
