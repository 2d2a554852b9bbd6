//! Direction sources for point-in-polygon ray casting.
//!
//! Model
//! - Random phase: up to `max_random_attempts` directions with components in
//!   `1..=max_component`, drawn from a caller-supplied RNG.
//! - Fallback phase: directions `(1, k)` for `k = 1..=n+1`. They are pairwise
//!   non-parallel, so `n` vertices can block at most `n` of them and the scan
//!   always finds a free ray.
//! - Determinism: `query_rng` derives a `StdRng` from the query point, so the
//!   plain `contains_point` is reproducible without any ambient RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Point;
use crate::vector::{Vector, MAX_COORD};

/// Ray-casting configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastCfg {
    /// Random directions tried before switching to the fallback scan.
    pub max_random_attempts: usize,
    /// Upper bound for each random direction component (lower bound is 1).
    /// Clamped to `1..=MAX_COORD` when drawing.
    pub max_component: i32,
}

impl Default for CastCfg {
    fn default() -> Self {
        Self {
            max_random_attempts: 64,
            max_component: 80,
        }
    }
}

/// SplitMix64 finalizer.
#[inline]
fn mix(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// RNG seeded from the query point and a caller salt.
pub fn query_rng(p: &Point, salt: u64) -> StdRng {
    let coords = (u64::from(p.x() as u32) << 32) | u64::from(p.y() as u32);
    let k = mix(coords ^ mix(salt.wrapping_add(0x9e3779b97f4a7c15)));
    StdRng::seed_from_u64(k)
}

/// One random direction with both components in `1..=cfg.max_component`,
/// the bound clamped to `1..=MAX_COORD`.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R, cfg: CastCfg) -> Vector {
    let hi = cfg.max_component.clamp(1, MAX_COORD);
    Vector::new(rng.gen_range(1..=hi), rng.gen_range(1..=hi))
}

/// `n + 1` pairwise non-parallel directions `(1, k)`.
pub fn fallback_directions(vertex_count: usize) -> impl Iterator<Item = Vector> {
    let last = i32::try_from(vertex_count).map_or(i32::MAX, |n| n.saturating_add(1));
    (1..=last).map(|k| Vector::new(1, k))
}
