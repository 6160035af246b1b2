//! Seeded point clouds (replay tokens).
//!
//! Purpose
//! - Reproducible inputs for benches, property checks and the CLI `sample`
//!   command. The same `(cfg, token)` always yields the same `PointSet`.
//!
//! Model
//! - `ReplayToken { seed, index }` is mixed into a single `StdRng`.
//! - Shapes: uniform square, uniform disk, integer lattice (exact arithmetic).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::PointSet;

/// Region the points are drawn from, centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CloudShape {
    Square { half_width: f64 },
    Disk { radius: f64 },
    /// Integer coordinates in `[-half_width, half_width]²`.
    Lattice { half_width: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CloudCfg {
    pub count: usize,
    pub shape: CloudShape,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: 100,
            shape: CloudShape::Square { half_width: 1.0 },
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points; ids run `0..count` in draw order.
pub fn draw_points(cfg: CloudCfg, tok: ReplayToken) -> PointSet {
    let mut rng = tok.to_std_rng();
    let mut ps = PointSet::new();
    for _ in 0..cfg.count {
        let (x, y) = match cfg.shape {
            CloudShape::Square { half_width } => {
                let h = half_width.abs();
                if h.is_finite() && h > 0.0 {
                    (rng.gen_range(-h..=h), rng.gen_range(-h..=h))
                } else {
                    (0.0, 0.0)
                }
            }
            CloudShape::Disk { radius } => {
                // sqrt for uniform area density
                let r = radius.abs() * rng.gen::<f64>().sqrt();
                let theta = rng.gen::<f64>() * std::f64::consts::TAU;
                (r * theta.cos(), r * theta.sin())
            }
            CloudShape::Lattice { half_width } => {
                let h = half_width.saturating_abs();
                (
                    rng.gen_range(-h..=h) as f64,
                    rng.gen_range(-h..=h) as f64,
                )
            }
        };
        ps.append(x, y);
    }
    ps
}
