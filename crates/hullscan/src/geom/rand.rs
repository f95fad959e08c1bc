//! Seeded random point sets on the integer lattice.
//!
//! Purpose
//! - Provide reproducible inputs for hull construction, benches and the CLI.
//!   A `(bounds, count, seed)` triple always yields the same point sequence.
//!
//! Model
//! - Draw coordinates uniformly from the open box (one unit inside every side of
//!   `bounds`) and reject repeats until `count` unique points are collected.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt;

use super::types::{Bounds, Point};

/// Errors surfaced by the sampler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sample params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCfg {
    /// Outer box; samples land strictly inside it.
    pub bounds: Bounds,
    pub count: usize,
    pub seed: u64,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            bounds: Bounds {
                min_x: 0,
                max_x: 20,
                min_y: 0,
                max_y: 20,
            },
            count: 10,
            seed: 3,
        }
    }
}

impl SampleCfg {
    #[inline]
    pub fn draw(&self) -> Result<Vec<Point>, SampleError> {
        random_point_set(self.bounds, self.count, self.seed)
    }
}

/// Draw `count` unique lattice points strictly inside `bounds`.
///
/// Fails if the open box holds fewer than `count` lattice points, since rejection
/// sampling would never finish.
pub fn random_point_set(bounds: Bounds, count: usize, seed: u64) -> Result<Vec<Point>, SampleError> {
    let cells = bounds.interior_cells();
    if (count as u64) > cells {
        return Err(SampleError::invalid(format!(
            "{count} unique points requested but {bounds} has only {cells} interior lattice points"
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen: HashSet<Point> = HashSet::with_capacity(count);
    let mut out = Vec::with_capacity(count);
    while out.len() < count {
        let p = Point::new(
            rng.gen_range(bounds.min_x + 1..=bounds.max_x - 1),
            rng.gen_range(bounds.min_y + 1..=bounds.max_y - 1),
        );
        if seen.insert(p) {
            out.push(p);
        }
    }
    Ok(out)
}
