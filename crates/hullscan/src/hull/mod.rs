//! Convex hull builders over a `PointSet`.
//!
//! Purpose
//! - Two classical constructions behind one `HullBuilder` trait:
//!   `AngleScan` (angle-ordered scan with retraction) and `Sweep`
//!   (gift wrapping in an upper and a lower pass).
//! - Both report each construction step to an optional `HullObserver`
//!   (candidate segments, chosen edge, retracted vertex). Observers are passive.
//!
//! Conventions
//! - Input is validated once (`validate`) before any step runs: at least three
//!   unique points, not all collinear.
//! - Results are clockwise, start at the leftmost (then highest) point, contain
//!   no collinear middle vertices, and include the closing edge.
//!
//! Code cross-refs: `geom::{Segment, Slope, sort_by_rotation, max_slope_by}`.

mod scan;
mod sweep;
mod types;

use std::fmt;
use std::str::FromStr;

pub use scan::AngleScan;
pub use sweep::Sweep;
pub use types::{
    validate, HullBuilder, HullError, HullObserver, HullResult, NoopObserver, Phase, StepEvent,
};

/// Selector for the available builders (CLI flags, benches).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Scan,
    Sweep,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Scan, Algorithm::Sweep];

    pub fn builder(self) -> Box<dyn HullBuilder> {
        match self {
            Algorithm::Scan => Box::new(AngleScan),
            Algorithm::Sweep => Box::new(Sweep),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Scan => f.pad("scan"),
            Algorithm::Sweep => f.pad("sweep"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "scan" | "graham" | "angle-scan" => Ok(Algorithm::Scan),
            "sweep" | "jarvis" | "gift-wrap" => Ok(Algorithm::Sweep),
            other => Err(format!("unknown algorithm {other:?} (expected scan or sweep)")),
        }
    }
}
