//! Exact 2D primitives for hull construction.
//!
//! Purpose
//! - Provide integer points held in an arena (`PointSet`, indexed by `PointId`),
//!   directed segments with cached derived quantities, and the ordering helpers
//!   both hull builders share (slope sort, rotation sort, extremal selection).
//!
//! Why this design
//! - Coordinates are `i32` and every orientation test runs in `i128`, so slope and
//!   angle ties (co-linear candidates) are detected exactly instead of by epsilon.
//! - Vertical slopes carry a tag rather than a magic number; `Slope::value` still
//!   reports the ±999999 sentinel for callers that want a plain number.
//!
//! Code cross-refs: `hull::{AngleScan, Sweep}`.

pub mod io;
pub mod rand;
mod types;
mod util;

pub use self::io::{format_points, parse_points, read_points, write_points, PointFileError};
pub use self::rand::{random_point_set, SampleCfg, SampleError};
pub use self::types::{Bounds, Point, PointId, PointSet, Segment, Slope, VERTICAL_SENTINEL};
pub use self::util::{
    all_collinear, bounds, compare_rotation, deduplicate, fan, is_left_turn, leftmost, magnitude,
    max_slope, max_slope_by, orientation, rightmost, same_direction, signed_angle, slope,
    sort_by_rotation, sort_by_slope, vector_between,
};

#[cfg(test)]
mod tests;
