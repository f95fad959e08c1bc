//! Curated call surface for the CLI and experiments.
//!
//! One function per workflow step: load or sample a point set, then build a hull
//! with a named algorithm.

use std::path::Path;

pub use crate::geom::{
    bounds, format_points, parse_points, read_points, write_points, Bounds, Point, PointFileError,
    PointSet, SampleCfg, SampleError,
};
pub use crate::hull::{
    validate, Algorithm, HullError, HullObserver, HullResult, NoopObserver, Phase, StepEvent,
};

/// Load a point file into a deduplicated set.
pub fn load_point_set<P: AsRef<Path>>(path: P) -> Result<PointSet, PointFileError> {
    PointSet::from_file(path)
}

/// Draw a seeded sample into a set.
pub fn sample_point_set(cfg: &SampleCfg) -> Result<PointSet, SampleError> {
    Ok(PointSet::from_coords(cfg.draw()?))
}

/// Build the hull of `points` with `algo`, reporting steps to `observer`.
pub fn build_hull(
    algo: Algorithm,
    points: &PointSet,
    observer: &mut dyn HullObserver,
) -> Result<HullResult, HullError> {
    algo.builder().build_observed(points, observer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_then_build_with_each_algorithm() {
        let set = sample_point_set(&SampleCfg::default()).unwrap();
        assert_eq!(set.len(), 10);
        let scan = build_hull(Algorithm::Scan, &set, &mut NoopObserver).unwrap();
        let sweep = build_hull(Algorithm::Sweep, &set, &mut NoopObserver).unwrap();
        assert_eq!(scan.vertex_set(&set), sweep.vertex_set(&set));
    }

    #[test]
    fn load_reports_missing_file() {
        assert!(matches!(
            load_point_set("/no/such/points.txt"),
            Err(PointFileError::Io { .. })
        ));
    }
}
