//! Convex hulls of 2D integer point sets.
//!
//! Two constructions share one set of exact primitives:
//! - `hull::AngleScan`: angle-ordered scan with retraction of non-convex vertices.
//! - `hull::Sweep`: gift wrapping split into an upper and a lower pass.
//!
//! API Policy
//! - `geom` and `hull` are the stable entry points; `api` and `prelude` are
//!   convenience re-exports for callers (CLI, benches, examples).

pub mod api;
pub mod geom;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{
        bounds, random_point_set, Bounds, Point, PointId, PointSet, SampleCfg, Segment, Slope,
    };
    pub use crate::hull::{
        validate, Algorithm, AngleScan, HullBuilder, HullError, HullObserver, HullResult,
        NoopObserver, Phase, StepEvent, Sweep,
    };
}
