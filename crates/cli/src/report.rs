//! Serializable hull reports and the step-logging observer.

use hullscan::api::{HullObserver, HullResult, Point, PointSet, StepEvent};
use serde::Serialize;

/// One hull edge as written to JSON.
#[derive(Debug, Serialize)]
pub struct EdgeRow {
    pub from: [i32; 2],
    pub to: [i32; 2],
    pub slope: f64,
    pub length: f64,
}

/// Full result of one `hull` run.
#[derive(Debug, Serialize)]
pub struct HullReport {
    pub algorithm: String,
    pub source: String,
    pub unique_points: usize,
    pub vertices: Vec<[i32; 2]>,
    pub edges: Vec<EdgeRow>,
    pub area: f64,
    pub steps: usize,
}

#[inline]
fn xy(p: Point) -> [i32; 2] {
    [p.x, p.y]
}

impl HullReport {
    pub fn new(
        algorithm: String,
        source: String,
        points: &PointSet,
        hull: &HullResult,
        steps: usize,
    ) -> Self {
        let edges = hull
            .edges()
            .iter()
            .map(|e| EdgeRow {
                from: xy(points[e.start()]),
                to: xy(points[e.end()]),
                slope: e.slope().value(),
                length: e.magnitude(),
            })
            .collect();
        Self {
            algorithm,
            source,
            unique_points: points.len(),
            vertices: hull.vertices(points).into_iter().map(xy).collect(),
            edges,
            area: hull.doubled_area(points) as f64 / 2.0,
            steps,
        }
    }
}

/// Observer that counts steps and, when `verbose`, logs each one.
pub struct StepLog<'a> {
    points: &'a PointSet,
    verbose: bool,
    pub steps: usize,
}

impl<'a> StepLog<'a> {
    pub fn new(points: &'a PointSet, verbose: bool) -> Self {
        Self {
            points,
            verbose,
            steps: 0,
        }
    }
}

impl HullObserver for StepLog<'_> {
    fn on_step(&mut self, event: &StepEvent) {
        self.steps += 1;
        if !self.verbose {
            return;
        }
        let phase = event.phase;
        if let Some(id) = event.retracted {
            tracing::info!(%phase, point = %self.points[id], "retract");
        } else if let Some(edge) = event.chosen {
            tracing::info!(
                %phase,
                candidates = event.candidates.len(),
                from = %self.points[edge.start()],
                to = %self.points[edge.end()],
                slope = edge.slope().value(),
                "edge"
            );
        } else {
            tracing::info!(%phase, candidates = event.candidates.len(), "candidates");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hullscan::api::{build_hull, Algorithm};

    #[test]
    fn report_lists_closed_boundary() {
        let points = PointSet::from_coords([(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]);
        let mut log = StepLog::new(&points, false);
        let hull = build_hull(Algorithm::Sweep, &points, &mut log).unwrap();
        let steps = log.steps;
        let report = HullReport::new("sweep".into(), "inline".into(), &points, &hull, steps);
        assert_eq!(report.vertices, vec![[0, 4], [4, 4], [4, 0], [0, 0]]);
        assert_eq!(report.edges.len(), 4);
        assert_eq!(report.edges[3].to, [0, 4]);
        assert!((report.area - 16.0).abs() < 1e-12);
        assert_eq!(report.steps, 4);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["unique_points"], 5);
        assert_eq!(json["edges"][1]["slope"], -999_999.0);
    }
}
