//! Result, error and observer types shared by the hull builders.

use std::collections::BTreeSet;
use std::fmt;

use crate::geom::{
    all_collinear, is_left_turn, orientation, Point, PointId, PointSet, Segment,
};

/// Construction phase reported to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Choosing the first hull edge out of the start point.
    Seed,
    /// Angle-ordered scan with retraction.
    Scan,
    /// Sweep pass from the leftmost to the rightmost point.
    Upper,
    /// Sweep pass back from the rightmost to the leftmost point.
    Lower,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Seed => "seed",
            Phase::Scan => "scan",
            Phase::Upper => "upper",
            Phase::Lower => "lower",
        };
        f.write_str(s)
    }
}

/// Errors surfaced before (or, for `NoProgress`, instead of) hull construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than three unique points.
    InsufficientPoints { unique: usize },
    /// Every point lies on one line.
    DegenerateInput,
    /// A step found no candidate. Not reachable for input that passed `validate`.
    NoProgress { phase: Phase },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints { unique } => write!(
                f,
                "convex hull needs at least 3 unique points, got {unique}"
            ),
            HullError::DegenerateInput => write!(f, "all points are collinear (zero-area hull)"),
            HullError::NoProgress { phase } => {
                write!(f, "hull construction stalled during the {phase} phase")
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Check the preconditions both builders rely on.
pub fn validate(points: &PointSet) -> Result<(), HullError> {
    if points.len() < 3 {
        return Err(HullError::InsufficientPoints {
            unique: points.len(),
        });
    }
    if all_collinear(points) {
        return Err(HullError::DegenerateInput);
    }
    Ok(())
}

/// One construction step, as seen by an observer.
#[derive(Clone, Debug, PartialEq)]
pub struct StepEvent {
    pub phase: Phase,
    /// Segments considered in this step (may be empty for retractions).
    pub candidates: Vec<Segment>,
    /// Edge appended to the hull in this step.
    pub chosen: Option<Segment>,
    /// Vertex removed from the hull in this step.
    pub retracted: Option<PointId>,
}

impl StepEvent {
    pub fn candidates(phase: Phase, candidates: Vec<Segment>) -> Self {
        Self {
            phase,
            candidates,
            chosen: None,
            retracted: None,
        }
    }
    pub fn chosen(phase: Phase, candidates: Vec<Segment>, chosen: Segment) -> Self {
        Self {
            phase,
            candidates,
            chosen: Some(chosen),
            retracted: None,
        }
    }
    pub fn retracted(phase: Phase, point: PointId) -> Self {
        Self {
            phase,
            candidates: Vec::new(),
            chosen: None,
            retracted: Some(point),
        }
    }
}

/// Passive listener for construction steps. Has no influence on the result.
pub trait HullObserver {
    fn on_step(&mut self, event: &StepEvent);
}

impl<F: FnMut(&StepEvent)> HullObserver for F {
    #[inline]
    fn on_step(&mut self, event: &StepEvent) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl HullObserver for NoopObserver {
    #[inline]
    fn on_step(&mut self, _event: &StepEvent) {}
}

/// Common interface of the hull construction algorithms.
pub trait HullBuilder {
    fn name(&self) -> &'static str;

    /// Build the hull, reporting each step to `observer`.
    fn build_observed(
        &self,
        points: &PointSet,
        observer: &mut dyn HullObserver,
    ) -> Result<HullResult, HullError>;

    fn build(&self, points: &PointSet) -> Result<HullResult, HullError> {
        self.build_observed(points, &mut NoopObserver)
    }
}

/// Ordered hull vertices and the edges joining them.
///
/// Invariants:
/// - `edges[i]` runs from `points[i]` to `points[(i + 1) % n]`; the closing edge is included.
/// - Vertices appear once, in boundary traversal order.
#[derive(Clone, Debug, PartialEq)]
pub struct HullResult {
    points: Vec<PointId>,
    edges: Vec<Segment>,
}

impl HullResult {
    #[inline]
    pub fn points(&self) -> &[PointId] {
        &self.points
    }
    #[inline]
    pub fn edges(&self) -> &[Segment] {
        &self.edges
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn vertices(&self, set: &PointSet) -> Vec<Point> {
        self.points.iter().map(|&id| set[id]).collect()
    }
    /// Vertex coordinates without order, for comparing results across builders.
    pub fn vertex_set(&self, set: &PointSet) -> BTreeSet<Point> {
        self.points.iter().map(|&id| set[id]).collect()
    }
    /// No left turn (including straight continuation) at any vertex, cyclically.
    pub fn is_convex(&self) -> bool {
        let n = self.edges.len();
        (0..n).all(|i| !is_left_turn(&self.edges[i], &self.edges[(i + 1) % n]))
    }
    /// True if `p` is inside the hull or on its boundary.
    pub fn encloses(&self, set: &PointSet, p: Point) -> bool {
        let mut sign = 0i128;
        for e in &self.edges {
            let o = orientation(set[e.start()], set[e.end()], p);
            if o == 0 {
                continue;
            }
            if sign == 0 {
                sign = o.signum();
            } else if o.signum() != sign {
                return false;
            }
        }
        true
    }
    /// Twice the enclosed area (shoelace formula), always non-negative.
    pub fn doubled_area(&self, set: &PointSet) -> i128 {
        let verts = self.vertices(set);
        let n = verts.len();
        let twice: i128 = (0..n)
            .map(|i| {
                let (p, q) = (verts[i], verts[(i + 1) % n]);
                i128::from(p.x) * i128::from(q.y) - i128::from(q.x) * i128::from(p.y)
            })
            .sum();
        twice.abs()
    }
}

/// In-progress hull: a vertex stack plus the edges between consecutive entries.
#[derive(Clone, Debug)]
pub(crate) struct Chain {
    points: Vec<PointId>,
    edges: Vec<Segment>,
}

impl Chain {
    pub(crate) fn new(start: PointId) -> Self {
        Self {
            points: vec![start],
            edges: Vec::new(),
        }
    }
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub(crate) fn first(&self) -> PointId {
        self.points[0]
    }
    #[inline]
    pub(crate) fn last(&self) -> PointId {
        self.points[self.points.len() - 1]
    }
    /// Point accepted just before the current last one.
    #[inline]
    pub(crate) fn previous(&self) -> Option<PointId> {
        self.points.len().checked_sub(2).map(|i| self.points[i])
    }
    #[inline]
    pub(crate) fn last_edge(&self) -> Option<&Segment> {
        self.edges.last()
    }
    /// Append `edge` (which must start at `last()`) and its end point.
    pub(crate) fn extend(&mut self, edge: Segment) {
        debug_assert_eq!(edge.start(), self.last());
        self.points.push(edge.end());
        self.edges.push(edge);
    }
    /// Pop the last vertex and the edge leading to it. Never pops the start point.
    pub(crate) fn retract(&mut self) -> Option<PointId> {
        if self.points.len() < 2 {
            return None;
        }
        self.edges.pop();
        self.points.pop()
    }
    /// Append the closing edge back to the start point and freeze the result.
    pub(crate) fn close(mut self, edge: Segment) -> HullResult {
        debug_assert_eq!(edge.end(), self.first());
        self.edges.push(edge);
        HullResult {
            points: self.points,
            edges: self.edges,
        }
    }
}
