//! Basic 2D types for hull construction.
//!
//! - `Point`: immutable integer coordinate pair.
//! - `PointSet`: owned arena of unique points; `PointId` indexes into it.
//! - `Segment`: directed edge between two arena points with cached vector, slope, magnitude.
//! - `Slope`: exact, totally ordered slope with a vertical tag.
//! - `Bounds`: axis-aligned extent of a point collection.

use nalgebra::Vector2;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Index;

use super::util::{deduplicate, magnitude_of, norm_squared, signed_angle, vector_between};

/// Numeric value reported for vertical slopes by `Slope::value`.
pub const VERTICAL_SENTINEL: f64 = 999_999.0;

/// Integer point in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn to_vector(self) -> Vector2<i64> {
        Vector2::new(i64::from(self.x), i64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Index of a point inside its owning `PointSet`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Arena of unique points. Ids are positions in first-occurrence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Build a set from raw coordinates; repeated coordinates collapse to the first occurrence.
    pub fn from_coords<I, P>(coords: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self {
            points: deduplicate(coords),
        }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn ids(&self) -> impl Iterator<Item = PointId> + '_ {
        (0..self.points.len()).map(PointId)
    }
    pub fn iter(&self) -> impl Iterator<Item = (PointId, Point)> + '_ {
        self.points.iter().enumerate().map(|(i, p)| (PointId(i), *p))
    }
    pub fn find(&self, p: Point) -> Option<PointId> {
        self.points.iter().position(|q| *q == p).map(PointId)
    }
}

impl Index<PointId> for PointSet {
    type Output = Point;
    #[inline]
    fn index(&self, id: PointId) -> &Point {
        &self.points[id.0]
    }
}

/// Exact slope of a displacement.
///
/// Ordering: downward vertical < every finite slope < upward vertical.
/// `Finite` keeps `run > 0`; zero displacement is treated as downward vertical.
#[derive(Clone, Copy, Debug)]
pub enum Slope {
    Finite { rise: i64, run: i64 },
    Vertical { up: bool },
}

impl Slope {
    pub fn of(v: Vector2<i64>) -> Self {
        match v.x.cmp(&0) {
            Ordering::Equal => Slope::Vertical { up: v.y > 0 },
            Ordering::Greater => Slope::Finite {
                rise: v.y,
                run: v.x,
            },
            Ordering::Less => Slope::Finite {
                rise: -v.y,
                run: -v.x,
            },
        }
    }
    /// Δy/Δx, or ±`VERTICAL_SENTINEL` for vertical slopes.
    pub fn value(self) -> f64 {
        match self {
            Slope::Finite { rise, run } => rise as f64 / run as f64,
            Slope::Vertical { up: true } => VERTICAL_SENTINEL,
            Slope::Vertical { up: false } => -VERTICAL_SENTINEL,
        }
    }
    /// Same slope, but an upward vertical is ranked as a downward one.
    /// Used when sweeping right to left.
    #[inline]
    pub fn downward(self) -> Self {
        match self {
            Slope::Vertical { .. } => Slope::Vertical { up: false },
            s => s,
        }
    }
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Slope::Vertical { .. })
    }
    fn rank(self) -> i8 {
        match self {
            Slope::Vertical { up: false } => -1,
            Slope::Finite { .. } => 0,
            Slope::Vertical { up: true } => 1,
        }
    }
}

impl Ord for Slope {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (
                Slope::Finite { rise: r1, run: d1 },
                Slope::Finite { rise: r2, run: d2 },
            ) => (i128::from(r1) * i128::from(d2)).cmp(&(i128::from(r2) * i128::from(d1))),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}
impl PartialOrd for Slope {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Slope {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Slope {}

/// Directed edge between two points of a `PointSet`.
///
/// Endpoints are ids into the arena; vector, slope and magnitude are fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    start: PointId,
    end: PointId,
    vector: Vector2<i64>,
    slope: Slope,
    magnitude: f64,
}

impl Segment {
    pub fn new(set: &PointSet, start: PointId, end: PointId) -> Self {
        let vector = vector_between(set[start], set[end]);
        Self {
            start,
            end,
            vector,
            slope: Slope::of(vector),
            magnitude: magnitude_of(vector),
        }
    }
    #[inline]
    pub fn start(&self) -> PointId {
        self.start
    }
    #[inline]
    pub fn end(&self) -> PointId {
        self.end
    }
    #[inline]
    pub fn vector(&self) -> Vector2<i64> {
        self.vector
    }
    #[inline]
    pub fn slope(&self) -> Slope {
        self.slope
    }
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }
    /// Exact squared length, used for tie-breaks.
    #[inline]
    pub fn magnitude_squared(&self) -> i128 {
        norm_squared(self.vector)
    }
    /// Same edge traversed the other way.
    pub fn reversed(&self) -> Self {
        let vector = -self.vector;
        Self {
            start: self.end,
            end: self.start,
            vector,
            slope: Slope::of(vector),
            magnitude: self.magnitude,
        }
    }
    /// Rotation in degrees, in (0, 360], from this segment's direction onto `other`'s.
    #[inline]
    pub fn angle_to(&self, other: &Segment) -> f64 {
        signed_angle(self.vector, other.vector)
    }
    #[inline]
    pub fn is_left_turn_to(&self, next: &Segment) -> bool {
        super::util::is_left_turn(self, next)
    }
}

/// Axis-aligned extent `[min_x, max_x] × [min_y, max_y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {
    #[inline]
    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x)
    }
    #[inline]
    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y)
    }
    #[inline]
    pub fn has_area(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }
    /// Number of lattice points strictly inside (one unit off every side).
    pub fn interior_cells(&self) -> u64 {
        let w = (self.width() - 1).max(0) as u64;
        let h = (self.height() - 1).max(0) as u64;
        w.saturating_mul(h)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}
