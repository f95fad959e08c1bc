use nalgebra::Vector2;
use std::cmp::Ordering;
use std::collections::HashSet;

use super::types::{Bounds, Point, PointId, PointSet, Segment, Slope};

#[inline]
pub(crate) fn cross(a: Vector2<i64>, b: Vector2<i64>) -> i128 {
    i128::from(a.x) * i128::from(b.y) - i128::from(a.y) * i128::from(b.x)
}

#[inline]
pub(crate) fn dot(a: Vector2<i64>, b: Vector2<i64>) -> i128 {
    i128::from(a.x) * i128::from(b.x) + i128::from(a.y) * i128::from(b.y)
}

#[inline]
pub(crate) fn norm_squared(v: Vector2<i64>) -> i128 {
    dot(v, v)
}

#[inline]
pub(crate) fn magnitude_of(v: Vector2<i64>) -> f64 {
    (v.x as f64).hypot(v.y as f64)
}

/// Displacement `b − a`.
#[inline]
pub fn vector_between(a: Point, b: Point) -> Vector2<i64> {
    b.to_vector() - a.to_vector()
}

/// Slope of the segment `a → b` (vertical segments get the `Slope::Vertical` tag).
#[inline]
pub fn slope(a: Point, b: Point) -> Slope {
    Slope::of(vector_between(a, b))
}

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn magnitude(a: Point, b: Point) -> f64 {
    magnitude_of(vector_between(a, b))
}

/// Twice the signed area of triangle `abc`; positive when `a → b → c` turns counter-clockwise.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> i128 {
    cross(vector_between(a, b), vector_between(a, c))
}

/// Rotation in degrees that carries direction `from` onto direction `to`, shifted into (0, 360].
///
/// 180 means same direction; above 180 is counter-clockwise, below is clockwise.
pub fn signed_angle(from: Vector2<i64>, to: Vector2<i64>) -> f64 {
    let c = cross(from, to) as f64;
    let d = dot(from, to) as f64;
    c.atan2(d).to_degrees() + 180.0
}

/// Which half-turn `v` falls in, measured from `reference`:
/// `1` for rotations in (0°, 180°], `0` for the same direction, `-1` for (−180°, 0°).
#[inline]
fn half_turn(reference: Vector2<i64>, v: Vector2<i64>) -> i8 {
    let c = cross(reference, v);
    if c > 0 || (c == 0 && dot(reference, v) < 0) {
        1
    } else if c == 0 {
        0
    } else {
        -1
    }
}

/// True if `a` and `b` point the same way (parallel, not opposite).
#[inline]
pub fn same_direction(a: Vector2<i64>, b: Vector2<i64>) -> bool {
    cross(a, b) == 0 && dot(a, b) > 0
}

/// Exact comparison of the rotations from `reference` onto `a` and onto `b`.
///
/// Agrees with comparing `signed_angle(reference, a)` and `signed_angle(reference, b)`
/// without rounding.
pub fn compare_rotation(reference: Vector2<i64>, a: Vector2<i64>, b: Vector2<i64>) -> Ordering {
    let (ha, hb) = (half_turn(reference, a), half_turn(reference, b));
    if ha != hb {
        return ha.cmp(&hb);
    }
    if ha == 0 {
        return Ordering::Equal;
    }
    // Same open half-turn: `b` lies further counter-clockwise iff a × b > 0.
    0.cmp(&cross(a, b))
}

/// Convexity test at the shared vertex `B` of `A → B` and `B → C`.
///
/// True when the rotation from `B → C` onto `B → A` exceeds 180°, i.e. the path
/// turns counter-clockwise at `B` or continues straight through it.
pub fn is_left_turn(ab: &Segment, bc: &Segment) -> bool {
    half_turn(bc.vector(), -ab.vector()) > 0
}

/// Extent of `points` in one pass. `None` for empty input.
pub fn bounds(points: &[Point]) -> Option<Bounds> {
    let (first, rest) = points.split_first()?;
    let mut b = Bounds {
        min_x: first.x,
        max_x: first.x,
        min_y: first.y,
        max_y: first.y,
    };
    for p in rest {
        b.min_x = b.min_x.min(p.x);
        b.max_x = b.max_x.max(p.x);
        b.min_y = b.min_y.min(p.y);
        b.max_y = b.max_y.max(p.y);
    }
    Some(b)
}

/// Drop repeated coordinates, keeping first occurrences in order.
pub fn deduplicate<I, P>(raw: I) -> Vec<Point>
where
    I: IntoIterator<Item = P>,
    P: Into<Point>,
{
    let mut seen: HashSet<Point> = HashSet::new();
    raw.into_iter()
        .map(Into::<Point>::into)
        .filter(|p| seen.insert(*p))
        .collect()
}

/// Leftmost point; ties go to the highest.
pub fn leftmost(set: &PointSet) -> Option<PointId> {
    set.iter()
        .min_by(|(_, a), (_, b)| a.x.cmp(&b.x).then(b.y.cmp(&a.y)))
        .map(|(id, _)| id)
}

/// Rightmost point; ties go to the lowest.
pub fn rightmost(set: &PointSet) -> Option<PointId> {
    set.iter()
        .max_by(|(_, a), (_, b)| a.x.cmp(&b.x).then(b.y.cmp(&a.y)))
        .map(|(id, _)| id)
}

/// Segments from `origin` to every other point accepted by `keep`.
pub fn fan<F>(set: &PointSet, origin: PointId, mut keep: F) -> Vec<Segment>
where
    F: FnMut(PointId, Point) -> bool,
{
    set.iter()
        .filter(|&(id, p)| id != origin && keep(id, p))
        .map(|(id, _)| Segment::new(set, origin, id))
        .collect()
}

/// Ordering key shared by slope sorting and extremal selection: slope, then length.
#[inline]
fn slope_then_length(a: &Segment, b: &Segment) -> Ordering {
    a.slope()
        .cmp(&b.slope())
        .then_with(|| a.magnitude_squared().cmp(&b.magnitude_squared()))
}

/// Sort by descending slope; co-linear ties put the longer segment first.
pub fn sort_by_slope(segments: &mut [Segment]) {
    segments.sort_by(|a, b| slope_then_length(b, a));
}

/// Sort by descending rotation from `reference`; co-linear ties put the longer segment first.
pub fn sort_by_rotation(reference: Vector2<i64>, segments: &mut [Segment]) {
    segments.sort_by(|a, b| {
        compare_rotation(reference, b.vector(), a.vector())
            .then_with(|| b.magnitude_squared().cmp(&a.magnitude_squared()))
    });
}

/// Steepest segment under `key`; co-linear ties go to the longer one.
pub fn max_slope_by<F>(segments: &[Segment], key: F) -> Option<&Segment>
where
    F: Fn(&Segment) -> Slope,
{
    segments.iter().max_by(|a, b| {
        key(a)
            .cmp(&key(b))
            .then_with(|| a.magnitude_squared().cmp(&b.magnitude_squared()))
    })
}

/// Steepest segment; co-linear ties go to the longer one.
#[inline]
pub fn max_slope(segments: &[Segment]) -> Option<&Segment> {
    max_slope_by(segments, Segment::slope)
}

/// True if every point of `set` lies on one line (or the set has fewer than 3 points).
pub fn all_collinear(set: &PointSet) -> bool {
    let pts = set.points();
    match pts {
        [a, b, rest @ ..] => rest.iter().all(|c| orientation(*a, *b, *c) == 0),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i64, y: i64) -> Vector2<i64> {
        Vector2::new(x, y)
    }

    #[test]
    fn signed_angle_range_and_direction() {
        assert!((signed_angle(v(1, 0), v(1, 0)) - 180.0).abs() < 1e-12);
        assert!((signed_angle(v(1, 0), v(0, 1)) - 270.0).abs() < 1e-12);
        assert!((signed_angle(v(1, 0), v(0, -1)) - 90.0).abs() < 1e-12);
        assert!((signed_angle(v(1, 0), v(-3, 0)) - 360.0).abs() < 1e-12);
    }

    #[test]
    fn compare_rotation_matches_float_angles() {
        let r = v(2, 1);
        let dirs = [v(1, 0), v(0, 1), v(-1, 0), v(0, -1), v(4, 2), v(-2, -1), v(3, -5)];
        for &a in &dirs {
            for &b in &dirs {
                let fa = signed_angle(r, a);
                let fb = signed_angle(r, b);
                let exact = compare_rotation(r, a, b);
                if (fa - fb).abs() > 1e-9 {
                    assert_eq!(exact, fa.partial_cmp(&fb).unwrap(), "{a:?} vs {b:?}");
                }
            }
        }
        // Parallel directions of different length compare equal.
        assert_eq!(compare_rotation(r, v(1, 1), v(3, 3)), Ordering::Equal);
    }

    #[test]
    fn left_turn_classification() {
        let set = PointSet::from_coords([(0, 0), (2, 0), (2, 2), (4, 0), (2, -2)]);
        let seg = |a: usize, b: usize| Segment::new(&set, PointId(a), PointId(b));
        // (0,0) → (2,0) → (2,2) turns counter-clockwise.
        assert!(is_left_turn(&seg(0, 1), &seg(1, 2)));
        // (0,0) → (2,0) → (2,-2) turns clockwise.
        assert!(!is_left_turn(&seg(0, 1), &seg(1, 4)));
        // Straight continuation counts as a left turn.
        assert!(is_left_turn(&seg(0, 1), &seg(1, 3)));
        // Doubling back does not.
        assert!(!is_left_turn(&seg(1, 3), &seg(3, 0)));
    }

    #[test]
    fn vertical_slopes_order_totally() {
        let up = slope(Point::new(0, 0), Point::new(0, 5));
        let down = slope(Point::new(0, 5), Point::new(0, 0));
        let steep = slope(Point::new(0, 0), Point::new(1, 1000));
        assert!(down < steep && steep < up);
        assert_eq!(up.value(), 999_999.0);
        assert_eq!(down.value(), -999_999.0);
        assert_eq!(up.downward(), down);
        // Equal ratios compare equal regardless of scale.
        assert_eq!(
            slope(Point::new(0, 0), Point::new(2, 1)),
            slope(Point::new(0, 0), Point::new(6, 3))
        );
    }

    #[test]
    fn colinear_ties_prefer_farther_point() {
        let set = PointSet::from_coords([(0, 0), (1, 1), (3, 3), (2, 0)]);
        let segs = fan(&set, PointId(0), |_, _| true);
        let best = max_slope(&segs).unwrap();
        assert_eq!(set[best.end()], Point::new(3, 3));

        let mut sorted = segs.clone();
        sort_by_slope(&mut sorted);
        let order: Vec<Point> = sorted.iter().map(|s| set[s.end()]).collect();
        assert_eq!(
            order,
            vec![Point::new(3, 3), Point::new(1, 1), Point::new(2, 0)]
        );
    }

    #[test]
    fn bounds_and_dedup() {
        assert!(bounds(&[]).is_none());
        let pts = deduplicate([(3, -1), (0, 4), (3, -1), (2, 2)]);
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[0], Point::new(3, -1));
        let b = bounds(&pts).unwrap();
        assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (0, 3, -1, 4));
    }

    #[test]
    fn extremal_points_tie_breaks() {
        let set = PointSet::from_coords([(0, 0), (0, 3), (5, 1), (5, -2), (2, 9)]);
        assert_eq!(set[leftmost(&set).unwrap()], Point::new(0, 3));
        assert_eq!(set[rightmost(&set).unwrap()], Point::new(5, -2));
    }

    #[test]
    fn collinearity_detects_diagonals() {
        assert!(all_collinear(&PointSet::from_coords([(0, 0), (1, 1), (5, 5)])));
        assert!(!all_collinear(&PointSet::from_coords([(0, 0), (1, 1), (5, 4)])));
    }
}
