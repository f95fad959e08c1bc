use super::*;

#[test]
fn point_set_dedups_in_first_occurrence_order() {
    let set = PointSet::from_coords([(0, 0), (0, 0), (1, 1), (2, 0), (1, 1)]);
    assert_eq!(set.len(), 3);
    assert_eq!(
        set.points(),
        &[Point::new(0, 0), Point::new(1, 1), Point::new(2, 0)]
    );
    assert_eq!(set.find(Point::new(2, 0)), Some(PointId(2)));
    assert_eq!(set.find(Point::new(9, 9)), None);
    assert_eq!(set.ids().count(), 3);
}

#[test]
fn segment_caches_derived_quantities() {
    let set = PointSet::from_coords([(1, 2), (4, 6), (1, -3)]);
    let s = Segment::new(&set, PointId(0), PointId(1));
    assert_eq!(s.vector(), vector_between(set[PointId(0)], set[PointId(1)]));
    assert_eq!((s.vector().x, s.vector().y), (3, 4));
    assert!((s.magnitude() - 5.0).abs() < 1e-12);
    assert!((s.slope().value() - 4.0 / 3.0).abs() < 1e-12);
    assert_eq!(s.magnitude_squared(), 25);

    let down = Segment::new(&set, PointId(0), PointId(2));
    assert!(down.slope().is_vertical());
    assert_eq!(down.slope().value(), -VERTICAL_SENTINEL);
    let up = down.reversed();
    assert_eq!(up.start(), PointId(2));
    assert_eq!(up.end(), PointId(0));
    assert_eq!(up.slope().value(), VERTICAL_SENTINEL);
    assert!((up.magnitude() - magnitude(set[PointId(2)], set[PointId(0)])).abs() < 1e-12);
}

#[test]
fn angle_between_segments_uses_shifted_range() {
    let set = PointSet::from_coords([(0, 0), (1, 0), (0, 1), (-1, -1)]);
    let east = Segment::new(&set, PointId(0), PointId(1));
    let north = Segment::new(&set, PointId(0), PointId(2));
    let south_west = Segment::new(&set, PointId(0), PointId(3));
    assert!((east.angle_to(&north) - 270.0).abs() < 1e-9);
    assert!((north.angle_to(&east) - 90.0).abs() < 1e-9);
    assert!((east.angle_to(&south_west) - 45.0).abs() < 1e-9);
    assert!((east.angle_to(&east) - 180.0).abs() < 1e-9);
}

#[test]
fn vertical_pair_sorts_consistently() {
    // Two points share x with the origin: one above, one below.
    let set = PointSet::from_coords([(0, 0), (0, 5), (0, -5), (3, 1), (3, -1)]);
    let mut segs = fan(&set, PointId(0), |_, _| true);
    sort_by_slope(&mut segs);
    let ends: Vec<Point> = segs.iter().map(|s| set[s.end()]).collect();
    assert_eq!(
        ends,
        vec![
            Point::new(0, 5),
            Point::new(3, 1),
            Point::new(3, -1),
            Point::new(0, -5)
        ]
    );
    // Remapping the upward vertical sends it to the bottom of the order.
    let best = max_slope_by(&segs, |s| s.slope().downward()).unwrap();
    assert_eq!(set[best.end()], Point::new(3, 1));
}

#[test]
fn rotation_sort_breaks_ties_by_length() {
    let set = PointSet::from_coords([(0, 0), (2, 2), (1, 1), (3, 0), (0, -2)]);
    let reference = Segment::new(&set, PointId(0), PointId(1)).vector();
    let mut segs = fan(&set, PointId(0), |_, _| true);
    sort_by_rotation(reference, &mut segs);
    let ends: Vec<Point> = segs.iter().map(|s| set[s.end()]).collect();
    assert_eq!(
        ends,
        vec![
            Point::new(2, 2),
            Point::new(1, 1),
            Point::new(3, 0),
            Point::new(0, -2)
        ]
    );
    assert!(same_direction(segs[0].vector(), segs[1].vector()));
}

#[test]
fn orientation_sign() {
    let (a, b) = (Point::new(0, 0), Point::new(4, 0));
    assert!(orientation(a, b, Point::new(1, 1)) > 0);
    assert!(orientation(a, b, Point::new(1, -1)) < 0);
    assert_eq!(orientation(a, b, Point::new(9, 0)), 0);
}
