//! Behavior of the public geometry API on the reference scenarios.

use canvas_geom::{
    GeomError, IntersectionKind, Point, Segment, intersect, make_circle, to_device_space,
    to_drawing_space,
};

const TOLERANCE: f64 = 1e-9;

fn unit_circle() -> canvas_geom::Circle {
    make_circle(Point::new(0.0, 0.0), Point::new(1.0, 0.0))
}

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
    Segment::new(Point::new(x0, y0), Point::new(x1, y1)).unwrap()
}

fn assert_close(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < TOLERANCE && (actual.y - expected.y).abs() < TOLERANCE,
        "expected {} got {}",
        expected,
        actual
    );
}

/// Sort by x then y so point sets can be compared regardless of order
fn sorted(points: &[Point]) -> Vec<Point> {
    let mut v = points.to_vec();
    v.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    v
}

#[test]
fn device_round_trip() {
    let (w, h) = (700.0, 500.0);
    for ix in 0..=14 {
        for iy in 0..=10 {
            let p = Point::new(ix as f64 * 50.0 + 0.3, iy as f64 * 50.0 - 0.7);
            let back = to_device_space(to_drawing_space(p, w, h), w, h);
            assert_close(back, p);
        }
    }
}

#[test]
fn far_segment_on_a_line_through_the_center_keeps_nothing() {
    // y = x cuts the circle; both cut points lie far from the drawn segment
    let result = intersect(&unit_circle(), &seg(5.0, 5.0, 6.0, 6.0));
    assert_eq!(result.kind(), IntersectionKind::Secant);
    assert!(result.is_empty());
}

#[test]
fn far_line_misses() {
    let result = intersect(&unit_circle(), &seg(5.0, 5.0, 6.0, 7.0));
    assert_eq!(result.kind(), IntersectionKind::None);
    assert!(result.is_empty());
}

#[test]
fn kept_points_stay_inside_the_segment_extent() {
    let s = seg(1.0 + 5e-7, 0.0, 2.0, 0.0);
    let result = intersect(&unit_circle(), &s);
    assert_eq!(result.kind(), IntersectionKind::Secant);
    assert_eq!(result.len(), 1);
    for p in result.points() {
        assert!(s.bbox().contains(*p, 0.0), "{} outside the segment", p);
        assert!((p.distance(Point::new(0.0, 0.0)) - 1.0).abs() <= canvas_geom::EPSILON);
    }
}

#[test]
fn horizontal_tangent() {
    let result = intersect(&unit_circle(), &seg(-2.0, 1.0, 2.0, 1.0));
    assert_eq!(result.kind(), IntersectionKind::Tangent);
    assert_eq!(result.len(), 1);
    assert_close(result.points()[0], Point::new(0.0, 1.0));
}

#[test]
fn secant_keeps_both_points() {
    let result = intersect(&unit_circle(), &seg(-2.0, 0.0, 2.0, 0.0));
    assert_eq!(result.kind(), IntersectionKind::Secant);
    let points = sorted(result.points());
    assert_eq!(points.len(), 2);
    assert_close(points[0], Point::new(-1.0, 0.0));
    assert_close(points[1], Point::new(1.0, 0.0));
}

#[test]
fn secant_clipped_to_one_point() {
    let result = intersect(&unit_circle(), &seg(0.0, 0.0, 2.0, 0.0));
    assert_eq!(result.kind(), IntersectionKind::Secant);
    assert_eq!(result.len(), 1);
    assert_close(result.points()[0], Point::new(1.0, 0.0));
}

#[test]
fn coincident_endpoints_are_rejected() {
    let p = Point::new(3.0, 3.0);
    assert_eq!(
        Segment::new(p, p),
        Err(GeomError::DegenerateSegment { point: p })
    );
}

#[test]
fn swapping_endpoints_keeps_the_point_set() {
    let circle = make_circle(Point::new(0.1, -0.2), Point::new(0.6, 0.1));
    let segments = [
        seg(-2.0, 0.0, 2.0, 0.0),
        seg(0.0, 0.0, 2.0, 0.0),
        seg(-0.9, -0.9, 0.8, 0.7),
        seg(0.1, -2.0, 0.1, 0.0),
        seg(-3.0, 2.0, 3.0, 2.5),
    ];
    for s in segments {
        let forward = intersect(&circle, &s);
        let backward = intersect(&circle, &s.reversed());
        assert_eq!(forward.kind(), backward.kind());
        let (f, b) = (sorted(forward.points()), sorted(backward.points()));
        assert_eq!(f.len(), b.len(), "segment {}", s);
        for (p, q) in f.iter().zip(&b) {
            assert_close(*p, *q);
        }
    }
}

#[test]
fn point_count_never_exceeds_kind() {
    let circle = unit_circle();
    for i in 0..40 {
        let y = -1.5 + i as f64 * 0.075;
        for s in [seg(-2.0, y, 2.0, y), seg(0.0, y, 2.0, y + 0.3), seg(y, -2.0, y, 0.5)] {
            let result = intersect(&circle, &s);
            assert!(result.len() <= result.kind().max_points());
            for p in result.points() {
                assert!(s.bbox().contains(*p, 0.0));
            }
        }
    }
}

#[test]
fn classification_is_deterministic() {
    let circle = make_circle(Point::new(0.123, 0.456), Point::new(0.789, 0.012));
    let s = seg(-0.7, 0.9, 0.95, -0.33);
    assert_eq!(intersect(&circle, &s), intersect(&circle, &s));
}
