//! Circle/segment and segment/segment intersection
//!
//! Both routines work on the infinite carrier line first and then clip the
//! candidate points to the segment, so a line can be classified as tangent
//! or secant even when none of its touching points survive clipping.

use std::fmt;

use crate::log::trace;
use crate::types::Point;

use super::defaults::EPSILON;
use super::shapes::{Circle, Segment};

/// How the segment's carrier line meets the circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntersectionKind {
    /// The line misses the circle
    None,
    /// The line touches the circle at one point
    Tangent,
    /// The line cuts the circle at two points
    Secant,
}

impl IntersectionKind {
    /// Most points a result of this kind can carry after clipping
    pub fn max_points(self) -> usize {
        match self {
            IntersectionKind::None => 0,
            IntersectionKind::Tangent => 1,
            IntersectionKind::Secant => 2,
        }
    }
}

impl fmt::Display for IntersectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntersectionKind::None => write!(f, "none"),
            IntersectionKind::Tangent => write!(f, "tangent"),
            IntersectionKind::Secant => write!(f, "secant"),
        }
    }
}

/// Classification plus the touching points that lie on the segment.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionResult {
    kind: IntersectionKind,
    points: Vec<Point>,
}

impl IntersectionResult {
    fn none() -> Self {
        IntersectionResult {
            kind: IntersectionKind::None,
            points: Vec::new(),
        }
    }

    pub fn kind(&self) -> IntersectionKind {
        self.kind
    }

    /// Points on both the circle and the segment, in candidate order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Intersect a circle with a segment.
///
/// The carrier line is put in implicit form and its distance to the center
/// decides the kind: farther than `r + EPSILON` misses, within `EPSILON` of
/// `r` is tangent, anything closer is secant. Candidate points are then kept
/// only if they fall inside the segment's bounding box grown by `EPSILON`,
/// and kept points are clamped back into the box itself.
pub fn intersect(circle: &Circle, segment: &Segment) -> IntersectionResult {
    let line = segment.line();
    let center = circle.center();
    let r = circle.radius();

    // never zero: Segment rejects coincident endpoints
    let norm_sq = line.norm_sq();
    let dist = line.distance(center);
    trace!(dist, r, "circle/segment distance");

    if dist > r + EPSILON {
        return IntersectionResult::none();
    }

    let bbox = segment.bbox();
    let foot = line.project(center);

    if (dist - r).abs() <= EPSILON {
        let points = if bbox.contains(foot, EPSILON) {
            vec![bbox.clamp(foot)]
        } else {
            Vec::new()
        };
        return IntersectionResult {
            kind: IntersectionKind::Tangent,
            points,
        };
    }

    let mult = ((r * r - dist * dist).max(0.0) / norm_sq).sqrt();
    let ax = line.b * mult;
    let ay = line.a * mult;
    let candidates = [
        Point::new(foot.x + ax, foot.y - ay),
        Point::new(foot.x - ax, foot.y + ay),
    ];

    IntersectionResult {
        kind: IntersectionKind::Secant,
        points: candidates
            .into_iter()
            .filter(|p| bbox.contains(*p, EPSILON))
            .map(|p| bbox.clamp(p))
            .collect(),
    }
}

/// How two segments meet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentCrossing {
    /// The carrier lines cross outside at least one segment
    Disjoint,
    /// The segments are parallel or collinear
    Parallel,
    /// The segments cross at this point
    Crossing(Point),
}

/// Intersect two segments.
///
/// Parallelism is judged on the sine of the angle between them, so the
/// outcome does not depend on segment length.
pub fn intersect_segments(first: &Segment, second: &Segment) -> SegmentCrossing {
    let d1 = first.delta();
    let d2 = second.delta();
    let cross = d1.perp_dot(d2);

    if (cross / (d1.length() * d2.length())).abs() < EPSILON {
        return SegmentCrossing::Parallel;
    }

    let d = second.start() - first.start();
    let t = d.perp_dot(d2) / cross;
    let u = d.perp_dot(d1) / cross;
    trace!(t, u, "segment crossing parameters");

    let on_segment = |s: f64| (-EPSILON..=1.0 + EPSILON).contains(&s);
    if on_segment(t) && on_segment(u) {
        SegmentCrossing::Crossing(first.start() + d1 * t)
    } else {
        SegmentCrossing::Disjoint
    }
}
