//! Text lines for the on-screen overlay.

use std::fmt;

use crate::geometry::{Circle, IntersectionResult, Segment};
use crate::types::Point;

/// Two decimals; `-0.00` prints as `0.00`.
fn fixed2(v: f64) -> String {
    let s = format!("{:.2}", v);
    match s.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => s,
    }
}

fn pair(p: Point) -> String {
    format!("({}, {})", fixed2(p.x), fixed2(p.y))
}

pub fn circle_summary(circle: &Circle) -> String {
    format!(
        "Circle center: {}, radius: {}",
        pair(circle.center()),
        fixed2(circle.radius())
    )
}

pub fn segment_summary(segment: &Segment) -> String {
    format!(
        "Line Segment: {} ~ {}",
        pair(segment.start()),
        pair(segment.end())
    )
}

pub fn intersection_summary(result: &IntersectionResult) -> String {
    if result.is_empty() {
        return "No intersection points".to_string();
    }
    let mut text = format!("Intersection Points: {}", result.len());
    for (i, p) in result.points().iter().enumerate() {
        text.push_str(&format!(" Point {}: {}", i + 1, pair(*p)));
    }
    text
}

/// Overlay lines, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub lines: Vec<String>,
}

impl Overlay {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
