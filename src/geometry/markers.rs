//! Vertex lists the drawing layer uploads as-is

use std::f64::consts::TAU;

use glam::DVec2;

use crate::types::Point;

use super::shapes::Circle;

/// Four corners of an axis-aligned square around each point.
///
/// Corners come in fan order: bottom-left, bottom-right, top-right, top-left.
/// Point `i` owns vertices `4*i .. 4*i + 4`.
pub fn points_to_box_vertices(points: &[Point], half_size: f64) -> Vec<Point> {
    let mut vertices = Vec::with_capacity(points.len() * 4);
    for p in points {
        vertices.extend([
            Point::new(p.x - half_size, p.y - half_size),
            Point::new(p.x + half_size, p.y - half_size),
            Point::new(p.x + half_size, p.y + half_size),
            Point::new(p.x - half_size, p.y + half_size),
        ]);
    }
    vertices
}

/// Half edge, in drawing space, of a marker `point_size` device pixels wide.
pub fn marker_half_size(point_size: f64, device_width: f64) -> f64 {
    point_size / device_width
}

/// `segments + 1` points around the circle; the last repeats the first.
pub fn circle_outline(circle: &Circle, segments: usize) -> Vec<Point> {
    let center = circle.center();
    let r = circle.radius();
    (0..=segments)
        .map(|i| {
            let theta = (i as f64 / segments.max(1) as f64) * TAU;
            center + DVec2::from_angle(theta) * r
        })
        .collect()
}

/// Flatten points into interleaved `x, y` pairs for a vertex buffer.
pub fn flatten_f32(points: &[Point]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32])
        .collect()
}
