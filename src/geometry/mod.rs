//! Pure 2D geometry: shapes, intersection and marker vertices.
//!
//! Nothing here keeps state between calls.

pub mod defaults;
mod intersect;
mod markers;
mod shapes;

pub use defaults::EPSILON;
pub use intersect::{IntersectionKind, IntersectionResult, SegmentCrossing, intersect, intersect_segments};
pub use markers::{circle_outline, flatten_f32, marker_half_size, points_to_box_vertices};
pub use shapes::{Circle, ImplicitLine, Segment, make_circle};
