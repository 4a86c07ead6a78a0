//! Fixed tolerances and default sizes (drawing space unless noted)

/// Tolerance for tangent/secant classification, bounding-box clipping and
/// parallel-segment detection. Not configurable.
pub const EPSILON: f64 = 1e-6;

/// Line-loop resolution used for circle outlines and rubber-band previews.
pub const CIRCLE_SEGMENTS: usize = 100;

/// Intersection marker edge, in device pixels.
pub const MARKER_POINT_SIZE: f64 = 10.0;

/// Distance moved per update while an arrow key is held.
pub const NUDGE_STEP: f64 = 0.01;

/// The nudged rectangle's center stays within `[-NUDGE_LIMIT, NUDGE_LIMIT]`.
pub const NUDGE_LIMIT: f64 = 0.9;

/// Half edge of the nudged square.
pub const NUDGE_HALF_SIZE: f64 = 0.1;
