//! Circle/segment intersection and canvas coordinate helpers.
//!
//! ```
//! use canvas_geom::{IntersectionKind, Point, Segment, intersect, make_circle};
//!
//! let circle = make_circle(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
//! let segment = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 0.0))?;
//! let result = intersect(&circle, &segment);
//! assert_eq!(result.kind(), IntersectionKind::Secant);
//! assert_eq!(result.points(), &[Point::new(1.0, 0.0)]);
//! # Ok::<(), canvas_geom::GeomError>(())
//! ```

pub mod errors;
pub mod geometry;
pub mod log;
pub mod nudge;
pub mod overlay;
pub mod session;
pub mod types;
pub mod viewport;

pub use errors::GeomError;
pub use geometry::{
    Circle, EPSILON, ImplicitLine, IntersectionKind, IntersectionResult, Segment, SegmentCrossing,
    circle_outline, intersect, intersect_segments, make_circle, marker_half_size,
    points_to_box_vertices,
};
pub use session::{Commit, Phase, Preview, Session, SessionConfig};
pub use types::{BBox, NumericError, Point};
pub use viewport::{Viewport, to_device_space, to_drawing_space};
