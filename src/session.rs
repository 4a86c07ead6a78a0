//! Interactive circle-and-line session.
//!
//! The host feeds pointer events in device pixels; the session converts them
//! through its [`Viewport`], keeps the drawing state and asks the pure
//! geometry functions for everything else. A session goes
//! `Idle -> DrawingCircle -> CirclePlaced -> DrawingLine -> ShowingResult`
//! and only [`Session::reset`] starts over.

use crate::errors::GeomError;
use crate::geometry::defaults::{CIRCLE_SEGMENTS, MARKER_POINT_SIZE};
use crate::geometry::{
    Circle, IntersectionResult, Segment, circle_outline, intersect, make_circle, marker_half_size,
    points_to_box_vertices,
};
use crate::log::{debug, warn};
use crate::overlay::{Overlay, circle_summary, intersection_summary, segment_summary};
use crate::types::Point;
use crate::viewport::Viewport;

/// Tunables for what the session hands to the drawing layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    /// Edge of an intersection marker, in device pixels
    pub marker_point_size: f64,
    /// Line-loop resolution for circle outlines
    pub outline_segments: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            marker_point_size: MARKER_POINT_SIZE,
            outline_segments: CIRCLE_SEGMENTS,
        }
    }
}

/// Where the session is. Points are in drawing space.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    /// Button held after the first press; `edge` follows the pointer
    DrawingCircle { center: Point, edge: Option<Point> },
    /// Circle committed, waiting for the line
    CirclePlaced { circle: Circle },
    /// Button held for the line; `end` follows the pointer
    DrawingLine {
        circle: Circle,
        start: Point,
        end: Option<Point>,
    },
    ShowingResult {
        circle: Circle,
        segment: Segment,
        result: IntersectionResult,
    },
}

/// What a pointer release committed
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    /// Nothing to commit (no drag recorded, or not drawing)
    Nothing,
    Circle(Circle),
    Intersection(IntersectionResult),
}

/// Rubber-band shape while a drag is in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    Circle(Circle),
    Segment { start: Point, end: Point },
}

impl Preview {
    /// Vertices to draw: a closed outline for circles, two points for segments
    pub fn vertices(&self, outline_segments: usize) -> Vec<Point> {
        match self {
            Preview::Circle(circle) => circle_outline(circle, outline_segments),
            Preview::Segment { start, end } => vec![*start, *end],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    viewport: Viewport,
    config: SessionConfig,
    phase: Phase,
}

impl Session {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(viewport, SessionConfig::default())
    }

    pub fn with_config(viewport: Viewport, config: SessionConfig) -> Self {
        Session {
            viewport,
            config,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// New device size. Committed shapes stay in drawing space.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        debug!(width = viewport.width(), height = viewport.height(), "viewport changed");
        self.viewport = viewport;
    }

    /// True while a button press is being dragged
    pub fn is_drawing(&self) -> bool {
        matches!(
            self.phase,
            Phase::DrawingCircle { .. } | Phase::DrawingLine { .. }
        )
    }

    /// Start a drag. Ignored while drawing or once the result is shown.
    pub fn pointer_down(&mut self, device: Point) {
        let at = self.viewport.to_drawing(device);
        match &self.phase {
            Phase::Idle => {
                debug!(x = at.x, y = at.y, "circle drag started");
                self.phase = Phase::DrawingCircle {
                    center: at,
                    edge: None,
                };
            }
            Phase::CirclePlaced { circle } => {
                debug!(x = at.x, y = at.y, "line drag started");
                self.phase = Phase::DrawingLine {
                    circle: *circle,
                    start: at,
                    end: None,
                };
            }
            _ => {}
        }
    }

    /// Track the pointer. Returns whether the preview changed.
    pub fn pointer_move(&mut self, device: Point) -> bool {
        let at = self.viewport.to_drawing(device);
        match &mut self.phase {
            Phase::DrawingCircle { edge, .. } => {
                *edge = Some(at);
                true
            }
            Phase::DrawingLine { end, .. } => {
                *end = Some(at);
                true
            }
            _ => false,
        }
    }

    /// Finish a drag.
    ///
    /// A release before any movement is ignored and the drag continues. A
    /// line whose ends coincide is rejected with
    /// [`GeomError::DegenerateSegment`] and the session goes back to
    /// [`Phase::CirclePlaced`] so the line can be drawn again.
    pub fn pointer_up(&mut self) -> Result<Commit, GeomError> {
        match self.phase {
            Phase::DrawingCircle {
                center,
                edge: Some(edge),
            } => {
                let circle = make_circle(center, edge);
                if circle.is_degenerate() {
                    warn!("committed a zero-radius circle");
                }
                debug!(radius = circle.radius(), "circle committed");
                self.phase = Phase::CirclePlaced { circle };
                Ok(Commit::Circle(circle))
            }
            Phase::DrawingLine {
                circle,
                start,
                end: Some(end),
            } => match Segment::new(start, end) {
                Ok(segment) => {
                    let result = intersect(&circle, &segment);
                    debug!(kind = %result.kind(), points = result.len(), "line committed");
                    self.phase = Phase::ShowingResult {
                        circle,
                        segment,
                        result: result.clone(),
                    };
                    Ok(Commit::Intersection(result))
                }
                Err(err) => {
                    self.phase = Phase::CirclePlaced { circle };
                    Err(err)
                }
            },
            _ => Ok(Commit::Nothing),
        }
    }

    /// Drop everything and go back to idle
    pub fn reset(&mut self) {
        debug!("session reset");
        self.phase = Phase::Idle;
    }

    pub fn circle(&self) -> Option<&Circle> {
        match &self.phase {
            Phase::CirclePlaced { circle }
            | Phase::DrawingLine { circle, .. }
            | Phase::ShowingResult { circle, .. } => Some(circle),
            Phase::Idle | Phase::DrawingCircle { .. } => None,
        }
    }

    pub fn segment(&self) -> Option<&Segment> {
        match &self.phase {
            Phase::ShowingResult { segment, .. } => Some(segment),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&IntersectionResult> {
        match &self.phase {
            Phase::ShowingResult { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The shape being dragged, once the pointer has moved
    pub fn preview(&self) -> Option<Preview> {
        match self.phase {
            Phase::DrawingCircle {
                center,
                edge: Some(edge),
            } => Some(Preview::Circle(make_circle(center, edge))),
            Phase::DrawingLine {
                start,
                end: Some(end),
                ..
            } => Some(Preview::Segment { start, end }),
            _ => None,
        }
    }

    /// Outline of the committed circle
    pub fn circle_vertices(&self) -> Option<Vec<Point>> {
        self.circle()
            .map(|c| circle_outline(c, self.config.outline_segments))
    }

    /// Fan-ordered marker boxes, four vertices per intersection point
    pub fn markers(&self) -> Vec<Point> {
        match self.result() {
            Some(result) => {
                let half = marker_half_size(self.config.marker_point_size, self.viewport.width());
                points_to_box_vertices(result.points(), half)
            }
            None => Vec::new(),
        }
    }

    /// Summary lines for whatever has been committed so far
    pub fn overlay(&self) -> Overlay {
        let mut lines = Vec::new();
        if let Some(circle) = self.circle() {
            lines.push(circle_summary(circle));
        }
        if let Some(segment) = self.segment() {
            lines.push(segment_summary(segment));
        }
        if let Some(result) = self.result() {
            lines.push(intersection_summary(result));
        }
        Overlay { lines }
    }
}
