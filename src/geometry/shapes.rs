//! Circle and segment values plus the implicit line form

use std::fmt;

use glam::DVec2;

use crate::errors::GeomError;
use crate::log::warn;
use crate::types::{BBox, Point, check_finite, check_non_negative};

/// A line segment with two distinct endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    p0: Point,
    p1: Point,
}

impl Segment {
    /// Build a segment, rejecting coincident endpoints.
    pub fn new(p0: Point, p1: Point) -> Result<Self, GeomError> {
        if p0 == p1 {
            warn!(x = p0.x, y = p0.y, "rejecting degenerate segment");
            return Err(GeomError::DegenerateSegment { point: p0 });
        }
        Ok(Segment { p0, p1 })
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.p1
    }

    /// The same segment walked the other way
    pub fn reversed(&self) -> Segment {
        Segment { p0: self.p1, p1: self.p0 }
    }

    /// Direction vector from start to end (never zero)
    pub fn delta(&self) -> DVec2 {
        self.p1 - self.p0
    }

    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    pub fn midpoint(&self) -> Point {
        Point::from((self.p0.to_dvec2() + self.p1.to_dvec2()) * 0.5)
    }

    pub fn bbox(&self) -> BBox {
        BBox::from_corners(self.p0, self.p1)
    }

    /// The infinite line through this segment
    pub fn line(&self) -> ImplicitLine {
        ImplicitLine::through(self.p0, self.p1)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.p0, self.p1)
    }
}

/// `a*x + b*y + c = 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImplicitLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl ImplicitLine {
    /// Two-point form. Degenerate (`a == b == 0`) only when `p0 == p1`.
    pub fn through(p0: Point, p1: Point) -> Self {
        ImplicitLine {
            a: p0.y - p1.y,
            b: p1.x - p0.x,
            c: p0.x * p1.y - p1.x * p0.y,
        }
    }

    /// `a² + b²`
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.a * self.a + self.b * self.b
    }

    /// Signed value of the line equation at `p`, not normalized
    #[inline]
    pub fn eval(&self, p: Point) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Perpendicular distance from `p` to the line
    pub fn distance(&self, p: Point) -> f64 {
        self.eval(p).abs() / self.norm_sq().sqrt()
    }

    /// Foot of the perpendicular dropped from `p`
    pub fn project(&self, p: Point) -> Point {
        let t = self.eval(p) / self.norm_sq();
        Point::new(p.x - self.a * t, p.y - self.b * t)
    }
}

/// A circle with a non-negative radius. Zero radius is a valid point-circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Create a circle with validation (rejects negative, NaN and infinite radius)
    pub fn try_new(center: Point, radius: f64) -> Result<Self, GeomError> {
        check_finite(center.x).map_err(|e| GeomError::numeric("circle center", e))?;
        check_finite(center.y).map_err(|e| GeomError::numeric("circle center", e))?;
        let radius =
            check_non_negative(radius).map_err(|e| GeomError::numeric("circle radius", e))?;
        Ok(Circle { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// True for the zero-radius point-circle
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.radius == 0.0
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "circle at {} r={}", self.center, self.radius)
    }
}

/// Circle centered at `center` passing through `edge`.
///
/// `center == edge` gives a zero-radius circle; check
/// [`Circle::is_degenerate`] if that matters to the caller.
pub fn make_circle(center: Point, edge: Point) -> Circle {
    Circle {
        center,
        radius: center.distance(edge),
    }
}
