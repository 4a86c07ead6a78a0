//! Device-space viewport: pixel <-> drawing space mapping and layout helpers.
//!
//! Device space has its origin at the top-left with y growing downward.
//! Drawing space is centered with y growing upward and spans `[-1, 1]` on
//! both axes across the viewport.

use crate::errors::GeomError;
use crate::types::{Point, check_positive};

/// Map a device pixel position into drawing space.
///
/// No clamping: positions outside `[0, width] x [0, height]` land outside
/// `[-1, 1]`.
#[inline]
pub fn to_drawing_space(device: Point, width: f64, height: f64) -> Point {
    Point::new(
        (device.x / width) * 2.0 - 1.0,
        -((device.y / height) * 2.0 - 1.0),
    )
}

/// Inverse of [`to_drawing_space`].
#[inline]
pub fn to_device_space(point: Point, width: f64, height: f64) -> Point {
    Point::new(
        (point.x + 1.0) / 2.0 * width,
        (1.0 - point.y) / 2.0 * height,
    )
}

/// Size of the drawing surface in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Create a Viewport with validation (rejects NaN, infinite, zero, negative)
    pub fn try_new(width: f64, height: f64) -> Result<Self, GeomError> {
        let width = check_positive(width).map_err(|e| GeomError::numeric("viewport width", e))?;
        let height =
            check_positive(height).map_err(|e| GeomError::numeric("viewport height", e))?;
        Ok(Viewport { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn to_drawing(&self, device: Point) -> Point {
        to_drawing_space(device, self.width, self.height)
    }

    pub fn to_device(&self, point: Point) -> Point {
        to_device_space(point, self.width, self.height)
    }

    /// Largest viewport with this aspect ratio that fits the available area.
    ///
    /// A wider area is bound by its height, anything else by its width.
    pub fn fit_within(&self, available_width: f64, available_height: f64) -> Result<Self, GeomError> {
        let available = Viewport::try_new(available_width, available_height)?;
        let aspect = self.aspect_ratio();
        if available.aspect_ratio() > aspect {
            Viewport::try_new(available.height * aspect, available.height)
        } else {
            Viewport::try_new(available.width, available.width / aspect)
        }
    }

    /// Four solid-color quadrants as scissor rectangles.
    ///
    /// Order: top-left green, top-right red, bottom-left blue, bottom-right
    /// yellow. Rectangles use a bottom-left origin and together cover every
    /// whole pixel of the viewport, odd sizes included.
    pub fn quadrants(&self) -> [QuadrantFill; 4] {
        let w = self.width.floor() as u32;
        let h = self.height.floor() as u32;
        let (left, bottom) = (w / 2, h / 2);
        let (right, top) = (w - left, h - bottom);

        [
            QuadrantFill {
                scissor: ScissorRect::new(0, bottom, left, top),
                color: Rgba::GREEN,
            },
            QuadrantFill {
                scissor: ScissorRect::new(left, bottom, right, top),
                color: Rgba::RED,
            },
            QuadrantFill {
                scissor: ScissorRect::new(0, 0, left, bottom),
                color: Rgba::BLUE,
            },
            QuadrantFill {
                scissor: ScissorRect::new(left, 0, right, bottom),
                color: Rgba::YELLOW,
            },
        ]
    }
}

/// Scissor box in device pixels, origin at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScissorRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ScissorRect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        ScissorRect { x, y, width, height }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Linear RGBA clear color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::opaque(1.0, 0.0, 0.0);
    pub const GREEN: Rgba = Rgba::opaque(0.0, 1.0, 0.0);
    pub const BLUE: Rgba = Rgba::opaque(0.0, 0.0, 1.0);
    pub const YELLOW: Rgba = Rgba::opaque(1.0, 1.0, 0.0);

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }
}

/// One quadrant of [`Viewport::quadrants`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadrantFill {
    pub scissor: ScissorRect,
    pub color: Rgba,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericError;

    #[test]
    fn corners_map_to_unit_square() {
        let v = Viewport::try_new(700.0, 700.0).unwrap();
        assert_eq!(v.to_drawing(Point::new(0.0, 0.0)), Point::new(-1.0, 1.0));
        assert_eq!(v.to_drawing(Point::new(700.0, 700.0)), Point::new(1.0, -1.0));
        assert_eq!(v.to_drawing(Point::new(350.0, 350.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn out_of_bounds_is_not_clamped() {
        let p = to_drawing_space(Point::new(-100.0, 800.0), 400.0, 400.0);
        assert_eq!(p, Point::new(-1.5, -3.0));
    }

    #[test]
    fn viewport_rejects_bad_dimensions() {
        assert_eq!(
            Viewport::try_new(0.0, 10.0),
            Err(GeomError::Numeric {
                what: "viewport width",
                source: NumericError::Zero
            })
        );
        assert!(Viewport::try_new(10.0, -1.0).is_err());
        assert!(Viewport::try_new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn fit_within_wide_window_is_height_bound() {
        let v = Viewport::try_new(600.0, 600.0).unwrap();
        let fitted = v.fit_within(1200.0, 800.0).unwrap();
        assert_eq!((fitted.width(), fitted.height()), (800.0, 800.0));
    }

    #[test]
    fn fit_within_tall_window_is_width_bound() {
        let v = Viewport::try_new(800.0, 400.0).unwrap();
        let fitted = v.fit_within(500.0, 900.0).unwrap();
        assert_eq!((fitted.width(), fitted.height()), (500.0, 250.0));
    }

    #[test]
    fn quadrants_even_size() {
        let q = Viewport::try_new(500.0, 500.0).unwrap().quadrants();
        assert_eq!(q[0].scissor, ScissorRect::new(0, 250, 250, 250));
        assert_eq!(q[0].color, Rgba::GREEN);
        assert_eq!(q[1].scissor, ScissorRect::new(250, 250, 250, 250));
        assert_eq!(q[1].color, Rgba::RED);
        assert_eq!(q[2].scissor, ScissorRect::new(0, 0, 250, 250));
        assert_eq!(q[2].color, Rgba::BLUE);
        assert_eq!(q[3].scissor, ScissorRect::new(250, 0, 250, 250));
        assert_eq!(q[3].color, Rgba::YELLOW);
    }

    #[test]
    fn quadrants_cover_odd_sizes() {
        let q = Viewport::try_new(501.0, 333.0).unwrap().quadrants();
        let total: u64 = q.iter().map(|f| f.scissor.area()).sum();
        assert_eq!(total, 501 * 333);
        assert_eq!(q[1].scissor, ScissorRect::new(250, 166, 251, 167));
    }
}
