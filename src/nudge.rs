//! Arrow-key movement of a square marker in drawing space.

use crate::geometry::defaults::{NUDGE_HALF_SIZE, NUDGE_LIMIT, NUDGE_STEP};
use crate::geometry::points_to_box_vertices;
use crate::types::Point;

/// Which arrow keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Held {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Held {
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NudgeConfig {
    /// Distance per update along each held axis
    pub step: f64,
    /// The center is clamped to `[-limit, limit]` on both axes
    pub limit: f64,
    /// Half edge of the moved square
    pub half_size: f64,
}

impl Default for NudgeConfig {
    fn default() -> Self {
        Self {
            step: NUDGE_STEP,
            limit: NUDGE_LIMIT,
            half_size: NUDGE_HALF_SIZE,
        }
    }
}

impl NudgeConfig {
    /// Fan-ordered corners of the square centered at `position`
    pub fn square(&self, position: Point) -> Vec<Point> {
        points_to_box_vertices(&[position], self.half_size)
    }
}

/// Move `position` one step for every held key, then clamp.
///
/// Opposite keys cancel out.
pub fn nudge(position: Point, held: Held, config: &NudgeConfig) -> Point {
    let mut next = position;
    if held.left {
        next.x -= config.step;
    }
    if held.right {
        next.x += config.step;
    }
    if held.up {
        next.y += config.step;
    }
    if held.down {
        next.y -= config.step;
    }
    Point::new(
        next.x.clamp(-config.limit, config.limit),
        next.y.clamp(-config.limit, config.limit),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_held_stays_put() {
        let p = Point::new(0.3, -0.2);
        assert!(!Held::default().any());
        assert_eq!(nudge(p, Held::default(), &NudgeConfig::default()), p);
    }

    #[test]
    fn right_and_up_move_diagonally() {
        let held = Held {
            right: true,
            up: true,
            ..Held::default()
        };
        let p = nudge(Point::ORIGIN, held, &NudgeConfig::default());
        assert_eq!(p, Point::new(0.01, 0.01));
    }

    #[test]
    fn opposite_keys_cancel() {
        let held = Held {
            left: true,
            right: true,
            ..Held::default()
        };
        let p = nudge(Point::new(0.5, 0.0), held, &NudgeConfig::default());
        assert!((p.x - 0.5).abs() < 1e-12);
    }

    #[test]
    fn clamped_at_the_limit() {
        let config = NudgeConfig::default();
        let held = Held {
            left: true,
            down: true,
            ..Held::default()
        };
        let mut p = Point::ORIGIN;
        for _ in 0..500 {
            p = nudge(p, held, &config);
        }
        assert_eq!(p, Point::new(-0.9, -0.9));
    }

    #[test]
    fn square_around_position() {
        let square = NudgeConfig::default().square(Point::ORIGIN);
        assert_eq!(square[0], Point::new(-0.1, -0.1));
        assert_eq!(square[2], Point::new(0.1, 0.1));
    }
}
