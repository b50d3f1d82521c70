//! Collision detection for axis-aligned play-field geometry
//!
//! Everything in the field is either a circle (the ball) or an axis-aligned
//! rectangle (paddle, bricks), so the checks stay simple: brick hits use
//! ball-center containment, the paddle uses span + lower-extent tests.

use glam::Vec2;

/// Axis-aligned rectangle, origin at bottom-left (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Strict containment of a point inside a rect (edges exclusive, matching
/// the original's `>`/`<` brick test)
#[inline]
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    point.x > rect.x && point.x < rect.right() && point.y > rect.y && point.y < rect.top()
}

/// Paddle catch test: ball center horizontally within the paddle span and
/// the ball's lower extent at or below the paddle's top edge
#[inline]
pub fn ball_hits_paddle(ball_pos: Vec2, ball_radius: f32, paddle: &Rect) -> bool {
    ball_pos.x > paddle.x && ball_pos.x < paddle.right() && ball_pos.y - ball_radius < paddle.top()
}
