//! Shape generation for 2D primitives and scene assembly

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::sim::state::{GameState, brick_rect};

/// Segments used to tessellate the ball
const BALL_SEGMENTS: u32 = 32;

/// Generate vertices for a filled axis-aligned rectangle (two triangles)
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let (x2, y2) = (x + width, y + height);
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y2, color),
        Vertex::new(x, y, color),
        Vertex::new(x2, y2, color),
        Vertex::new(x, y2, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Full-window quad with a vertical color gradient
pub fn gradient_background(bottom: [f32; 4], top: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(0.0, 0.0, bottom),
        Vertex::new(WINDOW_WIDTH, 0.0, bottom),
        Vertex::new(WINDOW_WIDTH, WINDOW_HEIGHT, top),
        Vertex::new(0.0, 0.0, bottom),
        Vertex::new(WINDOW_WIDTH, WINDOW_HEIGHT, top),
        Vertex::new(0.0, WINDOW_HEIGHT, top),
    ]
}

/// Build the full frame as a vertex list: background gradient, paddle
/// (color keyed to lives), ball, and every surviving brick (shade keyed to
/// durability). Pure function of the state; HUD text and the end-state
/// banner are drawn by the platform layer.
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = gradient_background(colors::BACKGROUND_BOTTOM, colors::BACKGROUND_TOP);

    let paddle = &state.paddle;
    vertices.extend(rect(
        paddle.x,
        paddle.y,
        paddle.width,
        paddle.height,
        colors::paddle(state.lives),
    ));

    vertices.extend(circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    for (row, cells) in state.bricks.cells.iter().enumerate() {
        for (col, &durability) in cells.iter().enumerate() {
            if durability == 0 {
                continue;
            }
            let r = brick_rect(row, col);
            vertices.extend(rect(r.x, r.y, r.width, r.height, colors::brick(durability)));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BASE_BRICK_ROWS, BRICK_COLS};

    #[test]
    fn test_rect_vertex_count() {
        assert_eq!(rect(0.0, 0.0, 10.0, 10.0, colors::BALL).len(), 6);
    }

    #[test]
    fn test_circle_vertex_count() {
        let verts = circle(Vec2::ZERO, 10.0, colors::BALL, 16);
        assert_eq!(verts.len(), 48);
    }

    #[test]
    fn test_scene_skips_destroyed_bricks() {
        let mut state = GameState::new();
        let full = scene(&state).len();

        state.bricks.cells[0][0] = 0;
        let one_down = scene(&state).len();
        assert_eq!(full - one_down, 6);

        // Background + paddle + ball only once every brick is gone
        state.bricks.cells.iter_mut().flatten().for_each(|d| *d = 0);
        let empty = scene(&state).len();
        assert_eq!(
            full - empty,
            BASE_BRICK_ROWS * BRICK_COLS * 6
        );
    }

    #[test]
    fn test_scene_is_pure() {
        let state = GameState::new();
        let a = scene(&state);
        let b = scene(&state);
        assert_eq!(a.len(), b.len());
        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.remaining(), BASE_BRICK_ROWS * BRICK_COLS);
    }
}
