//! Game state and core simulation types

use glam::Vec2;

use super::collision::Rect;
use crate::consts::*;
use crate::level_speed;

/// The player's paddle. Slides along a fixed height near the bottom edge.
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Left edge, clamped to [0, WINDOW_WIDTH - width]
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (WINDOW_WIDTH - PADDLE_WIDTH) / 2.0,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Clamp the paddle to the window bounds
    pub fn clamp_to_window(&mut self) {
        self.x = self.x.clamp(0.0, WINDOW_WIDTH - self.width);
    }

    /// Move the paddle center to the given x (pointer input), clamped
    pub fn set_center(&mut self, center_x: f32) {
        self.x = center_x - self.width / 2.0;
        self.clamp_to_window();
    }

    /// Move the paddle back to the window center
    pub fn recenter(&mut self) {
        self.x = (WINDOW_WIDTH - self.width) / 2.0;
    }

    /// Paddle bounds as a rect for collision
    pub fn as_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// The ball. Velocity is in pixels/second; speed only ever increases
/// within a level (brick hits ramp it, nothing slows it down).
#[derive(Debug, Clone)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn at window center with the diagonal base velocity for `level`
    pub fn spawn(level: u32) -> Self {
        Self {
            pos: Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0),
            vel: Vec2::splat(level_speed(level)),
            radius: BALL_RADIUS,
        }
    }

    /// Rescale speed to the base magnitude for `level`, keeping direction
    pub fn rescale_to_level(&mut self, level: u32) {
        let target = level_speed(level) * std::f32::consts::SQRT_2;
        self.vel = self.vel.normalize_or_zero() * target;
    }
}

/// Brick durability grid, row-major. 0 = destroyed, 1-3 = hits remaining.
#[derive(Debug, Clone)]
pub struct BrickGrid {
    pub cells: Vec<Vec<u8>>,
}

impl BrickGrid {
    /// Fresh grid with every cell at full durability
    pub fn new(rows: usize) -> Self {
        Self {
            cells: vec![vec![BRICK_MAX_DURABILITY; BRICK_COLS]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// True when every brick has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(|row| row.iter().all(|&d| d == 0))
    }

    /// Count of bricks still standing
    pub fn remaining(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&d| d > 0).count())
            .sum()
    }
}

/// Screen-space bounds of the brick at (row, col). Rows stack upward.
pub fn brick_rect(row: usize, col: usize) -> Rect {
    Rect::new(
        col as f32 * (BRICK_WIDTH + BRICK_GAP) + BRICK_ORIGIN_X,
        row as f32 * (BRICK_HEIGHT + BRICK_GAP) + BRICK_ORIGIN_Y,
        BRICK_WIDTH,
        BRICK_HEIGHT,
    )
}

/// Terminal-state overlay shown while the game is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Loss,
    Win,
}

impl Banner {
    pub fn text(&self) -> &'static str {
        match self {
            Banner::Loss => "Game Over! Press R to Restart",
            Banner::Win => "You Win! Press R to Restart",
        }
    }
}

/// Complete game state. Single writer: the tick loop and input handlers
/// run sequentially on one logical thread.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Destroyed-brick counter, monotonic within a run
    pub score: u64,
    pub lives: u8,
    /// Current level (1-based); clearing the grid advances it
    pub level: u32,
    /// Terminal display state; physics is paused while set
    pub game_over: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            score: 0,
            lives: START_LIVES,
            level: 1,
            game_over: false,
            time_ticks: 0,
            paddle: Paddle::default(),
            ball: Ball::spawn(1),
            bricks: BrickGrid::new(Self::rows_for_level(1)),
        }
    }

    /// Row count for a level: one extra row per level past the first
    pub fn rows_for_level(level: u32) -> usize {
        BASE_BRICK_ROWS + (level.saturating_sub(1)) as usize
    }

    /// Full restart back to documented initial values, from any state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Respawn the ball after a lost life: center, per-level base velocity,
    /// paddle recentered. Grid and score are untouched.
    pub fn respawn_ball(&mut self) {
        self.ball = Ball::spawn(self.level);
        self.paddle.recenter();
    }

    /// Advance to the next level: one more brick row, full-health grid,
    /// ball speed rescaled to the new per-level base, everything recentered.
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.bricks = BrickGrid::new(Self::rows_for_level(self.level));
        self.ball.pos = Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT / 2.0);
        self.ball.rescale_to_level(self.level);
        self.paddle.recenter();
    }

    /// Banner to display, if any. Loss when lives ran out; the win variant
    /// is kept for parity with the original end screen.
    pub fn banner(&self) -> Option<Banner> {
        if !self.game_over {
            None
        } else if self.lives == 0 {
            Some(Banner::Loss)
        } else {
            Some(Banner::Win)
        }
    }
}
