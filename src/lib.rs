//! Brick Breaker - a classic paddle-and-bricks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the original 16ms tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window dimensions in game pixels (y grows upward)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_Y: f32 = 50.0;
    /// Horizontal distance moved per discrete key press
    pub const PADDLE_STEP: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Base per-axis speed in pixels/second (4 px per 60 Hz tick)
    pub const BALL_BASE_SPEED: f32 = 240.0;
    /// Vertical speed multiplier applied on every brick hit
    pub const BRICK_SPEEDUP: f32 = 1.05;
    /// Per-level base speed ramp (level 1 = 1.0x, level 2 = 1.25x, ...)
    pub const LEVEL_SPEED_STEP: f32 = 0.25;

    /// Brick grid layout
    pub const BRICK_COLS: usize = 10;
    /// Row count for level 1; each level adds one row
    pub const BASE_BRICK_ROWS: usize = 5;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 10.0;
    /// Left edge of the first column
    pub const BRICK_ORIGIN_X: f32 = 35.0;
    /// Bottom edge of the first row; rows stack upward from here
    pub const BRICK_ORIGIN_Y: f32 = 400.0;
    /// Hit points of a freshly spawned brick
    pub const BRICK_MAX_DURABILITY: u8 = 3;

    /// Starting lives
    pub const START_LIVES: u8 = 3;
}

/// Base ball speed per axis for a given level (applied on respawn and level advance)
#[inline]
pub fn level_speed(level: u32) -> f32 {
    consts::BALL_BASE_SPEED * (1.0 + consts::LEVEL_SPEED_STEP * level.saturating_sub(1) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_speed_ramp() {
        assert!((level_speed(1) - consts::BALL_BASE_SPEED).abs() < f32::EPSILON);
        assert!(level_speed(2) > level_speed(1));
        // Linear ramp: level 5 = 2x base
        assert!((level_speed(5) - consts::BALL_BASE_SPEED * 2.0).abs() < 0.001);
    }
}
