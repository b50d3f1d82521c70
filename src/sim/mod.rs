//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (row-major over the brick grid)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, ball_hits_paddle, point_in_rect};
pub use state::{Ball, Banner, BrickGrid, GameState, Paddle, brick_rect};
pub use tick::{TickInput, tick};
