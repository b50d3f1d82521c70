//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use super::collision::{ball_hits_paddle, point_in_rect};
use super::state::{GameState, brick_rect};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Discrete paddle step left (keyboard)
    pub move_left: bool,
    /// Discrete paddle step right (keyboard)
    pub move_right: bool,
    /// Target paddle center x (from pointer position)
    pub target_x: Option<f32>,
    /// Full restart
    pub restart: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Restart works from any state, including the end screen
    if input.restart {
        state.reset();
        log::info!("Game restarted");
        return;
    }

    // Paddle input. Discrete steps first, then pointer: within one tick the
    // last event wins, and both clamp silently.
    if input.move_left {
        state.paddle.x -= PADDLE_STEP;
    }
    if input.move_right {
        state.paddle.x += PADDLE_STEP;
    }
    state.paddle.clamp_to_window();
    if let Some(x) = input.target_x {
        state.paddle.set_center(x);
    }

    // Physics is paused on the end screen; the scheduler keeps ticking so
    // restart stays responsive.
    if state.game_over {
        return;
    }

    state.time_ticks += 1;

    // Integrate
    state.ball.pos += state.ball.vel * dt;

    // Wall reflection. Left/right/top only; the bottom edge is open and
    // handled by the life-loss check below.
    if state.ball.pos.x - state.ball.radius < 0.0
        || state.ball.pos.x + state.ball.radius > WINDOW_WIDTH
    {
        state.ball.vel.x = -state.ball.vel.x;
    }
    if state.ball.pos.y + state.ball.radius > WINDOW_HEIGHT {
        state.ball.vel.y = -state.ball.vel.y;
    }

    // Paddle bounce. Repositioning flush above the paddle keeps the ball
    // from tunneling through or sticking to it.
    let paddle_rect = state.paddle.as_rect();
    if ball_hits_paddle(state.ball.pos, state.ball.radius, &paddle_rect) {
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.pos.y = paddle_rect.top() + state.ball.radius;
    }

    // Brick hits. Every overlapping brick registers this tick, with no early
    // exit after the first: each hit flips and ramps the vertical velocity
    // again, matching the original behavior. Score counts destroyed bricks,
    // not hits.
    for (row, cells) in state.bricks.cells.iter_mut().enumerate() {
        for (col, durability) in cells.iter_mut().enumerate() {
            if *durability == 0 {
                continue;
            }
            if point_in_rect(state.ball.pos, &brick_rect(row, col)) {
                *durability -= 1;
                state.ball.vel.y *= -BRICK_SPEEDUP;
                if *durability == 0 {
                    state.score += 1;
                }
            }
        }
    }

    // Life loss: ball fell below the screen
    if state.ball.pos.y < 0.0 {
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.game_over = true;
            log::info!("Game over at level {} with score {}", state.level, state.score);
        } else {
            state.respawn_ball();
        }
    }

    // Level clear. Checked every tick, independently of life loss.
    if state.bricks.is_cleared() {
        state.advance_level();
        log::info!(
            "Level {} start: {} brick rows",
            state.level,
            state.bricks.rows()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level_speed;
    use crate::sim::state::Banner;
    use glam::Vec2;
    use proptest::prelude::*;

    /// A state with the grid emptied except for the given cells, so level
    /// clear doesn't fire mid-test.
    fn state_with_bricks(cells: &[(usize, usize, u8)]) -> GameState {
        let mut state = GameState::new();
        state.bricks.cells.iter_mut().flatten().for_each(|d| *d = 0);
        for &(row, col, durability) in cells {
            state.bricks.cells[row][col] = durability;
        }
        state
    }

    /// Park the ball where nothing can collide with it
    fn freeze_ball(state: &mut GameState) {
        state.ball.pos = Vec2::new(200.0, 200.0);
        state.ball.vel = Vec2::ZERO;
    }

    #[test]
    fn test_straight_flight() {
        // No bricks below y=400, so ten ticks from the center are obstacle
        // free: position advances by exactly vel * dt each tick (4 px/axis).
        let mut state = state_with_bricks(&[(0, 0, 3)]);
        let start = state.ball.pos;
        let per_tick = state.ball.vel * SIM_DT;

        for n in 1..=10 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            let expected = start + per_tick * n as f32;
            assert!((state.ball.pos - expected).length() < 0.001);
        }
        assert_eq!(state.time_ticks, 10);
    }

    #[test]
    fn test_discrete_paddle_steps() {
        let mut state = state_with_bricks(&[(0, 0, 3)]);
        freeze_ball(&mut state);
        let start_x = state.paddle.x;

        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        tick(&mut state, &left, SIM_DT);
        assert_eq!(state.paddle.x, start_x - PADDLE_STEP);

        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        tick(&mut state, &right, SIM_DT);
        tick(&mut state, &right, SIM_DT);
        assert_eq!(state.paddle.x, start_x + PADDLE_STEP);
    }

    #[test]
    fn test_pointer_overrides_keys_in_same_tick() {
        let mut state = state_with_bricks(&[(0, 0, 3)]);
        freeze_ball(&mut state);

        let input = TickInput {
            move_left: true,
            target_x: Some(600.0),
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.paddle.x, 600.0 - PADDLE_WIDTH / 2.0);
    }

    #[test]
    fn test_wall_reflection_flips_sign_only() {
        let mut state = state_with_bricks(&[(0, 0, 3)]);
        state.ball.pos = Vec2::new(WINDOW_WIDTH - 12.0, 200.0);
        state.ball.vel = Vec2::new(240.0, 0.0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.ball.vel.x < 0.0);
        assert!((state.ball.vel.length() - 240.0).abs() < 0.001);

        // Top wall
        state.ball.pos = Vec2::new(200.0, WINDOW_HEIGHT - 12.0);
        state.ball.vel = Vec2::new(0.0, 240.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.ball.vel.y < 0.0);
    }

    #[test]
    fn test_paddle_bounce_repositions_flush() {
        let mut state = state_with_bricks(&[(0, 0, 3)]);
        state.paddle.x = 350.0;
        state.ball.pos = Vec2::new(400.0, PADDLE_Y + PADDLE_HEIGHT + 5.0);
        state.ball.vel = Vec2::new(0.0, -240.0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.ball.vel.y > 0.0);
        assert_eq!(state.ball.pos.y, PADDLE_Y + PADDLE_HEIGHT + BALL_RADIUS);
    }

    #[test]
    fn test_brick_hit_flips_and_ramps() {
        let mut state = state_with_bricks(&[(0, 0, 3)]);
        let target = brick_rect(0, 0);
        state.ball.pos = Vec2::new(target.x + 5.0, target.y + 5.0);
        state.ball.vel = Vec2::new(0.0, 120.0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.bricks.cells[0][0], 2);
        assert_eq!(state.score, 0);
        // Inverted and ramped by exactly 1.05
        assert!(state.ball.vel.y < 0.0);
        assert!((state.ball.vel.y.abs() - 120.0 * BRICK_SPEEDUP).abs() < 0.01);
    }

    #[test]
    fn test_brick_destroyed_scores_once() {
        // Park a zero-velocity ball inside a durability-3 brick: each tick
        // registers one hit; the score moves only on the third.
        let mut state = state_with_bricks(&[(1, 2, 3), (0, 0, 3)]);
        let target = brick_rect(1, 2);
        state.ball.pos = Vec2::new(target.x + 10.0, target.y + 10.0);
        state.ball.vel = Vec2::ZERO;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.bricks.cells[1][2], 2);
        assert_eq!(state.score, 0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.bricks.cells[1][2], 1);
        assert_eq!(state.score, 0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.bricks.cells[1][2], 0);
        assert_eq!(state.score, 1);

        // Destroyed bricks are no longer collidable
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_life_loss_respawns() {
        let mut state = state_with_bricks(&[(0, 0, 3)]);
        state.ball.pos = Vec2::new(400.0, 2.0);
        state.ball.vel = Vec2::new(0.0, -240.0);
        state.paddle.x = 0.0;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, START_LIVES - 1);
        assert!(!state.game_over);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel, Vec2::splat(level_speed(state.level)));
        assert_eq!(state.paddle.x, (WINDOW_WIDTH - PADDLE_WIDTH) / 2.0);
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut state = state_with_bricks(&[(0, 0, 3)]);
        state.lives = 1;
        state.paddle.x = 0.0;
        state.ball.pos = Vec2::new(400.0, 2.0);
        state.ball.vel = Vec2::new(0.0, -240.0);

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.game_over);
        assert_eq!(state.lives, 0);
        assert_eq!(state.banner(), Some(Banner::Loss));
        assert_eq!(state.banner().unwrap().text(), "Game Over! Press R to Restart");

        // Physics stays frozen on the end screen...
        let frozen = state.ball.pos;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.ball.pos, frozen);

        // ...but the paddle still answers input, since the loop keeps ticking
        state.paddle.x = 300.0;
        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        tick(&mut state, &left, SIM_DT);
        assert_eq!(state.paddle.x, 300.0 - PADDLE_STEP);
    }

    #[test]
    fn test_level_clear_advances() {
        // One brick left at durability 1; destroying it clears the grid
        let mut state = state_with_bricks(&[(0, 3, 1)]);
        state.score = 49;
        let target = brick_rect(0, 3);
        state.ball.pos = Vec2::new(target.x + 10.0, target.y + 10.0);
        state.ball.vel = Vec2::ZERO;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, 50);
        assert_eq!(state.level, 2);
        assert!(!state.game_over);
        assert_eq!(state.bricks.rows(), BASE_BRICK_ROWS + 1);
        assert!(
            state
                .bricks
                .cells
                .iter()
                .flatten()
                .all(|&d| d == BRICK_MAX_DURABILITY)
        );
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.paddle.x, (WINDOW_WIDTH - PADDLE_WIDTH) / 2.0);
    }

    #[test]
    fn test_speed_never_decreases_within_level() {
        let mut state = GameState::new();
        let mut last_speed = state.ball.vel.length();

        // Track the ball with the pointer so it stays alive; bounce around
        // for a while and watch the speed magnitude
        for _ in 0..2000 {
            let input = TickInput {
                target_x: Some(state.ball.pos.x),
                ..Default::default()
            };
            let (level, lives) = (state.level, state.lives);
            tick(&mut state, &input, SIM_DT);
            if state.level != level || state.lives != lives {
                break;
            }
            let speed = state.ball.vel.length();
            assert!(speed >= last_speed - 0.001);
            last_speed = speed;
        }
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut state = GameState::new();
        state.score = 99;
        state.lives = 0;
        state.level = 4;
        state.game_over = true;
        state.time_ticks = 12345;
        state.paddle.x = 0.0;
        state.bricks.cells.iter_mut().flatten().for_each(|d| *d = 0);

        let input = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, START_LIVES);
        assert_eq!(state.level, 1);
        assert!(!state.game_over);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.bricks.rows(), BASE_BRICK_ROWS);
        assert_eq!(state.bricks.remaining(), BASE_BRICK_ROWS * BRICK_COLS);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.paddle.x, (WINDOW_WIDTH - PADDLE_WIDTH) / 2.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_always_clamped(
            moves in proptest::collection::vec((any::<bool>(), any::<bool>(), -1000.0f32..2000.0, any::<bool>()), 1..50)
        ) {
            let mut state = GameState::new();
            for (left, right, x, use_pointer) in moves {
                let input = TickInput {
                    move_left: left,
                    move_right: right,
                    target_x: use_pointer.then_some(x),
                    restart: false,
                };
                tick(&mut state, &input, SIM_DT);
                prop_assert!(state.paddle.x >= 0.0);
                prop_assert!(state.paddle.x <= WINDOW_WIDTH - state.paddle.width);
            }
        }
    }
}
