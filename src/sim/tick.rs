//! Input handling for one simulation tick
//!
//! Turns button state into paddle visibility and phase changes. Ball motion
//! is not done here: the compositor animates the ball along with the other
//! layers.

use super::state::{GamePhase, GameState};
use crate::consts::IDLE_GUARD_DISTANCE;
use crate::draw::Side;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left player's button is held
    pub left_pressed: bool,
    /// Right player's button is held
    pub right_pressed: bool,
    /// Serve the ball (only meaningful in `Serve`)
    pub launch: bool,
    /// Pause toggle
    pub pause: bool,
    /// Demo mode - both paddles are driven automatically
    pub idle_mode: bool,
}

/// Apply one tick of input to the game
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.pause {
        let resumed = if state.ball.borrow().velocity() == 0.0 {
            GamePhase::Serve
        } else {
            GamePhase::Playing
        };
        state.phase = match state.phase {
            GamePhase::Paused => resumed,
            _ => GamePhase::Paused,
        };
        log::info!("Game {}", state.phase.as_str());
    }

    if state.phase == GamePhase::Paused {
        return;
    }

    let mut input = input.clone();
    if input.idle_mode {
        idle_input(state, &mut input);
    }

    state.set_visible(Side::Left, input.left_pressed);
    state.set_visible(Side::Right, input.right_pressed);

    if state.phase == GamePhase::Serve && input.launch {
        if let Err(err) = state.serve() {
            log::warn!("Serve failed: {err}");
        }
    }

    state.time_ticks += 1;
}

/// Demo player: auto-serve, and raise a paddle while the ball closes in on its wall
fn idle_input(state: &GameState, input: &mut TickInput) {
    if state.phase == GamePhase::Serve {
        input.launch = true;
    }

    let ball = state.ball.borrow();
    let (position, velocity) = (ball.position(), ball.velocity());

    input.left_pressed = velocity < 0.0 && position <= IDLE_GUARD_DISTANCE;
    input.right_pressed = velocity > 0.0 && position >= ball.max_position() - IDLE_GUARD_DISTANCE;
}
