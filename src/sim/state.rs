//! Game state
//!
//! The game owns the two paddles and the ball. It hands shared handles to the
//! compositor, which only reads and animates them.

use std::cell::RefCell;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::draw::{Ball, Layer, Player, Side, shared};
use crate::error::FieldError;
use crate::field::Field;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball parked at the center, waiting for launch input
    Serve,
    /// Ball in flight
    Playing,
    /// Everything frozen
    Paused,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Serve => "serve",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
        }
    }
}

#[derive(Debug)]
pub struct GameState {
    pub field: Field,
    /// Seed the serve RNG was created from
    pub seed: u64,
    pub phase: GamePhase,
    pub left: Rc<RefCell<Player>>,
    pub right: Rc<RefCell<Player>>,
    pub ball: Rc<RefCell<Ball>>,
    /// Number of serves so far
    pub serves: u32,
    /// Ticks processed while not paused
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    pub fn new(field: Field, seed: u64) -> Result<Self, FieldError> {
        let left = shared(Player::new(Side::Left, &field)?);
        let right = shared(Player::new(Side::Right, &field)?);
        let ball = shared(Ball::launched(&field, field.center(), 0.0)?);

        Ok(Self {
            field,
            seed,
            phase: GamePhase::Serve,
            left,
            right,
            ball,
            serves: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    pub fn player(&self, side: Side) -> &Rc<RefCell<Player>> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Handles for the compositor: both paddles, then the ball
    pub fn layers(&self) -> [Layer; 3] {
        let left: Layer = self.left.clone();
        let right: Layer = self.right.clone();
        let ball: Layer = self.ball.clone();
        [left, right, ball]
    }

    /// Launch the ball from the center toward a random side
    pub fn serve(&mut self) -> Result<Side, FieldError> {
        let speed = Ball::new(&self.field).speed();
        let toward = if self.rng.random_bool(0.5) {
            Side::Right
        } else {
            Side::Left
        };
        let velocity = match toward {
            Side::Right => speed,
            Side::Left => -speed,
        };

        self.ball.borrow_mut().place(self.field.center(), velocity)?;
        self.serves += 1;
        self.phase = GamePhase::Playing;
        log::debug!("Serve #{} toward {} at {:.1}/s", self.serves, toward.as_str(), speed);

        Ok(toward)
    }

    /// Set a paddle's visibility, as its button is pressed or released
    pub fn set_visible(&mut self, side: Side, visible: bool) {
        self.player(side).borrow_mut().set_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(seed: u64) -> GameState {
        GameState::new(Field::new(60).unwrap(), seed).unwrap()
    }

    #[test]
    fn test_new_game_waits_for_serve() {
        let state = state(1);
        assert_eq!(state.phase, GamePhase::Serve);
        assert_eq!(state.ball.borrow().position(), 29.5);
        assert_eq!(state.ball.borrow().velocity(), 0.0);
        assert!(!state.left.borrow().is_visible());
        assert!(!state.right.borrow().is_visible());
    }

    #[test]
    fn test_serve_speed_and_direction() {
        let mut state = state(7);
        let side = state.serve().unwrap();
        let velocity = state.ball.borrow().velocity();

        assert_eq!(velocity.abs(), 20.0);
        assert_eq!(side == Side::Right, velocity > 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.serves, 1);
    }

    #[test]
    fn test_serves_are_deterministic_per_seed() {
        let mut a = state(99999);
        let mut b = state(99999);
        for _ in 0..16 {
            assert_eq!(a.serve().unwrap(), b.serve().unwrap());
        }
    }

    #[test]
    fn test_layers_share_the_game_handles() {
        let mut state = state(3);
        let layers = state.layers();
        state.set_visible(Side::Left, true);

        assert!(Rc::ptr_eq(&layers[2], &(state.ball.clone() as Layer)));
        assert!(state.left.borrow().is_visible());
        assert_eq!(Rc::strong_count(&state.left), 2);
    }
}
