//! Game simulation
//!
//! Gameplay state and input live here. It must stay deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod clock;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
