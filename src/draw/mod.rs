//! Drawable layers
//!
//! Everything that shows up on the strip implements [`Drawable`]:
//! - `line`: constant-color span
//! - `player`: a paddle (a line that can be hidden)
//! - `ball`: the bouncing dot
//! - `sinusoid`, `hsl_wheel`: full-strip animated backgrounds

pub mod ball;
pub mod hsl_wheel;
pub mod line;
pub mod player;
pub mod sinusoid;

pub use ball::Ball;
pub use hsl_wheel::HslWheel;
pub use line::Line;
pub use player::{Player, Side};
pub use sinusoid::{SineMode, SineTable, Sinusoid};

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Rgba;

/// Stacking order. Lower values render first and become the base for higher ones.
pub type ZIndex = i32;

/// A layer the compositor can stack
pub trait Drawable {
    /// Color at `position`, composited over `base`
    fn color_at(&self, position: f64, base: Rgba) -> Rgba;

    fn z_index(&self) -> ZIndex;

    /// Move forward in time by `dt` seconds.
    /// Returns `false` once the layer is finished and can be dropped.
    fn animate(&mut self, dt: f64) -> bool;
}

/// Shared handle to a layer. The owner keeps its own handle to mutate it;
/// the compositor only holds a clone.
pub type Layer = Rc<RefCell<dyn Drawable>>;

/// Wrap a layer in a shared handle
pub fn shared<D: Drawable + 'static>(drawable: D) -> Rc<RefCell<D>> {
    Rc::new(RefCell::new(drawable))
}
