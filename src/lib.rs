//! Strip Pong - one-dimensional Pong on an addressable LED strip
//!
//! Core modules:
//! - `color`: RGBA values, blending, HSL conversion
//! - `draw`: the layers (paddles, ball, backgrounds) behind the `Drawable` trait
//! - `renderer`: z-ordered compositing into a frame, frame sinks
//! - `sim`: game state, input handling, fixed timestep
//! - `scene`: puts a game and a background together
//! - `settings`: JSON configuration

pub mod color;
pub mod draw;
pub mod error;
pub mod field;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use color::{Rgba, blend, hsl_to_rgb};
pub use draw::{Ball, Drawable, HslWheel, Layer, Line, Player, Side, Sinusoid, ZIndex};
pub use error::{ConfigError, FieldError};
pub use field::Field;
pub use renderer::{AnsiSink, Compositor, FrameSink};
pub use scene::Scene;
pub use settings::{Background, Settings};

/// Game configuration constants
pub mod consts {
    use crate::color::Rgba;
    use crate::draw::ZIndex;

    /// Default strip length (a common 1 m, 60 LED/m strip)
    pub const DEFAULT_WIDTH: u32 = 60;
    /// Default simulation rate
    pub const DEFAULT_FRAME_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock frame fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Stacking order: backgrounds, then paddles, then the ball
    pub const BACKGROUND_Z: ZIndex = 0;
    pub const PADDLE_Z: ZIndex = 10;
    pub const BALL_Z: ZIndex = 100;

    pub const LEFT_PADDLE_COLOR: Rgba = Rgba::new(255, 0, 0, 200);
    pub const RIGHT_PADDLE_COLOR: Rgba = Rgba::new(0, 255, 0, 200);

    /// Ball crosses the strip in this many seconds
    pub const BALL_SPEED_DIVISOR: f64 = 3.0;

    /// Phase advance per second of the sinusoid's r, g, b offsets
    pub const SINE_RATES: [f64; 3] = [0.27, 0.41, 0.59];
    /// Hue advance per second of the HSL wheel (one turn per 10 s)
    pub const HUE_RATE: f64 = 0.1;

    /// Demo player raises a paddle when the ball is this close to its wall
    pub const IDLE_GUARD_DISTANCE: f64 = 3.0;
}
