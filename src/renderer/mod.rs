//! Frame rendering
//!
//! The compositor turns the layer stack into one color per strip position.
//! Frames leave the crate through a [`FrameSink`]; the LED driver is one,
//! [`AnsiSink`] is the terminal stand-in used by the demo.

pub mod compositor;
pub mod terminal;

pub use compositor::Compositor;
pub use terminal::AnsiSink;

use std::io;

use crate::color::Rgba;

/// Consumer of finished frames (LED driver, terminal, capture buffer...)
pub trait FrameSink {
    fn write_frame(&mut self, frame: &[Rgba]) -> io::Result<()>;
}

/// Keeps every frame it receives
impl FrameSink for Vec<Vec<Rgba>> {
    fn write_frame(&mut self, frame: &[Rgba]) -> io::Result<()> {
        self.push(frame.to_vec());
        Ok(())
    }
}
