//! Terminal output
//!
//! Draws each frame as one row of 24-bit colored blocks, redrawn in place.
//! Alpha is dropped: the strip shows whatever RGB the compositor produced.

use std::fmt::Write as _;
use std::io::{self, Write};

use super::FrameSink;
use crate::color::Rgba;

pub struct AnsiSink<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> AnsiSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames written so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<W: Write> FrameSink for AnsiSink<W> {
    fn write_frame(&mut self, frame: &[Rgba]) -> io::Result<()> {
        let mut line = String::with_capacity(frame.len() * 20 + 8);
        line.push('\r');
        for pixel in frame {
            let _ = write!(line, "\x1b[38;2;{};{};{}m\u{2588}", pixel.r, pixel.g, pixel.b);
        }
        line.push_str("\x1b[0m");

        self.out.write_all(line.as_bytes())?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}

impl<W: Write> Drop for AnsiSink<W> {
    fn drop(&mut self) {
        if self.frames > 0 {
            let _ = self.out.write_all(b"\n");
            let _ = self.out.flush();
        }
    }
}
