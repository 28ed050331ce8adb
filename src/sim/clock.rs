//! Fixed timestep accumulator
//!
//! Wall-clock frame times vary; the scene is stepped in equal slices so the
//! animation looks the same at any display rate.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f64,
    accumulator: f64,
}

impl FrameClock {
    /// Clock stepping `rate` times per second
    pub fn new(rate: u32) -> Self {
        Self {
            step: 1.0 / rate.max(1) as f64,
            accumulator: 0.0,
        }
    }

    /// Duration of one step, in seconds
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Feed `frame_dt` seconds of wall time and get the number of steps to run.
    /// Frame time is capped so a stall does not turn into a burst of steps.
    pub fn substeps(&mut self, frame_dt: f64) -> u32 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.step;
            substeps += 1;
        }
        substeps
    }
}
