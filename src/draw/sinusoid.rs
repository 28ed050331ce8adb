//! Rolling sine background
//!
//! Each color channel is the same half-amplitude sine wave laid over the
//! strip, shifted by its own phase offset. The three offsets advance at
//! different rates, so the channels slide past each other and produce a
//! slowly shifting rainbow.
//!
//! Sampling can go through [`SineTable`], which holds one period of the wave.
//! The offsets are added at lookup time, so a single table serves all three
//! channels and never goes stale as the offsets move. It only has to be
//! rebuilt when its resolution changes.

use std::f64::consts::TAU;

use super::{Drawable, ZIndex};
use crate::color::{Rgba, blend};
use crate::consts::SINE_RATES;
use crate::field::Field;

/// Default table resolution
pub const SINE_TABLE_SIZE: usize = 256;

/// Brightness of the wave at phase `x` (any real, one period per unit)
#[inline]
fn wave_level(x: f64) -> f64 {
    ((x * TAU).sin() + 1.0) / 2.0
}

/// Quantize a `[0, 1]` level to the half-amplitude byte range `[0, 127]`
#[inline]
fn to_brightness(level: f64) -> u8 {
    ((level * 255.0) as u8) >> 1
}

/// Wrap a phase into `[0, 1)`
#[inline]
fn wrap_unit(x: f64) -> f64 {
    x.rem_euclid(1.0)
}

/// One period of the brightness wave, sampled `resolution` times
#[derive(Debug, Clone, PartialEq)]
pub struct SineTable {
    samples: Vec<u8>,
}

impl SineTable {
    pub fn new(resolution: usize) -> Self {
        let resolution = resolution.max(1);
        let samples = (0..resolution)
            .map(|index| to_brightness(wave_level(index as f64 / resolution as f64)))
            .collect();
        Self { samples }
    }

    /// Number of samples the table was built with
    pub fn resolution(&self) -> usize {
        self.samples.len()
    }

    /// Brightness at phase `x`. Any real phase is accepted.
    #[inline]
    pub fn lookup(&self, x: f64) -> u8 {
        let len = self.samples.len();
        // rem_euclid can round up to exactly 1.0 for tiny negatives
        let index = ((wrap_unit(x) * len as f64) as usize).min(len - 1);
        self.samples[index]
    }
}

/// How the sinusoid evaluates its wave
#[derive(Debug, Clone, PartialEq)]
pub enum SineMode {
    /// Call `sin` on every query
    Direct,
    /// Read from a precomputed table
    Table(SineTable),
}

impl SineMode {
    /// Table mode with the default resolution
    pub fn table() -> Self {
        SineMode::Table(SineTable::new(SINE_TABLE_SIZE))
    }
}

#[derive(Debug, Clone)]
pub struct Sinusoid {
    /// Strip length, for normalizing positions
    scale: f64,
    /// Per-channel phase offsets (r, g, b), each in `[0, 1)`
    offsets: [f64; 3],
    mode: SineMode,
    z_index: ZIndex,
}

impl Sinusoid {
    pub fn new(field: &Field, z_index: ZIndex) -> Self {
        Self {
            scale: field.scale(),
            offsets: [0.0; 3],
            mode: SineMode::Direct,
            z_index,
        }
    }

    /// Same layer, sampling through a lookup table
    pub fn tabulated(field: &Field, z_index: ZIndex) -> Self {
        let mut sine = Self::new(field, z_index);
        sine.set_mode(SineMode::table());
        sine
    }

    pub fn mode(&self) -> &SineMode {
        &self.mode
    }

    /// Switch sampling mode. A table is rebuilt only if its resolution changes.
    pub fn set_mode(&mut self, mode: SineMode) {
        if let (SineMode::Table(current), SineMode::Table(requested)) = (&self.mode, &mode) {
            if current.resolution() == requested.resolution() {
                return;
            }
        }
        if let SineMode::Table(table) = &mode {
            log::debug!("Sinusoid using {}-entry lookup table", table.resolution());
        }
        self.mode = mode;
    }

    pub fn offsets(&self) -> [f64; 3] {
        self.offsets
    }

    /// Unquantized level of `channel` (0 = r, 1 = g, 2 = b) at `position`
    #[cfg(test)]
    fn level(&self, channel: usize, position: f64) -> f64 {
        wave_level(position / self.scale + self.offsets[channel])
    }

    #[inline]
    fn brightness(&self, phase: f64) -> u8 {
        match &self.mode {
            SineMode::Direct => to_brightness(wave_level(wrap_unit(phase))),
            SineMode::Table(table) => table.lookup(phase),
        }
    }
}

impl Drawable for Sinusoid {
    fn color_at(&self, position: f64, base: Rgba) -> Rgba {
        let field_percentage = position / self.scale;
        let [r, g, b] = self.offsets.map(|offset| self.brightness(field_percentage + offset));

        blend(Rgba::new(r, g, b, 255), base)
    }

    fn z_index(&self) -> ZIndex {
        self.z_index
    }

    fn animate(&mut self, dt: f64) -> bool {
        for (offset, rate) in self.offsets.iter_mut().zip(SINE_RATES) {
            *offset = wrap_unit(*offset + dt * rate);
        }
        true
    }
}
