//! Fixed-point RGBA color and compositing
//!
//! Every layer answers color queries with an [`Rgba`] and stacks on top of the
//! layers below it through [`blend`]. The blend uses the shift-by-8 fast path
//! instead of dividing by 255, with the two edge weights handled exactly.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// An 8-bit-per-channel color with a compositing weight in `a`
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Transparent black, the base every frame position starts from
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha weight
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// View a frame as tightly packed RGBA bytes (what LED drivers consume)
    pub fn as_bytes(frame: &[Rgba]) -> &[u8] {
        bytemuck::cast_slice(frame)
    }
}

/// "Over" compositing of `foreground` onto `background`
///
/// `alpha == 0` returns `background` untouched and `alpha == 255` returns the
/// foreground RGB at full alpha. Everything in between uses
/// `(f * a + b * (255 - a)) >> 8` per channel, which darkens by at most one
/// step compared to an exact division.
pub fn blend(foreground: Rgba, background: Rgba) -> Rgba {
    match foreground.a {
        0 => background,
        255 => foreground,
        alpha => {
            let fa = alpha as u32;
            let ba = 255 - fa;
            let mix = |f: u8, b: u8| ((f as u32 * fa + b as u32 * ba) >> 8) as u8;

            Rgba {
                r: mix(foreground.r, background.r),
                g: mix(foreground.g, background.g),
                b: mix(foreground.b, background.b),
                a: (fa + ((background.a as u32 * ba) >> 8)).min(255) as u8,
            }
        }
    }
}

/// Convert HSL (all components in `[0, 1]`) to an opaque color
///
/// Uses the usual six-segment hue ramp. A saturation of zero is a gray at the
/// given luminosity.
pub fn hsl_to_rgb(hue: f64, saturation: f64, luminosity: f64) -> Rgba {
    let to_byte = |v: f64| (v * 255.0) as u8;

    if saturation == 0.0 {
        let v = to_byte(luminosity);
        return Rgba::new(v, v, v, 255);
    }

    let q = if luminosity < 0.5 {
        luminosity * (1.0 + saturation)
    } else {
        luminosity + saturation - luminosity * saturation
    };
    let p = 2.0 * luminosity - q;

    Rgba::new(
        to_byte(hue_to_rgb(p, q, hue + 1.0 / 3.0)),
        to_byte(hue_to_rgb(p, q, hue)),
        to_byte(hue_to_rgb(p, q, hue - 1.0 / 3.0)),
        255,
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
