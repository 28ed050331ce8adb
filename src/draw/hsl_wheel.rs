//! Hue-cycling background
//!
//! Luminosity ramps from black at position 0 toward white at the far end,
//! while the hue of the whole strip slowly turns.

use super::{Drawable, ZIndex};
use crate::color::{Rgba, hsl_to_rgb};
use crate::consts::HUE_RATE;
use crate::field::Field;

#[derive(Debug, Clone)]
pub struct HslWheel {
    /// Strip length, spreads luminosity evenly over all positions
    scale: f64,
    /// In `[0, 1)`, wraps
    hue: f64,
    z_index: ZIndex,
}

impl HslWheel {
    pub fn new(field: &Field, z_index: ZIndex) -> Self {
        Self {
            scale: field.scale(),
            hue: 0.0,
            z_index,
        }
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }
}

impl Drawable for HslWheel {
    /// Fully opaque: anything stacked below this layer is hidden
    fn color_at(&self, position: f64, _base: Rgba) -> Rgba {
        let luminosity = position / self.scale;
        hsl_to_rgb(self.hue, 1.0, luminosity)
    }

    fn z_index(&self) -> ZIndex {
        self.z_index
    }

    fn animate(&mut self, dt: f64) -> bool {
        self.hue = (self.hue + dt * HUE_RATE).rem_euclid(1.0);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_from_black() {
        let field = Field::new(10).unwrap();
        let wheel = HslWheel::new(&field, 0);

        assert_eq!(wheel.color_at(0.0, Rgba::WHITE), Rgba::new(0, 0, 0, 255));
        // Halfway up the strip is the pure hue
        assert_eq!(wheel.color_at(5.0, Rgba::WHITE), Rgba::new(255, 0, 0, 255));
    }

    #[test]
    fn test_hue_wraps() {
        let field = Field::new(10).unwrap();
        let mut wheel = HslWheel::new(&field, 0);
        wheel.animate(12.5);
        assert!((wheel.hue() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_full_turn_is_periodic() {
        let field = Field::new(50).unwrap();
        let mut wheel = HslWheel::new(&field, 0);
        let before: Vec<Rgba> = (0..50).map(|p| wheel.color_at(p as f64, Rgba::BLACK)).collect();

        // Ten seconds at 60 fps
        for _ in 0..600 {
            wheel.animate(1.0 / 60.0);
        }

        let hue = wheel.hue();
        assert!(hue.min(1.0 - hue) < 1e-9);
        for (p, expected) in before.iter().enumerate() {
            let color = wheel.color_at(p as f64, Rgba::BLACK);
            for (got, want) in [(color.r, expected.r), (color.g, expected.g), (color.b, expected.b)] {
                assert!(got.abs_diff(want) <= 1, "position {p}: {color:?} vs {expected:?}");
            }
        }
    }
}
