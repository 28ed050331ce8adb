//! Constant-color span of the strip

use super::{Drawable, ZIndex};
use crate::color::{Rgba, blend};
use crate::error::FieldError;

/// Solid span over `[left_edge, right_edge]`, both ends inclusive
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    left_edge: f64,
    right_edge: f64,
    color: Rgba,
    z_index: ZIndex,
}

impl Line {
    pub fn new(left_edge: f64, right_edge: f64, color: Rgba, z_index: ZIndex) -> Result<Self, FieldError> {
        for (what, value) in [("left edge", left_edge), ("right edge", right_edge)] {
            if !value.is_finite() {
                return Err(FieldError::NonFinite { what, value });
            }
        }
        if left_edge > right_edge {
            return Err(FieldError::InvertedBounds {
                left: left_edge,
                right: right_edge,
            });
        }

        Ok(Self {
            left_edge,
            right_edge,
            color,
            z_index,
        })
    }

    pub fn left_edge(&self) -> f64 {
        self.left_edge
    }

    pub fn right_edge(&self) -> f64 {
        self.right_edge
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    #[inline]
    pub fn contains(&self, position: f64) -> bool {
        self.left_edge <= position && position <= self.right_edge
    }
}

impl Drawable for Line {
    fn color_at(&self, position: f64, base: Rgba) -> Rgba {
        if self.contains(position) {
            blend(self.color, base)
        } else {
            base
        }
    }

    fn z_index(&self) -> ZIndex {
        self.z_index
    }

    fn animate(&mut self, _dt: f64) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inverted_bounds_rejected() {
        let err = Line::new(10.0, 5.0, Rgba::WHITE, 0).unwrap_err();
        assert_eq!(err, FieldError::InvertedBounds { left: 10.0, right: 5.0 });
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Line::new(f64::NAN, 5.0, Rgba::WHITE, 0),
            Err(FieldError::NonFinite { what: "left edge", .. })
        ));
    }

    #[test]
    fn test_single_position_line() {
        let line = Line::new(3.0, 3.0, Rgba::new(0, 0, 255, 255), 0).unwrap();
        assert_eq!(line.color_at(3.0, Rgba::BLACK), Rgba::new(0, 0, 255, 255));
        assert_eq!(line.color_at(2.0, Rgba::BLACK), Rgba::BLACK);
        assert_eq!(line.color_at(4.0, Rgba::BLACK), Rgba::BLACK);
    }

    #[test]
    fn test_animate_keeps_alive() {
        let mut line = Line::new(0.0, 1.0, Rgba::WHITE, 0).unwrap();
        assert!(line.animate(1.0));
        assert_eq!(line.color_at(0.5, Rgba::BLACK), Rgba::WHITE);
    }

    proptest! {
        #[test]
        fn test_line_containment(
            left in 0u32..50,
            len in 0u32..50,
            position in 0u32..120,
            color in any::<[u8; 4]>(),
            base in any::<[u8; 4]>(),
        ) {
            let color = Rgba::new(color[0], color[1], color[2], color[3]);
            let base = Rgba::new(base[0], base[1], base[2], base[3]);
            let (l, r) = (left as f64, (left + len) as f64);
            let line = Line::new(l, r, color, 10).unwrap();
            let p = position as f64;

            let expected = if l <= p && p <= r { blend(color, base) } else { base };
            prop_assert_eq!(line.color_at(p, base), expected);
        }
    }
}
