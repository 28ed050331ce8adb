//! Strip geometry
//!
//! Every layer that needs a scale takes it from the same [`Field`].

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// The playfield: a strip of `width` addressable positions, `0..width`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Field {
    width: u32,
}

impl Field {
    pub fn new(width: u32) -> Result<Self, FieldError> {
        if width == 0 {
            return Err(FieldError::EmptyField);
        }
        Ok(Self { width })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Width as a float scale for normalizing positions
    #[inline]
    pub fn scale(&self) -> f64 {
        self.width as f64
    }

    /// Highest addressable position
    #[inline]
    pub fn max_position(&self) -> f64 {
        (self.width - 1) as f64
    }

    /// Position at the middle of the strip
    pub fn center(&self) -> f64 {
        self.max_position() / 2.0
    }
}

impl TryFrom<u32> for Field {
    type Error = FieldError;

    fn try_from(width: u32) -> Result<Self, Self::Error> {
        Field::new(width)
    }
}

impl From<Field> for u32 {
    fn from(field: Field) -> u32 {
        field.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(Field::new(0), Err(FieldError::EmptyField));
    }

    #[test]
    fn test_bounds() {
        let field = Field::new(100).unwrap();
        assert_eq!(field.width(), 100);
        assert_eq!(field.max_position(), 99.0);
        assert_eq!(field.center(), 49.5);
    }

    #[test]
    fn test_deserialize_validates() {
        let field: Field = serde_json::from_str("60").unwrap();
        assert_eq!(field.width(), 60);
        assert!(serde_json::from_str::<Field>("0").is_err());
    }
}
