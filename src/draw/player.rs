//! Player paddles
//!
//! A paddle covers its half of the strip and is only drawn while its button is
//! held. A hidden paddle leaves the base color untouched.

use serde::{Deserialize, Serialize};

use super::{Drawable, Line, ZIndex};
use crate::color::Rgba;
use crate::consts::{LEFT_PADDLE_COLOR, PADDLE_Z, RIGHT_PADDLE_COLOR};
use crate::error::FieldError;
use crate::field::Field;

/// Which end of the strip a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    side: Side,
    line: Line,
    visible: bool,
}

impl Player {
    /// Paddle for `side`. The left half is `[0, width/2]`, the right half is
    /// `[width/2 + 1, width]`.
    pub fn new(side: Side, field: &Field) -> Result<Self, FieldError> {
        let half = (field.width() / 2) as f64;
        let line = match side {
            Side::Left => Line::new(0.0, half, LEFT_PADDLE_COLOR, PADDLE_Z)?,
            Side::Right => Line::new(half + 1.0, field.scale(), RIGHT_PADDLE_COLOR, PADDLE_Z)?,
        };

        Ok(Self {
            side,
            line,
            visible: false,
        })
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Drawable for Player {
    fn color_at(&self, position: f64, base: Rgba) -> Rgba {
        if self.visible {
            self.line.color_at(position, base)
        } else {
            base
        }
    }

    fn z_index(&self) -> ZIndex {
        self.line.z_index()
    }

    fn animate(&mut self, _dt: f64) -> bool {
        true
    }
}
