//! The ball
//!
//! Moves at constant speed along the strip and mirrors off both ends. The
//! reflection keeps the overshoot, so a ball that passes the wall by some
//! distance during a frame lands that same distance back inside.

use super::{Drawable, ZIndex};
use crate::color::{Rgba, blend};
use crate::consts::{BALL_SPEED_DIVISOR, BALL_Z};
use crate::error::FieldError;
use crate::field::Field;

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Current position, in strip positions
    position: f64,
    /// Signed speed in positions per second
    velocity: f64,
    /// Highest reachable position; the lowest is 0
    max_position: f64,
    z_index: ZIndex,
}

impl Ball {
    /// Ball at position 0 heading right at `width / 3` positions per second
    pub fn new(field: &Field) -> Self {
        Self {
            position: 0.0,
            velocity: field.scale() / BALL_SPEED_DIVISOR,
            max_position: field.max_position(),
            z_index: BALL_Z,
        }
    }

    /// Ball at an explicit position and velocity
    pub fn launched(field: &Field, position: f64, velocity: f64) -> Result<Self, FieldError> {
        let mut ball = Self::new(field);
        ball.place(position, velocity)?;
        Ok(ball)
    }

    /// Move the ball to `position` with `velocity`
    pub fn place(&mut self, position: f64, velocity: f64) -> Result<(), FieldError> {
        if !velocity.is_finite() {
            return Err(FieldError::NonFinite {
                what: "velocity",
                value: velocity,
            });
        }
        if !(0.0..=self.max_position).contains(&position) {
            return Err(FieldError::OutOfField {
                position,
                max: self.max_position,
            });
        }

        self.position = position;
        self.velocity = velocity;
        Ok(())
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn max_position(&self) -> f64 {
        self.max_position
    }

    /// Speed magnitude, independent of direction
    pub fn speed(&self) -> f64 {
        self.velocity.abs()
    }
}

impl Drawable for Ball {
    /// White dot with linear falloff: full alpha at the ball, none one position away
    fn color_at(&self, position: f64, base: Rgba) -> Rgba {
        let distance = (position - self.position).abs();
        if distance < 1.0 {
            let alpha = ((1.0 - distance) * 255.0) as u8;
            blend(Rgba::WHITE.with_alpha(alpha), base)
        } else {
            base
        }
    }

    fn z_index(&self) -> ZIndex {
        self.z_index
    }

    fn animate(&mut self, dt: f64) -> bool {
        if dt <= 0.0 || !dt.is_finite() {
            return true;
        }
        if self.max_position <= 0.0 {
            self.position = 0.0;
            return true;
        }

        let target = self.position + self.velocity * dt;
        if !target.is_finite() {
            log::warn!(
                "Ball step of {} overflowed, staying at {:.2}",
                self.velocity * dt,
                self.position
            );
            return true;
        }
        if (0.0..=self.max_position).contains(&target) {
            self.position = target;
            return true;
        }

        // Unfold the track into a circle of two lengths: the first half is
        // travelled in the original direction, the second half mirrored.
        // Any number of walls can be crossed in one step.
        let period = 2.0 * self.max_position;
        let folded = target.rem_euclid(period);
        if folded <= self.max_position {
            self.position = folded;
        } else {
            self.position = period - folded;
            self.velocity = -self.velocity;
        }
        log::debug!("Ball reflected from {target:.2} to {:.2}", self.position);

        true
    }
}
