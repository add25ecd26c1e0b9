use std::f64::consts::{FRAC_PI_2, PI};

use crate::math::angle_2d::point_from_vector;
use crate::math::Point2;

/// One path segment in polar form: its length and absolute heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathVector {
    pub length: f64,
    /// Absolute heading in radians, clockwise-positive.
    pub heading: f64,
}

impl PathVector {
    #[must_use]
    pub fn new(length: f64, heading: f64) -> Self {
        Self { length, heading }
    }

    /// End point of this segment when it starts at `start`.
    #[must_use]
    pub fn end_from(&self, start: &Point2) -> Point2 {
        point_from_vector(start, self.length, self.heading)
    }
}

/// Turn direction of a composite motif.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Turn {
    /// Clockwise on screen (positive angles).
    #[default]
    Right,
    /// Counter-clockwise on screen (negative angles).
    Left,
}

impl Turn {
    /// `1.0` for a right turn, `-1.0` for a left turn.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    /// Signed quarter turn.
    #[must_use]
    pub fn quarter(self) -> f64 {
        self.sign() * FRAC_PI_2
    }

    /// Signed half turn.
    #[must_use]
    pub fn half(self) -> f64 {
        self.sign() * PI
    }
}
