pub mod angle_2d;
pub mod arc_2d;

use std::f64::consts::PI;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Threshold below which a length, radius or displacement is treated as zero.
pub const EPSILON: f64 = 1e-5;

/// A full turn in radians.
pub const TAU: f64 = 2.0 * PI;

/// Converts degrees to radians.
#[must_use]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Converts radians to degrees.
#[must_use]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Returns `-1`, `0` or `1` following the sign of `v`.
///
/// Unlike [`f64::signum`], zero maps to zero.
#[must_use]
pub fn sign(v: f64) -> f64 {
    if v < 0.0 {
        -1.0
    } else if v > 0.0 {
        1.0
    } else {
        0.0
    }
}
