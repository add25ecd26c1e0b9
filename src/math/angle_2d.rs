//! Heading math in the path's local frame.
//!
//! Headings are absolute angles in radians. The frame is y-down, so a
//! heading `θ` points along `(cos θ, sin θ)` and positive angles turn
//! clockwise on screen.

use std::f64::consts::FRAC_PI_2;

use super::{sign, Point2, Vector2};

/// Unit direction vector for a heading.
#[must_use]
pub fn direction(heading: f64) -> Vector2 {
    Vector2::new(heading.cos(), heading.sin())
}

/// Point reached by travelling `length` along `heading` from `start`.
#[must_use]
pub fn point_from_vector(start: &Point2, length: f64, heading: f64) -> Point2 {
    start + direction(heading) * length
}

/// Heading of the displacement from `from` to `to`.
#[must_use]
pub fn heading_between(from: &Point2, to: &Point2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x)
}

/// Points offset by `length` on the left (`heading - π/2`) and right
/// (`heading + π/2`) of `center`.
#[must_use]
pub fn lateral_points(center: &Point2, length: f64, heading: f64) -> (Point2, Point2) {
    (
        point_from_vector(center, length, heading - FRAC_PI_2),
        point_from_vector(center, length, heading + FRAC_PI_2),
    )
}

/// Bisector of two headings.
///
/// Returns `(disparity, bisector)` where `disparity` is half the angle
/// between the headings and `bisector` is `heading1` turned by `disparity`
/// toward `heading2`.
#[must_use]
pub fn mid_angle(heading1: f64, heading2: f64) -> (f64, f64) {
    let (sin1, cos1) = heading1.sin_cos();
    let (sin2, cos2) = heading2.sin_cos();

    let dot = cos1 * cos2 + sin1 * sin2;
    // dot of heading1 rotated a quarter turn against heading2
    let dot_prime = -sin1 * cos2 + cos1 * sin2;

    let disparity = dot.clamp(-1.0, 1.0).acos() / 2.0;
    (disparity, heading1 + sign(dot_prime) * disparity)
}
