//! 2D circular-arc math for path tessellation.
//!
//! Sweep convention follows the path's heading frame:
//! - `sweep > 0`: clockwise turn, center on the right of the heading
//! - `sweep < 0`: counter-clockwise turn, center on the left

use std::f64::consts::FRAC_PI_2;

use super::angle_2d::{heading_between, point_from_vector};
use super::{sign, Point2};

/// Length of the chord subtending `angle` on a circle of `radius`.
#[must_use]
pub fn chord_length(radius: f64, angle: f64) -> f64 {
    2.0 * radius * (angle.abs() / 2.0).sin()
}

/// Length of the arc of `radius` spanning `sweep`.
#[must_use]
pub fn arc_length(radius: f64, sweep: f64) -> f64 {
    radius * sweep.abs()
}

/// Center of the turn of `radius` starting at `start` with the given heading.
///
/// The center lies a quarter turn from the heading, on the side given by the
/// sign of `sweep`.
#[must_use]
pub fn turn_center(start: &Point2, radius: f64, heading: f64, sweep: f64) -> Point2 {
    point_from_vector(start, radius, heading + sign(sweep) * FRAC_PI_2)
}

/// Number of chords needed so that none is longer than `min_arc_length`
/// along the arc.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn segment_count_for_arc_length(radius: f64, sweep: f64, min_arc_length: f64) -> usize {
    (arc_length(radius, sweep) / min_arc_length).ceil() as usize
}

/// Tessellates the arc starting at `start` into `segments` equal-angle chords.
///
/// Returns the `segments` arc points following `start`; the start point itself
/// is not included. Each point is evaluated from the center directly rather
/// than by stepping from the previous one.
#[must_use]
pub fn arc_points(
    start: &Point2,
    radius: f64,
    heading: f64,
    sweep: f64,
    segments: usize,
) -> Vec<Point2> {
    let center = turn_center(start, radius, heading, sweep);
    let start_angle = heading_between(&center, start);
    #[allow(clippy::cast_precision_loss)]
    let step = sweep / segments as f64;

    (1..=segments)
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let angle = start_angle + step * k as f64;
            point_from_vector(&center, radius, angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn chord_of_half_turn_is_diameter() {
        assert_abs_diff_eq!(chord_length(3.0, PI), 6.0, epsilon = TOL);
        assert_abs_diff_eq!(chord_length(3.0, -PI), 6.0, epsilon = TOL);
    }

    #[test]
    fn clockwise_center_is_right_of_heading() {
        let c = turn_center(&Point2::origin(), 50.0, 0.0, FRAC_PI_2);
        assert_abs_diff_eq!(c.x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(c.y, 50.0, epsilon = TOL);

        let c = turn_center(&Point2::origin(), 50.0, 0.0, -FRAC_PI_2);
        assert_abs_diff_eq!(c.y, -50.0, epsilon = TOL);
    }

    #[test]
    fn quarter_arc_ends_on_turn_side() {
        let pts = arc_points(&Point2::origin(), 50.0, 0.0, FRAC_PI_2, 4);
        assert_eq!(pts.len(), 4);
        let end = pts[3];
        assert_abs_diff_eq!(end.x, 50.0, epsilon = TOL);
        assert_abs_diff_eq!(end.y, 50.0, epsilon = TOL);
    }

    #[test]
    fn arc_points_are_chord_length_apart() {
        let start = Point2::new(10.0, -4.0);
        let pts = arc_points(&start, 7.0, 0.3, -1.2, 6);
        let expected = chord_length(7.0, -1.2 / 6.0);
        let mut prev = start;
        for p in pts {
            assert_abs_diff_eq!((p - prev).norm(), expected, epsilon = TOL);
            prev = p;
        }
    }

    #[test]
    fn segment_count_rounds_up() {
        // quarter arc of radius 10 is ~15.708 long
        assert_eq!(segment_count_for_arc_length(10.0, FRAC_PI_2, 5.0), 4);
        assert_eq!(segment_count_for_arc_length(10.0, -FRAC_PI_2, 7.0), 3);
    }
}
