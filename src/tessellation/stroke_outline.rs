use std::f64::consts::FRAC_PI_2;

use crate::geometry::PathVector;
use crate::math::angle_2d::{lateral_points, mid_angle};
use crate::math::{Point2, EPSILON};

use super::Polygon;

/// Builds the constant-width outline of a polyline as one closed polygon.
///
/// Each path point is pushed sideways on both sides:
/// - endpoints by half the width, perpendicular to their segment;
/// - interior points along the bisector of the incoming and outgoing
///   headings, by `half_width / cos(disparity)` (miter join).
///
/// When the two headings nearly reverse (`cos(disparity) <= EPSILON`) the
/// miter would be unbounded. The bisector is then turned a quarter turn and
/// the offset falls back to `half_width`. This is an approximation at sharp
/// reversals, not an exact outline.
///
/// The polygon lists the left offsets forward, then the right offsets
/// backward. Self-intersections are left as they are.
#[derive(Debug)]
pub struct StrokeOutline<'a> {
    points: &'a [Point2],
    vectors: &'a [PathVector],
    width: f64,
}

impl<'a> StrokeOutline<'a> {
    /// Creates a new stroke outline operation.
    ///
    /// `vectors[i]` must describe the segment from `points[i]` to `points[i + 1]`.
    #[must_use]
    pub fn new(points: &'a [Point2], vectors: &'a [PathVector], width: f64) -> Self {
        Self {
            points,
            vectors,
            width,
        }
    }

    /// Executes the operation.
    ///
    /// Returns an empty polygon when fewer than 2 points are given.
    #[must_use]
    pub fn execute(&self) -> Polygon {
        let n = self.points.len();
        if n < 2 {
            return Polygon::new();
        }
        debug_assert_eq!(self.vectors.len(), n - 1, "one vector per segment");

        let half_width = self.width / 2.0;
        let mut sides = Vec::with_capacity(n);

        sides.push(lateral_points(&self.points[0], half_width, self.vectors[0].heading));
        for i in 1..n - 1 {
            let (disparity, mut bisector) =
                mid_angle(self.vectors[i].heading, self.vectors[i - 1].heading);
            let cos = disparity.cos();
            let offset = if cos > EPSILON {
                half_width / cos
            } else {
                bisector += FRAC_PI_2;
                half_width
            };
            sides.push(lateral_points(&self.points[i], offset, bisector));
        }
        sides.push(lateral_points(
            &self.points[n - 1],
            half_width,
            self.vectors[n - 2].heading,
        ));

        let mut polygon = Polygon::with_capacity(2 * n);
        polygon.extend(sides.iter().map(|(left, _)| *left));
        polygon.extend(sides.iter().rev().map(|(_, right)| *right));
        polygon
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f64 = 1e-9;

    fn assert_point(p: &Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(p.x, x, epsilon = TOL);
        assert_abs_diff_eq!(p.y, y, epsilon = TOL);
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        let points = [Point2::origin()];
        assert!(StrokeOutline::new(&points, &[], 4.0).execute().is_empty());
    }

    #[test]
    fn straight_segment_is_rectangle() {
        let points = [Point2::origin(), Point2::new(10.0, 0.0)];
        let vectors = [PathVector::new(10.0, 0.0)];
        let polygon = StrokeOutline::new(&points, &vectors, 2.0).execute();

        assert_eq!(polygon.len(), 4);
        assert_point(&polygon[0], 0.0, -1.0);
        assert_point(&polygon[1], 10.0, -1.0);
        assert_point(&polygon[2], 10.0, 1.0);
        assert_point(&polygon[3], 0.0, 1.0);
    }

    #[test]
    fn right_angle_uses_miter() {
        let points = [
            Point2::origin(),
            Point2::new(100.0, 0.0),
            Point2::new(100.0, 50.0),
        ];
        let vectors = [PathVector::new(100.0, 0.0), PathVector::new(50.0, FRAC_PI_2)];
        let polygon = StrokeOutline::new(&points, &vectors, 10.0).execute();

        assert_eq!(polygon.len(), 6);
        assert_point(&polygon[0], 0.0, -5.0);
        assert_point(&polygon[1], 105.0, -5.0);
        assert_point(&polygon[2], 105.0, 50.0);
        assert_point(&polygon[3], 95.0, 50.0);
        assert_point(&polygon[4], 95.0, 5.0);
        assert_point(&polygon[5], 0.0, 5.0);
    }

    #[test]
    fn collinear_interior_point_keeps_half_width() {
        let points = [
            Point2::origin(),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        ];
        let vectors = [PathVector::new(5.0, 0.0), PathVector::new(5.0, 0.0)];
        let polygon = StrokeOutline::new(&points, &vectors, 4.0).execute();

        assert_point(&polygon[1], 5.0, -2.0);
        assert_point(&polygon[4], 5.0, 2.0);
    }

    // Known approximation: a full reversal falls back to a quarter-turned
    // bisector and a plain half-width offset instead of an unbounded miter.
    #[test]
    fn reversal_falls_back_to_half_width() {
        let points = [
            Point2::origin(),
            Point2::new(10.0, 0.0),
            Point2::new(0.0, 0.0),
        ];
        let vectors = [PathVector::new(10.0, 0.0), PathVector::new(10.0, PI)];
        let polygon = StrokeOutline::new(&points, &vectors, 2.0).execute();

        assert_eq!(polygon.len(), 6);
        for p in &polygon {
            assert!(p.coords.norm() < 11.0, "offset stays bounded: {p:?}");
        }
        let apex_left = polygon[1];
        let apex_right = polygon[4];
        assert_abs_diff_eq!((apex_left - points[1]).norm(), 1.0, epsilon = TOL);
        assert_abs_diff_eq!((apex_right - points[1]).norm(), 1.0, epsilon = TOL);
    }
}
