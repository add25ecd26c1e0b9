//! Incremental construction of piecewise paths.
//!
//! A [`PathBuilder`] starts at the origin of its local frame and grows by
//! straight runs, tessellated circular arcs and composite motifs. Every
//! mutating operation validates its arguments first and either commits
//! completely or returns a [`RejectedInput`](crate::RejectedInput) leaving the
//! builder untouched.

mod composites;
mod degrees;
mod primitives;
pub mod validate;

use crate::geometry::{BoundingBox, PathVector};
use crate::math::angle_2d::{heading_between, point_from_vector};
use crate::math::arc_2d::{arc_points, chord_length};
use crate::math::{rad_to_deg, Point2};
use crate::tessellation::{Polygon, StrokeOutline};

/// Builder owning a piecewise-linear path and its heading bookkeeping.
///
/// Invariants held between calls:
/// - `points` is never empty and `points[0]` is the origin;
/// - `vectors.len() == points.len() - 1`;
/// - `bounding_box` covers every point.
#[derive(Debug, Clone, PartialEq)]
pub struct PathBuilder {
    points: Vec<Point2>,
    vectors: Vec<PathVector>,
    length: f64,
    entry_orientation: f64,
    exit_orientation: f64,
    bounding_box: BoundingBox,
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self {
            points: vec![Point2::origin()],
            vectors: Vec::new(),
            length: 0.0,
            entry_orientation: 0.0,
            exit_orientation: 0.0,
            bounding_box: BoundingBox::default(),
        }
    }
}

impl PathBuilder {
    /// Creates a builder holding only the origin point.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the builder to its initial single-point state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A path is valid once it has at least one segment.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2
    }

    /// Number of points, including the origin.
    #[must_use]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Sum of all segment lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub fn entry_point(&self) -> Point2 {
        self.points[0]
    }

    #[must_use]
    pub fn exit_point(&self) -> Point2 {
        self.last_point()
    }

    /// Heading at the start of the path, in radians.
    #[must_use]
    pub fn entry_orientation(&self) -> f64 {
        self.entry_orientation
    }

    /// Current construction heading, in radians.
    #[must_use]
    pub fn exit_orientation(&self) -> f64 {
        self.exit_orientation
    }

    #[must_use]
    pub fn entry_orientation_deg(&self) -> f64 {
        rad_to_deg(self.entry_orientation)
    }

    #[must_use]
    pub fn exit_orientation_deg(&self) -> f64 {
        rad_to_deg(self.exit_orientation)
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Per-segment `(length, heading)` pairs.
    #[must_use]
    pub fn vectors(&self) -> &[PathVector] {
        &self.vectors
    }

    #[must_use]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Closed outline of the path stroked at `width`.
    ///
    /// Empty when the path is not valid. See [`StrokeOutline`].
    #[must_use]
    pub fn shape(&self, width: f64) -> Polygon {
        if !self.is_valid() {
            return Polygon::new();
        }
        StrokeOutline::new(&self.points, &self.vectors, width).execute()
    }

    fn last_point(&self) -> Point2 {
        // points always holds the origin
        self.points[self.points.len() - 1]
    }

    fn is_at_origin(&self) -> bool {
        self.points.len() == 1
    }

    /// Sets the construction heading, tracking the entry heading while the
    /// path has no segment yet.
    fn commit_orientation(&mut self, heading: f64) {
        self.exit_orientation = heading;
        if self.is_at_origin() {
            self.entry_orientation = heading;
        }
    }

    fn push_segment(&mut self, point: Point2, vector: PathVector) {
        self.points.push(point);
        self.vectors.push(vector);
        self.bounding_box.extend(&point);
    }

    fn commit_linear(&mut self, length: f64) {
        let heading = self.exit_orientation;
        let point = point_from_vector(&self.last_point(), length, heading);
        self.push_segment(point, PathVector::new(length, heading));
        self.length += length;
    }

    fn commit_linear_offset_angle(&mut self, length: f64, angle: f64) {
        self.exit_orientation += angle;
        self.commit_linear(length);
    }

    fn commit_circular(&mut self, radius: f64, sweep: f64, segments: usize) {
        debug_assert!(segments >= 2, "arc needs at least two chords");

        #[allow(clippy::cast_precision_loss)]
        let chord = chord_length(radius, sweep / segments as f64);
        let start = self.last_point();

        for point in arc_points(&start, radius, self.exit_orientation, sweep, segments) {
            let heading = heading_between(&self.last_point(), &point);
            self.push_segment(point, PathVector::new(chord, heading));
        }

        self.exit_orientation += sweep;
        #[allow(clippy::cast_precision_loss)]
        let arc_total = chord * segments as f64;
        self.length += arc_total;
        tracing::trace!(radius, sweep, segments, "arc committed");
    }
}

/// Checks the structural invariants every committed operation must keep.
#[cfg(test)]
fn assert_invariants(builder: &PathBuilder) {
    assert_eq!(builder.vectors().len(), builder.points().len() - 1);
    assert_eq!(builder.points()[0], Point2::origin());
    assert_eq!(builder.is_valid(), builder.count() >= 2);
    for p in builder.points() {
        assert!(p.x.is_finite() && p.y.is_finite(), "{p:?} not finite");
        assert!(builder.bounding_box().contains(p), "{p:?} outside box");
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn new_builder_is_single_origin_point() {
        let builder = PathBuilder::new();
        assert_eq!(builder.count(), 1);
        assert!(!builder.is_valid());
        assert_eq!(builder.entry_point(), Point2::origin());
        assert_eq!(builder.exit_point(), Point2::origin());
        assert!(builder.vectors().is_empty());
        assert_relative_eq!(builder.length(), 0.0);
        assert_relative_eq!(builder.bounding_box().width(), 0.0);
    }

    #[test]
    fn invalid_path_has_empty_shape() {
        assert!(PathBuilder::new().shape(10.0).is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut builder = PathBuilder::new();
        builder.commit_orientation(1.0);
        builder.commit_linear(20.0);
        builder.commit_orientation(-0.5);
        builder.reset();
        assert_eq!(builder, PathBuilder::default());
    }

    #[test]
    fn shape_of_valid_path_closes_both_sides() {
        let mut builder = PathBuilder::new();
        builder.commit_linear(10.0);
        builder.commit_linear_offset_angle(10.0, 0.3);
        assert_eq!(builder.shape(2.0).len(), 2 * builder.count());
    }
}
