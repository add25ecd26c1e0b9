//! Drawing a path onto an external surface.
//!
//! The path only issues primitive calls through [`DrawSurface`]; the
//! embedding application owns the surface. [`PixmapSurface`] adapts a
//! `tiny_skia::Pixmap`, and [`PathBuilder::to_pixmap`] allocates one sized to
//! the path.

mod pixmap;
mod style;

pub use pixmap::PixmapSurface;
pub use style::{Pen, RenderStyle, Rgba};

use crate::geometry::BoundingBox;
use crate::math::angle_2d::point_from_vector;
use crate::math::{Point2, EPSILON};
use crate::path::PathBuilder;

/// Primitive drawing operations used to render a path.
///
/// Coordinates are in the path's local frame.
pub trait DrawSurface {
    /// Strokes the outline of an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: &BoundingBox, pen: &Pen);

    /// Strokes a straight line.
    fn stroke_line(&mut self, from: &Point2, to: &Point2, pen: &Pen);

    /// Fills a disc without outline.
    fn fill_circle(&mut self, center: &Point2, radius: f64, color: Rgba);
}

impl PathBuilder {
    /// Draws the bounding box, the polyline, the point markers and the
    /// entry/exit heading arrows.
    ///
    /// Does nothing when the path is not valid.
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, style: &RenderStyle) {
        if !self.is_valid() {
            return;
        }
        surface.stroke_rect(self.bounding_box(), &style.bounding_box_pen);

        for pair in self.points().windows(2) {
            surface.stroke_line(&pair[0], &pair[1], &style.path_pen);
        }

        if style.point_radius > EPSILON {
            for point in self.points() {
                surface.fill_circle(point, style.point_radius, style.point_color);
            }
        }

        self.draw_arrows(surface, style, &self.exit_point());
    }

    /// Like [`draw`](Self::draw), but rebuilds each point by walking the
    /// segment vectors from the entry point.
    ///
    /// Useful to check that the vectors alone reproduce the path.
    pub fn draw_from_vectors<S: DrawSurface + ?Sized>(&self, surface: &mut S, style: &RenderStyle) {
        if !self.is_valid() {
            return;
        }
        surface.stroke_rect(self.bounding_box(), &style.bounding_box_pen);

        let draw_points = style.point_radius > EPSILON;
        let mut current = self.entry_point();
        for vector in self.vectors() {
            let next = vector.end_from(&current);
            surface.stroke_line(&current, &next, &style.path_pen);
            if draw_points {
                surface.fill_circle(&current, style.point_radius, style.point_color);
            }
            current = next;
        }
        if draw_points {
            surface.fill_circle(&current, style.point_radius, style.point_color);
        }

        self.draw_arrows(surface, style, &current);
    }

    fn draw_arrows<S: DrawSurface + ?Sized>(&self, surface: &mut S, style: &RenderStyle, exit: &Point2) {
        draw_arrow(
            surface,
            &self.entry_point(),
            self.entry_orientation(),
            style.arrow_length,
            &style.entry_pen,
        );
        draw_arrow(
            surface,
            exit,
            self.exit_orientation(),
            style.arrow_length,
            &style.exit_pen,
        );
    }
}

/// Draws a shaft of `length` along `heading` from `origin` with a two-stroke head.
fn draw_arrow<S: DrawSurface + ?Sized>(
    surface: &mut S,
    origin: &Point2,
    heading: f64,
    length: f64,
    pen: &Pen,
) {
    let (sin, cos) = heading.sin_cos();
    let local = |x: f64, y: f64| Point2::new(origin.x + x * cos - y * sin, origin.y + x * sin + y * cos);

    let tip = point_from_vector(origin, length, heading);
    surface.stroke_line(origin, &tip, pen);
    surface.stroke_line(&tip, &local(length * 0.75, length * 0.15), pen);
    surface.stroke_line(&tip, &local(length * 0.75, -length * 0.15), pen);
}
