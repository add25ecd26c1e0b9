use tiny_skia::{
    Color, FillRule, Paint, PathBuilder as SkPathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::geometry::BoundingBox;
use crate::math::Point2;
use crate::path::PathBuilder;

use super::{DrawSurface, Pen, RenderStyle, Rgba};

fn to_color(color: Rgba) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(to_color(color));
    paint.anti_alias = true;
    paint
}

fn stroke(pen: &Pen) -> Stroke {
    Stroke {
        width: pen.width,
        ..Default::default()
    }
}

/// Pixels along one side: the rounded `extent` plus `margin` on both ends.
///
/// `None` when the result does not fit in `u32`.
fn padded_extent(extent: f64, margin: u32) -> Option<u32> {
    let extent = extent.round();
    if !(0.0..=f64::from(u32::MAX)).contains(&extent) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let extent = extent as u32;
    margin.checked_mul(2)?.checked_add(extent)
}

/// [`DrawSurface`] drawing into a `tiny_skia::Pixmap`.
///
/// Path coordinates are mapped to pixels through `transform`.
pub struct PixmapSurface<'a> {
    pixmap: &'a mut Pixmap,
    transform: Transform,
}

impl<'a> PixmapSurface<'a> {
    /// Creates a surface drawing with the given path-to-pixel transform.
    #[must_use]
    pub fn new(pixmap: &'a mut Pixmap, transform: Transform) -> Self {
        Self { pixmap, transform }
    }
}

#[allow(clippy::cast_possible_truncation)]
impl DrawSurface for PixmapSurface<'_> {
    fn stroke_rect(&mut self, rect: &BoundingBox, pen: &Pen) {
        let path = Rect::from_ltrb(
            rect.left() as f32,
            rect.top() as f32,
            rect.right() as f32,
            rect.bottom() as f32,
        )
        .map(SkPathBuilder::from_rect);
        if let Some(path) = path {
            self.pixmap
                .stroke_path(&path, &paint(pen.color), &stroke(pen), self.transform, None);
        }
    }

    fn stroke_line(&mut self, from: &Point2, to: &Point2, pen: &Pen) {
        let mut pb = SkPathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        if let Some(path) = pb.finish() {
            self.pixmap
                .stroke_path(&path, &paint(pen.color), &stroke(pen), self.transform, None);
        }
    }

    fn fill_circle(&mut self, center: &Point2, radius: f64, color: Rgba) {
        if let Some(path) = SkPathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32) {
            self.pixmap
                .fill_path(&path, &paint(color), FillRule::Winding, self.transform, None);
        }
    }
}

impl PathBuilder {
    /// Renders the path into a new pixmap.
    ///
    /// The pixmap spans the bounding box plus `style.margin` on every side,
    /// is filled with `style.background`, and receives [`draw`](Self::draw)
    /// output with the bounding box's top-left corner at the margin.
    ///
    /// Returns `None` when the path is not valid, its size does not fit in
    /// `u32` pixels, or the pixmap cannot be allocated.
    #[must_use]
    pub fn to_pixmap(&self, style: &RenderStyle) -> Option<Pixmap> {
        if !self.is_valid() {
            return None;
        }

        let bb = self.bounding_box();
        let margin = style.margin;
        let size = bb.size();
        let Some((width, height)) =
            padded_extent(size.x, margin).zip(padded_extent(size.y, margin))
        else {
            tracing::warn!(width = size.x, height = size.y, margin, "pixmap size overflows");
            return None;
        };

        let Some(mut pixmap) = Pixmap::new(width, height) else {
            tracing::warn!(width, height, "cannot allocate pixmap");
            return None;
        };
        pixmap.fill(to_color(style.background));

        #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
        let transform = Transform::from_translate(
            (f64::from(margin) - bb.left()) as f32,
            (f64::from(margin) - bb.top()) as f32,
        );
        self.draw(&mut PixmapSurface::new(&mut pixmap, transform), style);

        tracing::debug!(width, height, points = self.count(), "path rendered to pixmap");
        Some(pixmap)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tessellation::ArcTessellation;

    #[test]
    fn invalid_path_has_no_pixmap() {
        assert!(PathBuilder::new().to_pixmap(&RenderStyle::default()).is_none());
    }

    #[test]
    fn pixmap_is_sized_from_bounding_box() {
        let mut path = PathBuilder::new();
        path.add_l_shape(100.0, 50.0, crate::Turn::Right).unwrap();
        let style = RenderStyle {
            margin: 10,
            ..RenderStyle::default()
        };

        let pixmap = path.to_pixmap(&style).unwrap();
        assert_eq!(pixmap.width(), 120);
        assert_eq!(pixmap.height(), 70);
    }

    #[test]
    fn padded_extent_rounds_and_adds_both_margins() {
        assert_eq!(padded_extent(100.4, 10), Some(120));
        assert_eq!(padded_extent(0.0, 35), Some(70));
        assert_eq!(padded_extent(f64::from(u32::MAX), 1), None);
        assert_eq!(padded_extent(1.0, u32::MAX), None);
    }

    #[test]
    fn oversized_path_has_no_pixmap() {
        let mut path = PathBuilder::new();
        path.add_linear(5.0e9).unwrap();
        assert!(path.to_pixmap(&RenderStyle::default()).is_none());
    }

    #[test]
    fn oversized_margin_has_no_pixmap() {
        let mut path = PathBuilder::new();
        path.add_linear(10.0).unwrap();
        let style = RenderStyle {
            margin: u32::MAX,
            ..RenderStyle::default()
        };
        assert!(path.to_pixmap(&style).is_none());
    }

    #[test]
    fn path_is_painted_over_background() {
        let mut path = PathBuilder::new();
        path.add_circular(40.0, 3.0, ArcTessellation::Segments(24)).unwrap();
        let style = RenderStyle {
            point_radius: 0.0,
            ..RenderStyle::default()
        };

        let pixmap = path.to_pixmap(&style).unwrap();
        // transparent background, so any opaque pixel comes from drawing
        assert!(pixmap.pixels().iter().any(|p| p.alpha() > 0));
        let corner = pixmap.pixel(0, 0).unwrap();
        assert_eq!(corner.alpha(), 0);
    }

    #[test]
    fn straight_path_with_flat_box_renders() {
        let mut path = PathBuilder::new();
        path.add_linear(60.0).unwrap();
        let pixmap = path.to_pixmap(&RenderStyle::default()).unwrap();
        assert_eq!(pixmap.height(), 70);
        let mid = pixmap.pixel(65, 35).unwrap();
        assert!(mid.alpha() > 0);
    }
}
