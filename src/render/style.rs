/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Stroke color and width for outlines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Rgba,
    pub width: f32,
}

impl Pen {
    #[must_use]
    pub const fn new(color: Rgba, width: f32) -> Self {
        Self { color, width }
    }
}

/// Parameters controlling how a path is drawn or exported.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    /// Pen for the polyline.
    pub path_pen: Pen,
    /// Fill of the point markers.
    pub point_color: Rgba,
    /// Radius of the point markers; markers are skipped at or below epsilon.
    pub point_radius: f64,
    /// Pen for the entry heading arrow.
    pub entry_pen: Pen,
    /// Pen for the exit heading arrow.
    pub exit_pen: Pen,
    /// Length of the heading arrows.
    pub arrow_length: f64,
    /// Pen for the bounding box.
    pub bounding_box_pen: Pen,
    /// Fill of an exported pixmap.
    pub background: Rgba,
    /// Space left around the bounding box in an exported pixmap, in pixels.
    pub margin: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            path_pen: Pen::new(Rgba::rgb(132, 164, 217), 2.0),
            point_color: Rgba::rgb(67, 114, 196),
            point_radius: 2.5,
            entry_pen: Pen::new(Rgba::rgb(198, 17, 198), 3.0),
            exit_pen: Pen::new(Rgba::rgb(208, 109, 42), 3.0),
            arrow_length: 35.0,
            bounding_box_pen: Pen::new(Rgba::rgb(196, 196, 196), 1.0),
            background: Rgba::TRANSPARENT,
            margin: 35,
        }
    }
}
