pub mod error;
pub mod geometry;
pub mod math;
pub mod path;
pub mod render;
pub mod tessellation;

pub use error::{RejectedInput, Result};
pub use geometry::{BoundingBox, PathVector, Turn};
pub use path::PathBuilder;
pub use render::{DrawSurface, Pen, PixmapSurface, RenderStyle, Rgba};
pub use tessellation::{ArcTessellation, Polygon, StrokeOutline};
