mod stroke_outline;

pub use stroke_outline::StrokeOutline;

use crate::math::arc_2d::segment_count_for_arc_length;
use crate::math::Point2;

/// How a circular arc is split into chords.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArcTessellation {
    /// A fixed number of equal-angle chords.
    Segments(usize),
    /// As many chords as needed for each to span at most this arc length.
    MinArcLength(f64),
}

impl ArcTessellation {
    /// Resolves the policy to a chord count for an arc of `radius` and `sweep`.
    #[must_use]
    pub fn segment_count(self, radius: f64, sweep: f64) -> usize {
        match self {
            Self::Segments(n) => n,
            Self::MinArcLength(min) => segment_count_for_arc_length(radius, sweep, min),
        }
    }
}

/// A closed polygon; the last vertex connects back to the first.
pub type Polygon = Vec<Point2>;
