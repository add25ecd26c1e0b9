use crate::math::{Point2, Vector2};

/// An axis-aligned bounding rectangle in the path's local frame.
///
/// `min` is the top-left corner and `max` the bottom-right one (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl BoundingBox {
    /// Creates a degenerate box containing only `point`.
    #[must_use]
    pub fn at(point: Point2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Grows the box to contain `point`.
    pub fn extend(&mut self, point: &Point2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.min.x
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.min.y
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.max.x
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.max.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Width and height as a vector.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    /// Returns `true` if `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::at(Point2::origin())
    }
}
