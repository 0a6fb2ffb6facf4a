//! Pixel rectangles.

use glam::DVec2;

/// Axis-aligned rectangle in pixels, relative to the grid container.
///
/// Used for drag previews only; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    #[cfg_attr(feature = "serde", serde(rename = "left"))]
    pub x: f64,
    #[cfg_attr(feature = "serde", serde(rename = "top"))]
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Create bounds with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create bounds from position and size vectors.
    pub fn from_vecs(position: DVec2, size: DVec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the bounds.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}
