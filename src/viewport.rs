#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::geom::Point;

/// On-screen placement of the canvas element.
///
/// The canvas has a fixed intrinsic raster size but is displayed at whatever
/// CSS size the page layout gives it. Pointer events arrive in client
/// coordinates and must be scaled into canvas pixels before hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Client-space x of the canvas element's left edge.
    pub left: f64,
    /// Client-space y of the canvas element's top edge.
    pub top: f64,
    /// Displayed width in CSS pixels.
    pub display_width: f64,
    /// Displayed height in CSS pixels.
    pub display_height: f64,
    /// Intrinsic canvas width in raster pixels.
    pub canvas_width: f64,
    /// Intrinsic canvas height in raster pixels.
    pub canvas_height: f64,
}

impl Viewport {
    /// A viewport showing the canvas at its intrinsic size at the origin.
    #[must_use]
    pub fn identity(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            display_width: canvas_width,
            display_height: canvas_height,
            canvas_width,
            canvas_height,
        }
    }

    /// Horizontal and vertical `intrinsic / displayed` ratios.
    ///
    /// A collapsed element (zero display size) maps 1:1.
    #[must_use]
    pub fn scale(&self) -> (f64, f64) {
        let sx = if self.display_width > 0.0 { self.canvas_width / self.display_width } else { 1.0 };
        let sy = if self.display_height > 0.0 { self.canvas_height / self.display_height } else { 1.0 };
        (sx, sy)
    }

    /// Convert a client-space point (CSS pixels) to canvas raster coordinates.
    #[must_use]
    pub fn client_to_canvas(&self, client: Point) -> Point {
        let (sx, sy) = self.scale();
        Point {
            x: (client.x - self.left) * sx,
            y: (client.y - self.top) * sy,
        }
    }
}
