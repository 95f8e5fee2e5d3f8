//! Plane geometry: points, rotation about a pivot, and rotated containment.
//!
//! Angles are radians, positive clockwise on screen (canvas Y grows down),
//! which matches `CanvasRenderingContext2d::rotate`.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use crate::sticker::Sticker;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

/// Rotate `p` about `center` by `angle` radians.
#[must_use]
pub fn rotate_point(p: Point, center: Point, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

/// Inclusive axis-aligned bounds test.
#[must_use]
pub fn point_in_rect(p: Point, x: f64, y: f64, width: f64, height: f64) -> bool {
    p.x >= x && p.x <= x + width && p.y >= y && p.y <= y + height
}

/// Whether `p` lies inside the sticker's rotated rectangle.
///
/// The query point is carried into the sticker's unrotated frame by the
/// inverse rotation about its center, then bounds-tested. A zero rotation
/// skips the transform.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_point_in_sticker(p: Point, sticker: &Sticker) -> bool {
    let local = if sticker.rotation == 0.0 {
        p
    } else {
        rotate_point(p, sticker.center(), -sticker.rotation)
    };
    point_in_rect(local, sticker.x, sticker.y, sticker.width, sticker.height)
}
