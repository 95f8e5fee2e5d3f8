//! In-memory raster surface backed by `tiny_skia`.
//!
//! Used for headless compositing: tests, and collaborators that need the
//! finished strip as PNG bytes without a browser canvas.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use crate::geom::Point;
use crate::render::{Rgba, Surface};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The pixel buffer could not be created (zero or oversized dimensions).
    #[error("cannot allocate {width}x{height} surface")]
    Allocation { width: u32, height: u32 },

    /// PNG encoding or decoding failed.
    #[error("png codec failed: {0}")]
    Png(String),
}

/// Create an image filled with a single color.
///
/// # Errors
///
/// Returns [`RenderError::Allocation`] for a zero dimension.
pub fn solid_image(width: u32, height: u32, color: Rgba) -> Result<Pixmap, RenderError> {
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::Allocation { width, height })?;
    pixmap.fill(Color::from_rgba8(color.r, color.g, color.b, color.a));
    Ok(pixmap)
}

/// Decode a PNG into an image usable by [`PixmapSurface`].
///
/// # Errors
///
/// Returns [`RenderError::Png`] if the bytes are not a valid PNG.
pub fn decode_png(bytes: &[u8]) -> Result<Pixmap, RenderError> {
    Pixmap::decode_png(bytes).map_err(|e| RenderError::Png(e.to_string()))
}

/// A canvas-sized RGBA pixel buffer.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Allocate a transparent `width` × `height` surface.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Allocation`] for a zero dimension.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::Allocation { width, height })?;
        Ok(Self { pixmap })
    }

    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[must_use]
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Straight-alpha RGBA of the pixel at `(x, y)`, if in bounds.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        // `Pixmap::pixel` indexes `y * width + x`, so an overlong `x` wraps
        // into the next row.
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Rgba::new(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    /// Encode the current contents as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Png`] if encoding fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap.encode_png().map_err(|e| RenderError::Png(e.to_string()))
    }
}

fn paint_for(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Map an image's pixel grid onto a `width` × `height` box centered on
/// `center`, rotated by `rotation` radians.
#[allow(clippy::cast_possible_truncation)]
fn placement(image: &Pixmap, center: Point, rotation: f64, width: f64, height: f64) -> Transform {
    let sx = width / f64::from(image.width());
    let sy = height / f64::from(image.height());
    let (sin, cos) = rotation.sin_cos();
    let hw = width / 2.0;
    let hh = height / 2.0;
    Transform::from_row(
        (cos * sx) as f32,
        (sin * sx) as f32,
        (-sin * sy) as f32,
        (cos * sy) as f32,
        (center.x - cos * hw + sin * hh) as f32,
        (center.y - sin * hw - cos * hh) as f32,
    )
}

impl Surface for PixmapSurface {
    type Image = Pixmap;
    type Error = RenderError;

    fn clear(&mut self, _width: f64, _height: f64) -> Result<(), RenderError> {
        self.pixmap.fill(Color::TRANSPARENT);
        Ok(())
    }

    fn draw_image(&mut self, image: &Pixmap, x: f64, y: f64, width: f64, height: f64) -> Result<(), RenderError> {
        let center = Point::new(x + width / 2.0, y + height / 2.0);
        self.draw_image_rotated(image, center, 0.0, width, height)
    }

    fn draw_image_rotated(
        &mut self,
        image: &Pixmap,
        center: Point,
        rotation: f64,
        width: f64,
        height: f64,
    ) -> Result<(), RenderError> {
        let transform = placement(image, center, rotation, width, height);
        self.pixmap.draw_pixmap(0, 0, image.as_ref(), &PixmapPaint::default(), transform, None);
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, line_width: f64) -> Result<(), RenderError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            let stroke = Stroke { width: line_width as f32, ..Default::default() };
            self.pixmap.stroke_path(&path, &paint_for(color), &stroke, Transform::identity(), None);
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<(), RenderError> {
        if radius <= 0.0 {
            return Ok(());
        }
        if let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius as f32) {
            self.pixmap.fill_path(&path, &paint_for(color), FillRule::Winding, Transform::identity(), None);
        }
        Ok(())
    }
}
