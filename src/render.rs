//! Rendering: composites the photo, frame, stickers, and selection UI.
//!
//! [`draw`] is a read-only projection of [`EditorCore`]: it borrows the
//! sticker store and selection and never mutates them. Drawing goes through
//! the [`Surface`] trait so the same pipeline targets the browser canvas
//! ([`crate::web::CanvasSurface`]) and an in-memory raster
//! ([`crate::raster::PixmapSurface`]).
//!
//! Surface errors propagate to the caller; a missing image is never an error,
//! it is simply not drawn.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::collections::HashMap;

use crate::consts::{HANDLE_MARKER_RADIUS, SELECTION_LINE_WIDTH};
use crate::engine::EditorCore;
use crate::geom::Point;
use crate::handles::handles;
use crate::sticker::{ImageRef, Sticker};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string, e.g. `rgba(0, 123, 255, 1)`.
    #[must_use]
    pub fn css(self) -> String {
        let alpha = f64::from(self.a) / 255.0;
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

/// Selection outline color.
pub const SELECTION_COLOR: Rgba = Rgba::new(0, 123, 255, 255);

/// Resize handle marker color.
pub const RESIZE_HANDLE_COLOR: Rgba = Rgba::new(0, 123, 255, 255);

/// Rotate handle marker color.
pub const ROTATE_HANDLE_COLOR: Rgba = Rgba::new(255, 149, 0, 255);

/// A drawing target. Coordinates are canvas pixels.
pub trait Surface {
    /// Image type this surface can composite.
    type Image;
    /// Error reported by drawing calls.
    type Error;

    /// Erase the whole `width` × `height` canvas.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Draw `image` stretched into the axis-aligned box at `(x, y)`.
    fn draw_image(&mut self, image: &Self::Image, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Draw `image` at `width` × `height`, centered on `center` and rotated by
    /// `rotation` radians about it.
    fn draw_image_rotated(
        &mut self,
        image: &Self::Image,
        center: Point,
        rotation: f64,
        width: f64,
        height: f64,
    ) -> Result<(), Self::Error>;

    /// Stroke a closed polygon.
    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, line_width: f64) -> Result<(), Self::Error>;

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<(), Self::Error>;

    /// Whether `image` has decoded pixels to draw.
    fn is_image_ready(&self, _image: &Self::Image) -> bool {
        true
    }
}

/// Images supplied by the host's loader, keyed the way the editor refers to them.
pub struct Assets<I> {
    photo: Option<I>,
    frame: Option<I>,
    stickers: HashMap<ImageRef, I>,
}

impl<I> Default for Assets<I> {
    fn default() -> Self {
        Self { photo: None, frame: None, stickers: HashMap::new() }
    }
}

impl<I> Assets<I> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the composed photo strip.
    pub fn set_photo(&mut self, image: I) {
        self.photo = Some(image);
    }

    /// Set the current frame decoration, replacing the previous one.
    pub fn set_frame(&mut self, image: I) {
        self.frame = Some(image);
    }

    /// Register the image for a sticker source.
    pub fn insert_sticker(&mut self, image_ref: ImageRef, image: I) {
        self.stickers.insert(image_ref, image);
    }

    #[must_use]
    pub fn photo(&self) -> Option<&I> {
        self.photo.as_ref()
    }

    #[must_use]
    pub fn frame(&self) -> Option<&I> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn sticker(&self, image_ref: &ImageRef) -> Option<&I> {
        self.stickers.get(image_ref)
    }
}

/// Draw the full scene: photo, frame, stickers in paint order, selection UI.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn draw<S: Surface>(surface: &mut S, core: &EditorCore, assets: &Assets<S::Image>) -> Result<(), S::Error> {
    let (width, height) = core.canvas_size();

    // Layer 1: clear and photo strip.
    surface.clear(width, height)?;
    if let Some(photo) = assets.photo().filter(|p| surface.is_image_ready(p)) {
        surface.draw_image(photo, 0.0, 0.0, width, height)?;
    }

    // Layer 2: frame decoration, only once the current frame has loaded.
    if core.is_frame_ready() {
        if let Some(frame) = assets.frame().filter(|f| surface.is_image_ready(f)) {
            surface.draw_image(frame, 0.0, 0.0, width, height)?;
        }
    }

    // Layer 3: stickers bottom-first.
    for sticker in core.stickers.iter() {
        let Some(image) = assets.sticker(&sticker.image).filter(|i| surface.is_image_ready(i)) else {
            continue;
        };
        surface.draw_image_rotated(image, sticker.center(), sticker.rotation, sticker.width, sticker.height)?;
    }

    // Layer 4: selection UI, hidden mid-gesture.
    if let Some(sticker) = core.decorated_sticker() {
        draw_selection(surface, sticker)?;
    }

    Ok(())
}

fn draw_selection<S: Surface>(surface: &mut S, sticker: &Sticker) -> Result<(), S::Error> {
    surface.stroke_polygon(&sticker.outline(), SELECTION_COLOR, SELECTION_LINE_WIDTH)?;

    let set = handles(sticker);
    for corner in [set.top_left, set.top_right, set.bottom_left, set.bottom_right] {
        surface.fill_circle(corner, HANDLE_MARKER_RADIUS, RESIZE_HANDLE_COLOR)?;
    }
    surface.fill_circle(set.rotate, HANDLE_MARKER_RADIUS, ROTATE_HANDLE_COLOR)
}
