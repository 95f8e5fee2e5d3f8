//! Sticker model: placed overlay images, their transforms, and the ordered store.
//!
//! A [`Sticker`] is an image drawn over the composed photo strip with its own
//! position, size and rotation. The [`StickerStore`] owns every live sticker
//! in paint order: the last sticker in the store is drawn last and therefore
//! sits on top. Z-order has no separate field; it *is* the store order.
//!
//! Geometry mutators here are called only by the interaction engine
//! ([`crate::engine::EditorCore`]); the renderer and hit-tester only borrow.

#[cfg(test)]
#[path = "sticker_test.rs"]
mod sticker_test;

use std::fmt;

use uuid::Uuid;

use crate::geom::{Point, rotate_point};
use crate::handles::Corner;

/// Unique identifier for a placed sticker.
pub type StickerId = Uuid;

/// Offset of a new sticker's origin from canvas center, as a fraction of its
/// natural size per unit of sticker scale. At the default 0.5 scale this is
/// one fifth of the natural size.
const PLACEMENT_OFFSET_RATIO: f64 = 0.4;

/// Source of a sticker's image (typically the URL it was loaded from).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(pub String);

impl ImageRef {
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A sticker placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    /// Unique identifier for this sticker.
    pub id: StickerId,
    /// Image drawn for this sticker.
    pub image: ImageRef,
    /// Left edge of the unrotated box in canvas pixels.
    pub x: f64,
    /// Top edge of the unrotated box in canvas pixels.
    pub y: f64,
    /// Width of the box in canvas pixels.
    pub width: f64,
    /// Height of the box in canvas pixels.
    pub height: f64,
    /// Clockwise rotation in radians around the box center.
    pub rotation: f64,
    /// Native width / height of the source image.
    pub aspect: f64,
}

impl Sticker {
    /// Place a freshly loaded image at the default position for a canvas of
    /// `canvas_w` × `canvas_h`, sized to `scale` of its natural dimensions.
    ///
    /// Returns `None` when the image reports a non-positive natural size
    /// (a broken or not-yet-decoded image).
    #[must_use]
    pub fn from_image(image: ImageRef, natural_w: f64, natural_h: f64, canvas_w: f64, canvas_h: f64, scale: f64) -> Option<Self> {
        if !(natural_w > 0.0 && natural_h > 0.0 && scale > 0.0) {
            return None;
        }
        let offset = scale * PLACEMENT_OFFSET_RATIO;
        Some(Self {
            id: Uuid::new_v4(),
            image,
            x: canvas_w / 2.0 - natural_w * offset,
            y: canvas_h / 2.0 - natural_h * offset,
            width: natural_w * scale,
            height: natural_h * scale,
            rotation: 0.0,
            aspect: natural_w / natural_h,
        })
    }

    /// Center of the box; the pivot for rotation.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Move the box so its center lands on `center`, keeping its size.
    pub fn set_center(&mut self, center: Point) {
        self.x = center.x - self.width / 2.0;
        self.y = center.y - self.height / 2.0;
    }

    /// Canvas position of `corner` with the sticker's rotation applied.
    #[must_use]
    pub fn corner_point(&self, corner: Corner) -> Point {
        let (dx, dy) = corner.direction();
        let c = self.center();
        let unrotated = Point::new(c.x + dx * self.width / 2.0, c.y + dy * self.height / 2.0);
        rotate_point(unrotated, c, self.rotation)
    }

    /// The rotated outline, clockwise from top-left.
    #[must_use]
    pub fn outline(&self) -> [Point; 4] {
        [
            self.corner_point(Corner::TopLeft),
            self.corner_point(Corner::TopRight),
            self.corner_point(Corner::BottomRight),
            self.corner_point(Corner::BottomLeft),
        ]
    }

    /// Resize by dragging `corner` to `pointer`, keeping the opposite corner
    /// fixed in canvas space.
    ///
    /// The pointer is measured from the opposite corner along the sticker's
    /// own axes. The result keeps the native aspect ratio and never drops
    /// below `min` on either axis.
    pub fn resize_from_corner(&mut self, corner: Corner, pointer: Point, min: f64) {
        let anchor = self.corner_point(corner.opposite());
        let local = rotate_point(pointer, anchor, -self.rotation);
        let (dx, dy) = corner.direction();
        let cand_w = (local.x - anchor.x) * dx;
        let cand_h = (local.y - anchor.y) * dy;

        let (w, h) = fit_aspect(cand_w, cand_h, self.aspect, min);
        let unrotated_center = Point::new(anchor.x + dx * w / 2.0, anchor.y + dy * h / 2.0);
        let center = rotate_point(unrotated_center, anchor, self.rotation);

        self.width = w;
        self.height = h;
        self.set_center(center);
    }

    /// Scale about the center by `factor`.
    ///
    /// Shrinking stops at `min` on the shorter axis; a sticker already at or
    /// below the floor is left alone.
    pub fn scale_about_center(&mut self, factor: f64, min: f64) {
        let center = self.center();
        let (min_w, min_h) = min_size(self.aspect, min);
        let (mut w, mut h) = (self.width * factor, self.height * factor);
        if w < min_w || h < min_h {
            if self.width <= min_w || self.height <= min_h {
                return;
            }
            w = min_w;
            h = min_h;
        }
        self.width = w;
        self.height = h;
        self.set_center(center);
    }
}

/// Force a candidate size onto `aspect`, then apply the `min` floor.
///
/// A candidate wider than the aspect takes its width from the height;
/// otherwise the height follows the width. A non-positive candidate on
/// either axis collapses to the floor.
#[must_use]
pub fn fit_aspect(cand_w: f64, cand_h: f64, aspect: f64, min: f64) -> (f64, f64) {
    let floor = min_size(aspect, min);
    if !(cand_w > 0.0 && cand_h > 0.0) {
        return floor;
    }
    let (w, h) = if cand_w / cand_h > aspect {
        (cand_h * aspect, cand_h)
    } else {
        (cand_w, cand_w / aspect)
    };
    if w < floor.0 || h < floor.1 { floor } else { (w, h) }
}

/// Smallest size with the given aspect whose shorter side is `min`.
#[must_use]
pub fn min_size(aspect: f64, min: f64) -> (f64, f64) {
    if aspect >= 1.0 { (min * aspect, min) } else { (min, min / aspect) }
}

/// Ordered store of placed stickers. Insertion order is paint order.
#[derive(Debug, Clone, Default)]
pub struct StickerStore {
    stickers: Vec<Sticker>,
}

impl StickerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { stickers: Vec::new() }
    }

    /// Append a sticker on top of all others.
    pub fn insert(&mut self, sticker: Sticker) {
        self.stickers.push(sticker);
    }

    /// Remove a sticker by id, returning it if it was present.
    pub fn remove(&mut self, id: &StickerId) -> Option<Sticker> {
        let index = self.position(id)?;
        Some(self.stickers.remove(index))
    }

    /// Return a reference to a sticker by id.
    #[must_use]
    pub fn get(&self, id: &StickerId) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.id == *id)
    }

    /// Return a mutable reference to a sticker by id.
    pub fn get_mut(&mut self, id: &StickerId) -> Option<&mut Sticker> {
        self.stickers.iter_mut().find(|s| s.id == *id)
    }

    /// Index of a sticker in paint order.
    #[must_use]
    pub fn position(&self, id: &StickerId) -> Option<usize> {
        self.stickers.iter().position(|s| s.id == *id)
    }

    /// Move a sticker to the end of the paint order so it draws on top.
    /// Returns false if the id is unknown.
    pub fn bring_to_front(&mut self, id: &StickerId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        let sticker = self.stickers.remove(index);
        self.stickers.push(sticker);
        true
    }

    /// Stickers bottom-first, in the order they are painted.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sticker> {
        self.stickers.iter()
    }

    /// Stickers topmost-first, in the order they are hit-tested.
    pub fn iter_topmost_first(&self) -> impl Iterator<Item = &Sticker> {
        self.stickers.iter().rev()
    }

    /// Remove every sticker.
    pub fn clear(&mut self) {
        self.stickers.clear();
    }

    /// Number of stickers currently placed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stickers.len()
    }

    /// Returns `true` if no stickers are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stickers.is_empty()
    }
}
