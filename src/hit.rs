#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::{Point, is_point_in_sticker};
use crate::handles::{Corner, HandleKind, handles};
use crate::sticker::{Sticker, StickerId, StickerStore};

/// Which part of a sticker was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    Resize(Corner),
    Rotate,
}

impl From<HandleKind> for HitPart {
    fn from(kind: HandleKind) -> Self {
        match kind {
            HandleKind::Corner(corner) => Self::Resize(corner),
            HandleKind::Rotate => Self::Rotate,
        }
    }
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub sticker_id: StickerId,
    pub part: HitPart,
}

/// Pointer affordance shown over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    /// Over an unselected sticker; clicking selects it.
    Pointer,
    /// Over the selected sticker's body.
    Move,
    /// Over the rotate handle.
    Grab,
    /// Over a resize corner.
    Resize(Corner),
}

impl Cursor {
    /// CSS `cursor` property value.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pointer => "pointer",
            Self::Move => "move",
            Self::Grab => "grab",
            Self::Resize(Corner::TopLeft) => "nw-resize",
            Self::Resize(Corner::TopRight) => "ne-resize",
            Self::Resize(Corner::BottomLeft) => "sw-resize",
            Self::Resize(Corner::BottomRight) => "se-resize",
        }
    }
}

/// Handle of the selected sticker under `pt`, if any.
fn selected_handle(pt: Point, selected: Option<&Sticker>) -> Option<Hit> {
    let sticker = selected?;
    handles(sticker).find(pt).map(|kind| Hit { sticker_id: sticker.id, part: kind.into() })
}

/// Topmost sticker whose body contains `pt`.
#[must_use]
pub fn topmost_at(pt: Point, stickers: &StickerStore) -> Option<&Sticker> {
    stickers.iter_topmost_first().find(|s| is_point_in_sticker(pt, s))
}

/// Decide what a pointer-down at `pt` lands on.
///
/// The selected sticker wins first: its resize handles (TL, TR, BL, BR),
/// then its rotate handle, then its body, even where another sticker
/// overlaps it. Otherwise the body of the topmost sticker under the point.
/// Handles of unselected stickers are not interactive.
#[must_use]
pub fn hit_test(pt: Point, stickers: &StickerStore, selected_id: Option<StickerId>) -> Option<Hit> {
    let selected = selected_id.and_then(|id| stickers.get(&id));
    if let Some(hit) = selected_handle(pt, selected) {
        return Some(hit);
    }
    if let Some(s) = selected.filter(|s| is_point_in_sticker(pt, s)) {
        return Some(Hit { sticker_id: s.id, part: HitPart::Body });
    }
    topmost_at(pt, stickers).map(|s| Hit { sticker_id: s.id, part: HitPart::Body })
}

/// Resolve the hover cursor for an idle pointer at `pt`.
///
/// Shows what a pointer-down at the same spot would do.
#[must_use]
pub fn resolve_cursor(pt: Point, stickers: &StickerStore, selected_id: Option<StickerId>) -> Cursor {
    match hit_test(pt, stickers, selected_id) {
        Some(Hit { part: HitPart::Resize(corner), .. }) => Cursor::Resize(corner),
        Some(Hit { part: HitPart::Rotate, .. }) => Cursor::Grab,
        Some(Hit { sticker_id, part: HitPart::Body }) if Some(sticker_id) == selected_id => Cursor::Move,
        Some(Hit { part: HitPart::Body, .. }) => Cursor::Pointer,
        None => Cursor::Default,
    }
}
