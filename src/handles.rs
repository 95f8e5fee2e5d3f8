//! Interactive control points derived from a sticker's transform.
//!
//! Every selected sticker exposes five handles: one resize handle on each
//! corner and a rotate handle above the top edge. Handles are never stored;
//! [`handles`] recomputes them from the current transform whenever the
//! hit-tester or renderer needs them.

#[cfg(test)]
#[path = "handles_test.rs"]
mod handles_test;

use crate::consts::{HANDLE_SIZE, ROTATE_HANDLE_OFFSET};
use crate::geom::Point;
use crate::sticker::Sticker;

/// A corner of a sticker's box, named in the sticker's unrotated frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Hit-test priority order.
    pub const ALL: [Corner; 4] = [Corner::TopLeft, Corner::TopRight, Corner::BottomLeft, Corner::BottomRight];

    /// The diagonally opposite corner; the fixed anchor while resizing.
    #[must_use]
    pub fn opposite(self) -> Corner {
        match self {
            Self::TopLeft => Self::BottomRight,
            Self::TopRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopRight,
            Self::BottomRight => Self::TopLeft,
        }
    }

    /// Unit direction of this corner from the box center, per axis.
    #[must_use]
    pub fn direction(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (-1.0, -1.0),
            Self::TopRight => (1.0, -1.0),
            Self::BottomLeft => (-1.0, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }
}

/// Which kind of handle a point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Corner(Corner),
    Rotate,
}

/// The five handle positions of one sticker, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSet {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub rotate: Point,
}

impl HandleSet {
    /// Position of the resize handle on `corner`.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// All handles in hit-test priority order: TL, TR, BL, BR, rotate.
    #[must_use]
    pub fn in_priority_order(&self) -> [(HandleKind, Point); 5] {
        [
            (HandleKind::Corner(Corner::TopLeft), self.top_left),
            (HandleKind::Corner(Corner::TopRight), self.top_right),
            (HandleKind::Corner(Corner::BottomLeft), self.bottom_left),
            (HandleKind::Corner(Corner::BottomRight), self.bottom_right),
            (HandleKind::Rotate, self.rotate),
        ]
    }

    /// First handle whose tolerance window contains `p`, if any.
    #[must_use]
    pub fn find(&self, p: Point) -> Option<HandleKind> {
        self.in_priority_order()
            .into_iter()
            .find(|(_, handle)| within_handle(p, *handle))
            .map(|(kind, _)| kind)
    }
}

/// Compute the handle layout for `sticker`.
///
/// The rotate handle is the midpoint of the rotated top edge moved straight
/// up by [`ROTATE_HANDLE_OFFSET`] in canvas space. The offset itself is not
/// rotated, so on a tilted sticker the handle drifts off the sticker's
/// vertical axis.
#[must_use]
pub fn handles(sticker: &Sticker) -> HandleSet {
    let top_left = sticker.corner_point(Corner::TopLeft);
    let top_right = sticker.corner_point(Corner::TopRight);
    let top_mid = top_left.midpoint(top_right);
    HandleSet {
        top_left,
        top_right,
        bottom_left: sticker.corner_point(Corner::BottomLeft),
        bottom_right: sticker.corner_point(Corner::BottomRight),
        rotate: Point::new(top_mid.x, top_mid.y - ROTATE_HANDLE_OFFSET),
    }
}

/// Square tolerance test of half-width [`HANDLE_SIZE`] around `handle`.
#[must_use]
pub fn within_handle(p: Point, handle: Point) -> bool {
    (p.x - handle.x).abs() <= HANDLE_SIZE && (p.y - handle.y).abs() <= HANDLE_SIZE
}
