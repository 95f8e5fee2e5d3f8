//! Input model: events, keys, selection, and the gesture state machine.
//!
//! [`Event`] is everything the editor reacts to, already mapped into canvas
//! pixel space. [`InputState`] is the gesture in progress between
//! pointer-down and pointer-up, carrying the scratch data the gesture needs.
//! The transitions themselves live in [`crate::engine::EditorCore::dispatch`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::handles::Corner;
use crate::sticker::StickerId;

/// A keyboard key, as reported by the browser's `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The keyboard command this key triggers, if any.
    #[must_use]
    pub fn command(&self) -> Option<KeyCommand> {
        match self.0.as_str() {
            "Delete" | "Backspace" => Some(KeyCommand::Delete),
            "Escape" => Some(KeyCommand::Deselect),
            "r" | "R" => Some(KeyCommand::Rotate),
            "+" | "=" => Some(KeyCommand::ScaleUp),
            "-" | "_" => Some(KeyCommand::ScaleDown),
            "ArrowLeft" => Some(KeyCommand::PrevFrame),
            "ArrowRight" => Some(KeyCommand::NextFrame),
            _ => None,
        }
    }
}

/// Commands bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Remove the selected sticker.
    Delete,
    /// Clear the selection without deleting.
    Deselect,
    /// Rotate the selected sticker by one step.
    Rotate,
    /// Grow the selected sticker about its center.
    ScaleUp,
    /// Shrink the selected sticker about its center.
    ScaleDown,
    /// Show the previous frame decoration.
    PrevFrame,
    /// Show the next frame decoration.
    NextFrame,
}

impl KeyCommand {
    /// Whether the command acts on the selected sticker.
    ///
    /// Sticker commands are ignored while nothing is selected or a gesture is
    /// in progress; frame navigation always applies.
    #[must_use]
    pub fn needs_selection(self) -> bool {
        !matches!(self, Self::PrevFrame | Self::NextFrame)
    }
}

/// Everything the editor reacts to. Pointer positions are in canvas pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    /// The pointer left the canvas; ends a gesture exactly like pointer-up.
    PointerLeave,
    KeyDown(Key),
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// The id of the currently selected sticker, if any.
    pub selected_id: Option<StickerId>,
}

/// Internal state for the input state machine.
///
/// Each active variant carries gesture context needed on pointer-move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving a sticker.
    Dragging {
        /// Id of the sticker being dragged.
        id: StickerId,
        /// Pointer position minus sticker center at pointer-down.
        offset: Point,
    },
    /// The user is resizing a sticker from one of its corners.
    Resizing {
        /// Id of the sticker being resized.
        id: StickerId,
        /// Corner handle that started the gesture.
        corner: Corner,
    },
    /// The user is rotating a sticker with the rotate handle.
    Rotating {
        /// Id of the sticker being rotated.
        id: StickerId,
    },
}

impl InputState {
    /// Whether no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing { .. })
    }

    #[must_use]
    pub fn is_rotating(&self) -> bool {
        matches!(self, Self::Rotating { .. })
    }

    /// Sticker owned by the active gesture, if any.
    #[must_use]
    pub fn target(&self) -> Option<StickerId> {
        match *self {
            Self::Idle => None,
            Self::Dragging { id, .. } | Self::Resizing { id, .. } | Self::Rotating { id } => Some(id),
        }
    }
}
