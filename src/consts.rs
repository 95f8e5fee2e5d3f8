//! Shared numeric constants for the photobooth crate.

use std::f64::consts::PI;

// ── Canvas ──────────────────────────────────────────────────────

/// Default output canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1000;

/// Default output canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 3000;

/// Fraction of an image's natural size used for a newly added sticker.
pub const DEFAULT_STICKER_SCALE: f64 = 0.5;

// ── Hit-testing ─────────────────────────────────────────────────

/// Half-width of the square hit window around each handle, in canvas pixels.
pub const HANDLE_SIZE: f64 = 12.0;

/// Vertical distance from the rotated top-edge midpoint to the rotate handle.
pub const ROTATE_HANDLE_OFFSET: f64 = 25.0;

// ── Transforms ──────────────────────────────────────────────────

/// Smallest width/height reachable by dragging a resize handle.
pub const MIN_RESIZE: f64 = 30.0;

/// Smallest width/height reachable with the keyboard scale-down shortcut.
pub const MIN_KEY_SCALE: f64 = 20.0;

/// Keyboard rotation step (22.5°).
pub const ROTATE_STEP: f64 = PI / 8.0;

/// Keyboard scale-up factor.
pub const SCALE_UP: f64 = 1.1;

/// Keyboard scale-down factor.
pub const SCALE_DOWN: f64 = 0.9;

// ── Selection decoration ────────────────────────────────────────

/// Radius of the filled marker drawn at each handle.
pub const HANDLE_MARKER_RADIUS: f64 = 8.0;

/// Stroke width of the selection outline.
pub const SELECTION_LINE_WIDTH: f64 = 2.0;
