//! Editor engine: the single owner of sticker state and the gesture machine.
//!
//! [`EditorCore`] consumes [`Event`]s and returns [`Action`]s for the host to
//! carry out (re-render, change cursor, load an image). It holds no browser
//! handles, so every transition is testable natively. The browser binding in
//! [`crate::web`] wraps it.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use std::f64::consts::FRAC_PI_2;

use serde::Serialize;

use crate::config::{BoothConfig, FrameCycle};
use crate::consts::{MIN_KEY_SCALE, MIN_RESIZE, ROTATE_STEP, SCALE_DOWN, SCALE_UP};
use crate::geom::Point;
use crate::hit::{Cursor, Hit, HitPart, hit_test, resolve_cursor};
use crate::input::{Event, InputState, Key, KeyCommand, UiState};
use crate::sticker::{ImageRef, Sticker, StickerId, StickerStore};

/// What an image load request is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSlot {
    Sticker,
    Frame,
}

/// Ask the host to load an image and report back when it completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadRequest {
    pub slot: ImageSlot,
    pub src: String,
}

/// Actions returned from event handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCursor(Cursor),
    RenderNeeded,
    LoadImage(LoadRequest),
    StickerAdded(StickerId),
    StickerDeleted(StickerId),
    SelectionChanged(Option<StickerId>),
}

/// Editor state and logic that does not depend on the canvas element.
pub struct EditorCore {
    pub config: BoothConfig,
    pub stickers: StickerStore,
    pub ui: UiState,
    pub input: InputState,
    pub frames: FrameCycle,
    frame_ready: bool,
    pending: Vec<ImageRef>,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new(BoothConfig::default())
    }
}

impl EditorCore {
    /// Create an editor for an already validated config.
    #[must_use]
    pub fn new(config: BoothConfig) -> Self {
        let frames = FrameCycle::new(&config.frames);
        Self {
            config,
            stickers: StickerStore::new(),
            ui: UiState::default(),
            input: InputState::default(),
            frames,
            frame_ready: false,
            pending: Vec::new(),
        }
    }

    /// Request the initial frame decoration.
    pub fn start(&mut self) -> Vec<Action> {
        self.frame_ready = false;
        vec![Action::LoadImage(LoadRequest { slot: ImageSlot::Frame, src: self.frames.current_src() })]
    }

    // --- Queries ---

    /// Canvas size in pixels, fixed for the session.
    #[must_use]
    pub fn canvas_size(&self) -> (f64, f64) {
        (f64::from(self.config.canvas_width), f64::from(self.config.canvas_height))
    }

    /// The currently selected sticker id, if any.
    #[must_use]
    pub fn selection(&self) -> Option<StickerId> {
        self.ui.selected_id
    }

    /// Look up a sticker by id.
    #[must_use]
    pub fn sticker(&self, id: &StickerId) -> Option<&Sticker> {
        self.stickers.get(id)
    }

    /// Whether the current frame decoration has finished loading.
    #[must_use]
    pub fn is_frame_ready(&self) -> bool {
        self.frame_ready
    }

    /// The sticker that should carry the selection decoration: selected and
    /// not mid-gesture.
    #[must_use]
    pub fn decorated_sticker(&self) -> Option<&Sticker> {
        if !self.input.is_idle() {
            return None;
        }
        self.ui.selected_id.and_then(|id| self.stickers.get(&id))
    }

    // --- Asset inputs ---

    /// Ask for a sticker image. The sticker is placed once the host reports
    /// the load through [`Self::sticker_loaded`].
    pub fn request_sticker(&mut self, src: &str) -> Vec<Action> {
        self.pending.push(ImageRef::new(src));
        vec![Action::LoadImage(LoadRequest { slot: ImageSlot::Sticker, src: src.to_string() })]
    }

    /// Request a sticker from the configured preset catalog by name.
    pub fn add_preset(&mut self, name: &str) -> Vec<Action> {
        let Some(src) = self.config.preset_src(name).map(str::to_string) else {
            tracing::warn!(%name, "unknown sticker preset");
            return Vec::new();
        };
        self.request_sticker(&src)
    }

    /// A requested sticker image finished loading: place and select it.
    pub fn sticker_loaded(&mut self, src: &str, natural_w: f64, natural_h: f64) -> Vec<Action> {
        let Some(index) = self.pending.iter().position(|p| p.as_str() == src) else {
            tracing::debug!(%src, "ignoring unrequested sticker image");
            return Vec::new();
        };
        let image = self.pending.remove(index);
        let (canvas_w, canvas_h) = self.canvas_size();
        let Some(sticker) = Sticker::from_image(image, natural_w, natural_h, canvas_w, canvas_h, self.config.sticker_scale)
        else {
            tracing::warn!(%src, natural_w, natural_h, "sticker image has no usable size");
            return Vec::new();
        };

        let id = sticker.id;
        tracing::info!(%id, %src, width = sticker.width, height = sticker.height, "sticker added");
        self.stickers.insert(sticker);
        self.ui.selected_id = Some(id);
        vec![Action::StickerAdded(id), Action::SelectionChanged(Some(id)), Action::RenderNeeded]
    }

    /// The frame image at `src` finished loading. Stale frames are ignored.
    pub fn frame_loaded(&mut self, src: &str) -> Vec<Action> {
        if src != self.frames.current_src() {
            tracing::debug!(%src, current = self.frames.current(), "ignoring stale frame image");
            return Vec::new();
        }
        self.frame_ready = true;
        vec![Action::RenderNeeded]
    }

    /// An image failed to load. Nothing is placed or composited; no retry.
    pub fn image_failed(&mut self, slot: ImageSlot, src: &str) -> Vec<Action> {
        tracing::warn!(?slot, %src, "image failed to load");
        if slot == ImageSlot::Sticker {
            if let Some(index) = self.pending.iter().position(|p| p.as_str() == src) {
                self.pending.remove(index);
            }
        }
        Vec::new()
    }

    // --- Commands ---

    /// Show the next frame decoration.
    pub fn next_frame(&mut self) -> Vec<Action> {
        let n = self.frames.advance();
        tracing::info!(frame = n, "switched frame");
        self.start()
    }

    /// Show the previous frame decoration.
    pub fn prev_frame(&mut self) -> Vec<Action> {
        let n = self.frames.step_back();
        tracing::info!(frame = n, "switched frame");
        self.start()
    }

    /// Remove every sticker and clear any selection or gesture.
    pub fn reset(&mut self) -> Vec<Action> {
        self.stickers.clear();
        self.input = InputState::Idle;
        let mut actions = Vec::new();
        if self.ui.selected_id.take().is_some() {
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Events ---

    /// Apply one event and return what the host must do about it.
    pub fn dispatch(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::PointerDown(pt) => self.on_pointer_down(pt),
            Event::PointerMove(pt) => self.on_pointer_move(pt),
            Event::PointerUp | Event::PointerLeave => self.on_pointer_up(),
            Event::KeyDown(key) => self.on_key_down(&key),
        }
    }

    /// Start a gesture: resize handle, rotate handle, sticker body, or deselect.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.input = InputState::Idle;
        let mut actions = Vec::new();

        match hit_test(pt, &self.stickers, self.ui.selected_id) {
            Some(Hit { sticker_id: id, part: HitPart::Resize(corner) }) => {
                self.input = InputState::Resizing { id, corner };
                actions.push(Action::SetCursor(Cursor::Resize(corner)));
            }
            Some(Hit { sticker_id: id, part: HitPart::Rotate }) => {
                self.input = InputState::Rotating { id };
                actions.push(Action::SetCursor(Cursor::Grab));
            }
            Some(Hit { sticker_id: id, part: HitPart::Body }) => {
                let Some(center) = self.stickers.get(&id).map(Sticker::center) else {
                    return actions;
                };
                self.stickers.bring_to_front(&id);
                self.input = InputState::Dragging { id, offset: Point::new(pt.x - center.x, pt.y - center.y) };
                if self.ui.selected_id != Some(id) {
                    self.ui.selected_id = Some(id);
                    actions.push(Action::SelectionChanged(Some(id)));
                }
                actions.push(Action::SetCursor(Cursor::Move));
            }
            None => {
                if self.ui.selected_id.take().is_some() {
                    actions.push(Action::SelectionChanged(None));
                }
                actions.push(Action::SetCursor(Cursor::Default));
            }
        }

        tracing::debug!(x = pt.x, y = pt.y, state = ?self.input, "pointer down");
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Advance the active gesture, or update the hover cursor when idle.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => vec![Action::SetCursor(resolve_cursor(pt, &self.stickers, self.ui.selected_id))],
            InputState::Dragging { id, offset } => self.update_target(id, |s| {
                s.set_center(Point::new(pt.x - offset.x, pt.y - offset.y));
            }),
            InputState::Resizing { id, corner } => self.update_target(id, |s| {
                s.resize_from_corner(corner, pt, MIN_RESIZE);
            }),
            InputState::Rotating { id } => self.update_target(id, |s| {
                let c = s.center();
                s.rotation = (pt.y - c.y).atan2(pt.x - c.x) + FRAC_PI_2;
            }),
        }
    }

    /// End any gesture. Selection survives.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let ended = std::mem::take(&mut self.input);
        if ended.is_idle() {
            return Vec::new();
        }
        tracing::debug!(state = ?ended, "gesture ended");
        vec![Action::RenderNeeded]
    }

    /// Keyboard shortcuts. Sticker commands need an idle editor with a
    /// selection; frame navigation always applies.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        let Some(command) = key.command() else {
            return Vec::new();
        };
        if !command.needs_selection() {
            return match command {
                KeyCommand::PrevFrame => self.prev_frame(),
                _ => self.next_frame(),
            };
        }
        if !self.input.is_idle() {
            return Vec::new();
        }
        let Some(id) = self.ui.selected_id else {
            return Vec::new();
        };

        match command {
            KeyCommand::Delete => {
                self.ui.selected_id = None;
                if self.stickers.remove(&id).is_none() {
                    return vec![Action::SelectionChanged(None), Action::RenderNeeded];
                }
                tracing::info!(%id, "sticker deleted");
                vec![Action::StickerDeleted(id), Action::SelectionChanged(None), Action::RenderNeeded]
            }
            KeyCommand::Deselect => {
                self.ui.selected_id = None;
                vec![Action::SelectionChanged(None), Action::RenderNeeded]
            }
            KeyCommand::Rotate => self.update_selected(id, |s| s.rotation += ROTATE_STEP),
            KeyCommand::ScaleUp => self.update_selected(id, |s| s.scale_about_center(SCALE_UP, MIN_KEY_SCALE)),
            KeyCommand::ScaleDown => self.update_selected(id, |s| s.scale_about_center(SCALE_DOWN, MIN_KEY_SCALE)),
            KeyCommand::PrevFrame | KeyCommand::NextFrame => Vec::new(),
        }
    }

    /// Mutate the gesture's sticker; a vanished target ends the gesture.
    fn update_target(&mut self, id: StickerId, f: impl FnOnce(&mut Sticker)) -> Vec<Action> {
        let Some(sticker) = self.stickers.get_mut(&id) else {
            self.input = InputState::Idle;
            return Vec::new();
        };
        f(sticker);
        vec![Action::RenderNeeded]
    }

    /// Mutate the selected sticker; a dangling selection is cleared.
    fn update_selected(&mut self, id: StickerId, f: impl FnOnce(&mut Sticker)) -> Vec<Action> {
        let Some(sticker) = self.stickers.get_mut(&id) else {
            self.ui.selected_id = None;
            return vec![Action::SelectionChanged(None), Action::RenderNeeded];
        };
        f(sticker);
        vec![Action::RenderNeeded]
    }
}
