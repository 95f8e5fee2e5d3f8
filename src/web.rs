//! Browser binding: the `<canvas>` surface and the `Editor` exported to JS.
//!
//! The host page owns the DOM wiring. It forwards mouse and first-touch
//! client coordinates, key names, and image load completions to [`Editor`],
//! and loads whatever images the editor asks for. Every editor call returns
//! a JSON array of [`HostEvent`]s in the order the engine produced them:
//!
//! ```text
//! [{"type":"sticker_added","id":"<uuid>"},
//!  {"type":"selection_changed","id":"<uuid>"},
//!  {"type":"load_image","slot":"frame","src":"frames/2.png"}]
//! ```

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use std::f64::consts::TAU;

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::config::BoothConfig;
use crate::engine::{Action, EditorCore, ImageSlot, LoadRequest};
use crate::geom::Point;
use crate::hit::Cursor;
use crate::input::{Event, Key};
use crate::render::{self, Assets, Rgba, Surface};
use crate::sticker::{ImageRef, StickerId};
use crate::viewport::Viewport;

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

/// Notification handed back to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Load `src` and report back through `image_loaded`/`image_failed`.
    LoadImage(LoadRequest),
    StickerAdded { id: StickerId },
    StickerDeleted { id: StickerId },
    SelectionChanged { id: Option<StickerId> },
}

/// Engine actions split by who carries them out.
#[derive(Debug, Default, PartialEq)]
struct Outcome {
    /// Forwarded to the page, in order.
    events: Vec<HostEvent>,
    /// Last cursor asked for, if any.
    cursor: Option<Cursor>,
    render: bool,
}

fn split_actions(actions: Vec<Action>) -> Outcome {
    let mut out = Outcome::default();
    for action in actions {
        match action {
            Action::RenderNeeded => out.render = true,
            Action::SetCursor(cursor) => out.cursor = Some(cursor),
            Action::LoadImage(request) => out.events.push(HostEvent::LoadImage(request)),
            Action::StickerAdded(id) => out.events.push(HostEvent::StickerAdded { id }),
            Action::StickerDeleted(id) => out.events.push(HostEvent::StickerDeleted { id }),
            Action::SelectionChanged(id) => out.events.push(HostEvent::SelectionChanged { id }),
        }
    }
    out
}

/// [`Surface`] over a 2D canvas context.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    type Image = HtmlImageElement;
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_image(&mut self, image: &HtmlImageElement, x: f64, y: f64, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(image, x, y, width, height)
    }

    fn draw_image_rotated(
        &mut self,
        image: &HtmlImageElement,
        center: Point,
        rotation: f64,
        width: f64,
        height: f64,
    ) -> Result<(), JsValue> {
        self.ctx.save();
        let drawn = self
            .ctx
            .translate(center.x, center.y)
            .and_then(|()| self.ctx.rotate(rotation))
            .and_then(|()| {
                self.ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(image, -width / 2.0, -height / 2.0, width, height)
            });
        self.ctx.restore();
        drawn
    }

    fn stroke_polygon(&mut self, points: &[Point], color: Rgba, line_width: f64) -> Result<(), JsValue> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
        Ok(())
    }

    /// Mirrors `img.complete && img.naturalWidth !== 0`: broken or still
    /// loading images are skipped rather than drawn.
    fn is_image_ready(&self, image: &HtmlImageElement) -> bool {
        image.complete() && image.natural_width() != 0
    }
}

/// The sticker editor bound to a `<canvas>` element.
#[wasm_bindgen]
pub struct Editor {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    core: EditorCore,
    assets: Assets<HtmlImageElement>,
}

#[wasm_bindgen]
impl Editor {
    /// Bind to `canvas`, sizing it from `config_json` (empty for defaults).
    ///
    /// # Errors
    ///
    /// Fails on an invalid config or when the canvas has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: &str) -> Result<Editor, JsValue> {
        let config = if config_json.trim().is_empty() {
            BoothConfig::default()
        } else {
            BoothConfig::from_json(config_json).map_err(|e| js_error(&e.to_string()))?
        };
        canvas.set_width(config.canvas_width);
        canvas.set_height(config.canvas_height);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| js_error("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;

        Ok(Self {
            canvas,
            surface: CanvasSurface::new(ctx),
            core: EditorCore::new(config),
            assets: Assets::new(),
        })
    }

    /// Kick off loading of the initial frame decoration.
    ///
    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn start(&mut self) -> Result<String, JsValue> {
        let actions = self.core.start();
        self.process(actions)
    }

    /// Supply the composed photo strip and redraw.
    ///
    /// # Errors
    ///
    /// Propagates canvas drawing failures.
    pub fn set_photo(&mut self, image: HtmlImageElement) -> Result<(), JsValue> {
        self.assets.set_photo(image);
        self.render()
    }

    /// Ask for a sticker by image source.
    ///
    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn request_sticker(&mut self, src: &str) -> Result<String, JsValue> {
        let actions = self.core.request_sticker(src);
        self.process(actions)
    }

    /// Ask for a sticker from the configured preset catalog.
    ///
    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn add_preset(&mut self, name: &str) -> Result<String, JsValue> {
        let actions = self.core.add_preset(name);
        self.process(actions)
    }

    /// Report a finished image load for a previous request.
    ///
    /// # Errors
    ///
    /// Fails on an unknown `slot` name; otherwise propagates canvas failures.
    pub fn image_loaded(&mut self, slot: &str, src: &str, image: HtmlImageElement) -> Result<String, JsValue> {
        let actions = match parse_slot(slot)? {
            ImageSlot::Sticker => {
                let (w, h) = (f64::from(image.natural_width()), f64::from(image.natural_height()));
                self.assets.insert_sticker(ImageRef::new(src), image);
                self.core.sticker_loaded(src, w, h)
            }
            ImageSlot::Frame => {
                let actions = self.core.frame_loaded(src);
                if self.core.is_frame_ready() && src == self.core.frames.current_src() {
                    self.assets.set_frame(image);
                }
                actions
            }
        };
        self.process(actions)
    }

    /// Report a failed image load.
    ///
    /// # Errors
    ///
    /// Fails on an unknown `slot` name.
    pub fn image_failed(&mut self, slot: &str, src: &str) -> Result<String, JsValue> {
        let actions = self.core.image_failed(parse_slot(slot)?, src);
        self.process(actions)
    }

    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> Result<String, JsValue> {
        let pt = self.to_canvas(client_x, client_y);
        let actions = self.core.dispatch(Event::PointerDown(pt));
        self.process(actions)
    }

    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> Result<String, JsValue> {
        let pt = self.to_canvas(client_x, client_y);
        let actions = self.core.dispatch(Event::PointerMove(pt));
        self.process(actions)
    }

    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn pointer_up(&mut self) -> Result<String, JsValue> {
        let actions = self.core.dispatch(Event::PointerUp);
        self.process(actions)
    }

    /// Pointer left the canvas (or the touch was cancelled).
    ///
    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn pointer_leave(&mut self) -> Result<String, JsValue> {
        let actions = self.core.dispatch(Event::PointerLeave);
        self.process(actions)
    }

    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn key_down(&mut self, key: &str) -> Result<String, JsValue> {
        let actions = self.core.dispatch(Event::KeyDown(Key::new(key)));
        self.process(actions)
    }

    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn next_frame(&mut self) -> Result<String, JsValue> {
        let actions = self.core.next_frame();
        self.process(actions)
    }

    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn prev_frame(&mut self) -> Result<String, JsValue> {
        let actions = self.core.prev_frame();
        self.process(actions)
    }

    /// Remove every sticker.
    ///
    /// # Errors
    ///
    /// Propagates canvas and serialization failures.
    pub fn reset(&mut self) -> Result<String, JsValue> {
        let actions = self.core.reset();
        self.process(actions)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Propagates canvas drawing failures.
    pub fn render(&mut self) -> Result<(), JsValue> {
        render::draw(&mut self.surface, &self.core, &self.assets)
    }

    /// Number of stickers currently placed.
    #[must_use]
    pub fn sticker_count(&self) -> usize {
        self.core.stickers.len()
    }
}

impl Editor {
    /// Map client coordinates to canvas pixels using the element's current layout.
    fn to_canvas(&self, client_x: f64, client_y: f64) -> Point {
        let rect = self.canvas.get_bounding_client_rect();
        let viewport = Viewport {
            left: rect.left(),
            top: rect.top(),
            display_width: rect.width(),
            display_height: rect.height(),
            canvas_width: f64::from(self.canvas.width()),
            canvas_height: f64::from(self.canvas.height()),
        };
        viewport.client_to_canvas(Point::new(client_x, client_y))
    }

    /// Carry out engine actions; return the host's share as JSON.
    fn process(&mut self, actions: Vec<Action>) -> Result<String, JsValue> {
        let outcome = split_actions(actions);
        if let Some(cursor) = outcome.cursor {
            self.canvas.style().set_property("cursor", cursor.css())?;
        }
        if outcome.render {
            self.render()?;
        }
        serde_json::to_string(&outcome.events).map_err(|e| js_error(&e.to_string()))
    }
}

fn parse_slot(slot: &str) -> Result<ImageSlot, JsValue> {
    match slot {
        "sticker" => Ok(ImageSlot::Sticker),
        "frame" => Ok(ImageSlot::Frame),
        other => Err(js_error(&format!("unknown image slot '{other}'"))),
    }
}
