//! Sticker editor for the photobooth's final-review page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It takes the
//! composed photo strip and a frame decoration, lets the user place stickers
//! over them, and drags, resizes, and rotates those stickers by direct
//! manipulation. The host JavaScript layer only wires DOM events to the
//! [`web::Editor`] and loads the images it asks for.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EditorCore`]: event dispatch and gesture transitions |
//! | [`sticker`] | Sticker model and the paint-ordered store |
//! | [`handles`] | Resize/rotate handle layout |
//! | [`hit`] | Hit-testing and hover cursors |
//! | [`input`] | Events, keys, and the gesture state |
//! | [`geom`] | Points and rotated containment |
//! | [`viewport`] | Client → canvas coordinate mapping |
//! | [`render`] | Scene compositing over the [`render::Surface`] trait |
//! | [`raster`] | Headless `tiny_skia` surface |
//! | [`web`] | Browser canvas surface and the exported `Editor` |
//! | [`config`] | JSON configuration, frame cycling, sticker presets |
//! | [`consts`] | Shared numeric constants (handle size, minimum sizes, steps) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod handles;
pub mod hit;
pub mod input;
pub mod raster;
pub mod render;
pub mod sticker;
pub mod viewport;
pub mod web;
