//! Editor configuration: canvas size, frame decorations, and sticker presets.
//!
//! The host page hands the editor a JSON document once at start-up. Every
//! field is optional; missing fields fall back to the fish photobooth
//! defaults. [`BoothConfig::from_json`] parses and validates in one step.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_STICKER_SCALE};

pub const DEFAULT_FRAME_COUNT: u32 = 5;
pub const DEFAULT_FRAME_TEMPLATE: &str = "Assets/fish-photobooth/camerapage/frame/frame {n}.png";

const STICKER_DIR: &str = "Assets/fish-photobooth/camerapage/stickers";
const DEFAULT_PRESETS: [&str; 5] = ["fish", "octopus", "seaweed", "axolotl", "bubble"];

/// Placeholder in [`FrameConfig::path_template`] replaced by the frame number.
const FRAME_PLACEHOLDER: &str = "{n}";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The output canvas has a zero dimension.
    #[error("canvas size must be positive, got {width}x{height}")]
    CanvasSize { width: u32, height: u32 },

    /// The default sticker scale is zero, negative, or not finite.
    #[error("sticker scale must be positive and finite, got {0}")]
    StickerScale(f64),

    /// No frame decorations are configured.
    #[error("frame count must be at least 1")]
    NoFrames,

    /// The initial frame number is outside `1..=count`.
    #[error("initial frame {initial} outside 1..={count}")]
    InitialFrame { initial: u32, count: u32 },

    /// The frame path template has no `{n}` placeholder.
    #[error("frame path template has no {{n}} placeholder: {0}")]
    FrameTemplate(String),

    /// Two sticker presets share a name.
    #[error("duplicate sticker preset: {0}")]
    DuplicatePreset(String),
}

/// Frame decoration settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Number of frame images, numbered `1..=count`.
    pub count: u32,
    /// Frame shown when the editor opens.
    pub initial: u32,
    /// Image path with `{n}` standing in for the frame number.
    pub path_template: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_FRAME_COUNT,
            initial: 1,
            path_template: DEFAULT_FRAME_TEMPLATE.to_string(),
        }
    }
}

/// A named sticker image offered by the page's sticker buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerPreset {
    pub name: String,
    pub src: String,
}

/// Top-level editor configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoothConfig {
    /// Intrinsic canvas width in pixels.
    pub canvas_width: u32,
    /// Intrinsic canvas height in pixels.
    pub canvas_height: u32,
    /// Fraction of a sticker image's natural size used when it is added.
    pub sticker_scale: f64,
    pub frames: FrameConfig,
    pub stickers: Vec<StickerPreset>,
}

impl Default for BoothConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            sticker_scale: DEFAULT_STICKER_SCALE,
            frames: FrameConfig::default(),
            stickers: DEFAULT_PRESETS
                .iter()
                .map(|name| StickerPreset { name: (*name).to_string(), src: format!("{STICKER_DIR}/{name}.png") })
                .collect(),
        }
    }
}

impl BoothConfig {
    /// Parse a JSON config document and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the matching
    /// variant for the first failed validation rule.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants every other module relies on.
    ///
    /// # Errors
    ///
    /// Returns the first rule the config breaks.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::CanvasSize { width: self.canvas_width, height: self.canvas_height });
        }
        if !(self.sticker_scale.is_finite() && self.sticker_scale > 0.0) {
            return Err(ConfigError::StickerScale(self.sticker_scale));
        }
        if self.frames.count == 0 {
            return Err(ConfigError::NoFrames);
        }
        if self.frames.initial == 0 || self.frames.initial > self.frames.count {
            return Err(ConfigError::InitialFrame { initial: self.frames.initial, count: self.frames.count });
        }
        if !self.frames.path_template.contains(FRAME_PLACEHOLDER) {
            return Err(ConfigError::FrameTemplate(self.frames.path_template.clone()));
        }
        let mut seen = HashSet::new();
        for preset in &self.stickers {
            if !seen.insert(preset.name.as_str()) {
                return Err(ConfigError::DuplicatePreset(preset.name.clone()));
            }
        }
        Ok(())
    }

    /// Image source of the named sticker preset.
    #[must_use]
    pub fn preset_src(&self, name: &str) -> Option<&str> {
        self.stickers.iter().find(|p| p.name == name).map(|p| p.src.as_str())
    }
}

/// The frame decoration currently chosen, cycling through `1..=count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCycle {
    current: u32,
    count: u32,
    template: String,
}

impl FrameCycle {
    /// Start at the configured initial frame. `count` is clamped to at least 1.
    #[must_use]
    pub fn new(config: &FrameConfig) -> Self {
        let count = config.count.max(1);
        Self {
            current: config.initial.clamp(1, count),
            count,
            template: config.path_template.clone(),
        }
    }

    /// The 1-based number of the current frame.
    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Number of frames in the cycle.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Image source for frame number `n`.
    #[must_use]
    pub fn src_for(&self, n: u32) -> String {
        self.template.replace(FRAME_PLACEHOLDER, &n.to_string())
    }

    /// Image source for the current frame.
    #[must_use]
    pub fn current_src(&self) -> String {
        self.src_for(self.current)
    }

    /// Advance to the next frame, wrapping from the last to the first.
    pub fn advance(&mut self) -> u32 {
        self.current = if self.current >= self.count { 1 } else { self.current + 1 };
        self.current
    }

    /// Step back to the previous frame, wrapping from the first to the last.
    pub fn step_back(&mut self) -> u32 {
        self.current = if self.current <= 1 { self.count } else { self.current - 1 };
        self.current
    }
}
