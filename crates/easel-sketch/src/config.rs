//! Sketch Configuration

use std::time::Duration;

use easel_canvas::{CanvasConfig, Color};

/// Sketch configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// Window title
    pub title: String,

    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// Keep calling `draw` after the first frame
    pub looping: bool,

    /// Target frames per second while looping
    pub frame_rate: f32,

    /// Family used by `text` until `text_font` is called
    pub default_font: Option<String>,

    /// Color the canvas starts with
    pub background: Color,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "Easel".to_string(),
            width: 400,
            height: 400,
            looping: true,
            frame_rate: 60.0,
            default_font: None,
            background: Color::WHITE,
        }
    }
}

impl SketchConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: f32) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_default_font(mut self, family: impl Into<String>) -> Self {
        self.default_font = Some(family.into());
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Time between frames; non-positive rates fall back to 60 fps
    pub fn frame_interval(&self) -> Duration {
        let rate = if self.frame_rate.is_finite() && self.frame_rate > 0.0 {
            self.frame_rate
        } else {
            60.0
        };
        Duration::from_secs_f64(1.0 / rate as f64)
    }

    /// Canvas setup derived from this sketch
    pub fn canvas_config(&self) -> CanvasConfig {
        let mut config = CanvasConfig::new(self.width, self.height).with_background(self.background);
        config.text_font = self.default_font.clone();
        config
    }
}
