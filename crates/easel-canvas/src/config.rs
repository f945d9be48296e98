//! Canvas configuration

use crate::color::Color;
use crate::style::{StrokeCap, StrokeJoin};

/// Canvas configuration
///
/// Initial surface size and the style a fresh canvas starts with.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_weight: f32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    /// Color the surface starts cleared to
    pub background: Color,
    pub curve_tightness: f32,
    pub text_size: f32,
    /// `None` uses the font database default family
    pub text_font: Option<String>,
    pub anti_alias: bool,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_weight: 1.0,
            stroke_cap: StrokeCap::Round,
            stroke_join: StrokeJoin::Miter,
            background: Color::CLEAR,
            curve_tightness: 0.0,
            text_size: easel_text::DEFAULT_FONT_SIZE,
            text_font: None,
            anti_alias: true,
        }
    }
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = color;
        self
    }

    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke = color;
        self
    }

    pub fn with_stroke_weight(mut self, weight: f32) -> Self {
        self.stroke_weight = weight;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn with_curve_tightness(mut self, tightness: f32) -> Self {
        self.curve_tightness = tightness;
        self
    }

    pub fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_text_font(mut self, family: impl Into<String>) -> Self {
        self.text_font = Some(family.into());
        self
    }

    pub fn with_anti_alias(mut self, anti_alias: bool) -> Self {
        self.anti_alias = anti_alias;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let config = CanvasConfig::new(64, 32)
            .with_fill(Color::BLACK)
            .with_text_font("serif")
            .with_anti_alias(false);

        assert_eq!((config.width, config.height), (64, 32));
        assert_eq!(config.fill, Color::BLACK);
        assert_eq!(config.stroke, Color::BLACK);
        assert_eq!(config.text_font.as_deref(), Some("serif"));
        assert!(!config.anti_alias);
    }
}
