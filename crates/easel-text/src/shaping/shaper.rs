//! Shaping with rustybuzz

use std::str::FromStr;

use rustybuzz::{Face, Feature, UnicodeBuffer};

use super::ShapedRun;
use crate::{Result, TextError};

/// Turns a string into a [`ShapedRun`] for one face and size.
///
/// Direction and script are guessed from the text.
#[derive(Debug, Clone, Default)]
pub struct TextShaper {
    features: Vec<Feature>,
}

impl TextShaper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an OpenType feature toggle such as `"-liga"` or `"smcp"`
    pub fn with_feature(mut self, feature: &str) -> Result<Self> {
        let parsed = Feature::from_str(feature)
            .map_err(|_| TextError::ShapingFailed(format!("bad feature {:?}", feature)))?;
        self.features.push(parsed);
        Ok(self)
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Shape `text` at `size` pixels per em
    pub fn shape(&self, face: &Face<'_>, text: &str, size: f32) -> ShapedRun {
        let units_per_em = face.units_per_em();
        let scale = if units_per_em > 0 { size / units_per_em as f32 } else { 0.0 };
        let mut run = ShapedRun::new(scale);
        if text.is_empty() {
            return run;
        }

        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();

        let output = rustybuzz::shape(face, &self.features, buffer);
        for (info, pos) in output.glyph_infos().iter().zip(output.glyph_positions()) {
            run.push(
                ttf_parser::GlyphId(info.glyph_id as u16),
                info.cluster,
                (pos.x_offset, pos.y_offset),
                pos.x_advance,
            );
        }
        run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_toggles_parse() {
        let shaper = TextShaper::new().with_feature("-liga").unwrap().with_feature("kern").unwrap();
        assert_eq!(shaper.features().len(), 2);
    }
}
