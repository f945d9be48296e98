//! Text shaping module

mod run;
mod shaper;

pub use run::{PlacedGlyph, ShapedRun};
pub use shaper::TextShaper;
