//! Font loading and resolution

mod database;
mod matching;

pub use database::FontDatabase;
pub use matching::{FontQuery, resolve_generic_family};

/// A face loaded into a [`FontDatabase`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId(pub fontdb::ID);

/// OpenType weight class, kept within 100..=900
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    pub fn new(value: u16) -> Self {
        FontWeight(value.clamp(100, 900))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl From<FontWeight> for fontdb::Weight {
    fn from(weight: FontWeight) -> Self {
        fontdb::Weight(weight.0)
    }
}

/// Slant of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Upright,
    Italic,
    Oblique,
}

impl From<FontStyle> for fontdb::Style {
    fn from(style: FontStyle) -> Self {
        match style {
            FontStyle::Upright => fontdb::Style::Normal,
            FontStyle::Italic => fontdb::Style::Italic,
            FontStyle::Oblique => fontdb::Style::Oblique,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_stays_in_range() {
        assert_eq!(FontWeight::new(50).value(), 100);
        assert_eq!(FontWeight::new(1000).value(), 900);
        assert!(FontWeight::BOLD > FontWeight::default());
    }

    #[test]
    fn test_upright_maps_to_normal() {
        assert_eq!(fontdb::Style::from(FontStyle::Upright), fontdb::Style::Normal);
    }
}
