//! Family lists and generic-family expansion

use super::{FontStyle, FontWeight};

/// Ordered family preferences plus the face attributes to match
#[derive(Debug, Clone, PartialEq)]
pub struct FontQuery {
    pub families: Vec<String>,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl FontQuery {
    /// Query for a single family at normal weight and style
    pub fn family(name: &str) -> Self {
        Self {
            families: vec![name.to_string()],
            weight: FontWeight::NORMAL,
            style: FontStyle::Upright,
        }
    }

    /// Try `name` after the families already listed
    pub fn or_family(mut self, name: &str) -> Self {
        self.families.push(name.to_string());
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Put the usual installed families ahead of each generic name
    /// (`"serif"`, `"monospace"`, ...). The generic name itself stays last in
    /// its group so fontdb's own generic mapping still gets a try.
    pub fn expand_generics(self) -> Self {
        let families = self
            .families
            .iter()
            .flat_map(|family| {
                resolve_generic_family(family)
                    .iter()
                    .map(|s| s.to_string())
                    .chain(std::iter::once(family.clone()))
            })
            .collect();
        Self { families, ..self }
    }
}

impl Default for FontQuery {
    fn default() -> Self {
        Self::family(crate::DEFAULT_FONT_FAMILY)
    }
}

/// Families commonly installed for a generic family name
pub fn resolve_generic_family(family: &str) -> &'static [&'static str] {
    match family.to_ascii_lowercase().as_str() {
        "serif" => &["Times New Roman", "DejaVu Serif", "Noto Serif", "Liberation Serif"],
        "sans-serif" => &["Helvetica", "Arial", "DejaVu Sans", "Noto Sans", "Liberation Sans"],
        "monospace" => &["Menlo", "Courier New", "DejaVu Sans Mono", "Noto Sans Mono"],
        "cursive" => &["Comic Sans MS", "Brush Script MT"],
        "fantasy" => &["Impact", "Papyrus"],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expansion_keeps_requested_order() {
        let query = FontQuery::family("Fira Code").or_family("monospace").expand_generics();
        assert_eq!(query.families[0], "Fira Code");
        assert_eq!(query.families[1], "Menlo");
        assert_eq!(query.families.last().map(String::as_str), Some("monospace"));
    }

    #[test]
    fn test_named_family_has_no_expansion() {
        assert!(resolve_generic_family("Papyrus Pro").is_empty());
        assert!(!resolve_generic_family("SANS-SERIF").is_empty());
        assert_eq!(FontQuery::family("Inter").expand_generics().families, ["Inter"]);
    }
}
