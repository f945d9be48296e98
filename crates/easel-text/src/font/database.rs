//! Loaded faces and family resolution

use std::path::Path;

use fontdb::{Database, Family};

use super::{FontId, FontQuery};
use crate::{Result, TextError};

/// Faces available for text, plus the family to fall back to
pub struct FontDatabase {
    db: Database,
    default_family: String,
}

impl FontDatabase {
    /// Empty database; only fonts loaded explicitly are available
    pub fn new() -> Self {
        Self {
            db: Database::new(),
            default_family: crate::DEFAULT_FONT_FAMILY.to_string(),
        }
    }

    pub fn with_system_fonts() -> Self {
        let mut fonts = Self::new();
        fonts.load_system_fonts();
        fonts
    }

    pub fn load_system_fonts(&mut self) {
        self.db.load_system_fonts();
        tracing::debug!("{} font faces after system scan", self.db.len());
    }

    /// Load every face in a font file or collection
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        self.db
            .load_font_file(path)
            .map_err(|e| TextError::FontParsing(format!("{}: {}", path.display(), e)))
    }

    /// Load faces from bytes, returning how many were added
    pub fn load_bytes(&mut self, data: Vec<u8>) -> usize {
        let before = self.db.len();
        self.db.load_font_data(data);
        self.db.len() - before
    }

    pub fn default_family(&self) -> &str {
        &self.default_family
    }

    pub fn set_default_family(&mut self, family: impl Into<String>) {
        self.default_family = family.into();
    }

    /// First face matching the query's family list
    pub fn query(&self, query: &FontQuery) -> Option<FontId> {
        let families: Vec<Family<'_>> = query.families.iter().map(|name| family(name)).collect();
        let fontdb_query = fontdb::Query {
            families: &families,
            weight: query.weight.into(),
            stretch: fontdb::Stretch::Normal,
            style: query.style.into(),
        };
        self.db.query(&fontdb_query).map(FontId)
    }

    /// Resolve a requested family to a loaded face.
    ///
    /// Falls back to the default family (generic names expanded), then to
    /// whatever face was loaded first. Only an empty database is an error.
    pub fn resolve(&self, requested: Option<&str>) -> Result<FontId> {
        if let Some(name) = requested {
            if let Some(id) = self.query(&FontQuery::family(name)) {
                return Ok(id);
            }
            tracing::warn!("Font '{}' not found, falling back to '{}'", name, self.default_family);
        }

        let fallback = FontQuery::family(&self.default_family).expand_generics();
        if let Some(id) = self.query(&fallback) {
            return Ok(id);
        }

        match self.db.faces().next() {
            Some(face) => Ok(FontId(face.id)),
            None => Err(TextError::FontNotFound(
                requested.unwrap_or(&self.default_family).to_string(),
            )),
        }
    }

    /// Run `f` over the raw font data and face index of `id`
    pub fn with_face_data<R>(&self, id: FontId, f: impl FnOnce(&[u8], u32) -> R) -> Option<R> {
        self.db.with_face_data(id.0, f)
    }

    /// Primary family name of every loaded face, sorted and deduplicated
    pub fn family_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .db
            .faces()
            .filter_map(|face| face.families.first())
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }
}

impl Default for FontDatabase {
    fn default() -> Self {
        Self::new()
    }
}

fn family(name: &str) -> Family<'_> {
    match name {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        other => Family::Name(other),
    }
}
