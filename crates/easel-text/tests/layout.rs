//! Text layout against the fonts installed on the host.
//!
//! Every test returns early when the system has no fonts.

use easel_text::{DEFAULT_FONT_SIZE, TextEngine};

fn engine() -> Option<TextEngine> {
    let engine = TextEngine::with_system_fonts();
    if engine.fonts().is_empty() {
        return None;
    }
    Some(engine)
}

#[test]
fn test_layout_produces_glyph_path() {
    let Some(engine) = engine() else { return };

    let layout = engine.layout("Hello", None, 24.0).unwrap();
    assert!(layout.width > 0.0);
    assert!(layout.ascent > 0.0);

    if let Some(path) = layout.path {
        let bounds = path.bounds();
        assert!(bounds.left() >= -1.0);
        assert!(bounds.bottom() <= layout.ascent + layout.descent + 1.0);
    }
}

#[test]
fn test_width_grows_with_size() {
    let Some(engine) = engine() else { return };

    let small = engine.layout("Easel", None, DEFAULT_FONT_SIZE).unwrap();
    let large = engine.layout("Easel", None, DEFAULT_FONT_SIZE * 2.0).unwrap();
    assert!(large.width > small.width);
}

#[test]
fn test_missing_family_falls_back_to_default() {
    let Some(engine) = engine() else { return };

    let fallback = engine.layout("abc", Some("Definitely Not Installed"), 16.0).unwrap();
    let default = engine.layout("abc", None, 16.0).unwrap();
    assert_eq!(fallback.font, default.font);
}
