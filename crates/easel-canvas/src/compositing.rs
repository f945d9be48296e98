//! Compositing Operations
//!
//! Blend modes applied to everything drawn after a `blend_mode` command.

use std::fmt;
use std::str::FromStr;

/// Blend mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlendMode {
    #[default]
    SourceOver,
    SourceIn,
    SourceOut,
    SourceAtop,
    DestinationOver,
    DestinationIn,
    DestinationOut,
    DestinationAtop,
    /// Additive
    Lighter,
    /// Replace the destination
    Copy,
    Xor,
    Clear,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

/// Canonical names, in declaration order
const NAMES: [(BlendMode, &str); 27] = [
    (BlendMode::SourceOver, "source-over"),
    (BlendMode::SourceIn, "source-in"),
    (BlendMode::SourceOut, "source-out"),
    (BlendMode::SourceAtop, "source-atop"),
    (BlendMode::DestinationOver, "destination-over"),
    (BlendMode::DestinationIn, "destination-in"),
    (BlendMode::DestinationOut, "destination-out"),
    (BlendMode::DestinationAtop, "destination-atop"),
    (BlendMode::Lighter, "lighter"),
    (BlendMode::Copy, "copy"),
    (BlendMode::Xor, "xor"),
    (BlendMode::Clear, "clear"),
    (BlendMode::Multiply, "multiply"),
    (BlendMode::Screen, "screen"),
    (BlendMode::Overlay, "overlay"),
    (BlendMode::Darken, "darken"),
    (BlendMode::Lighten, "lighten"),
    (BlendMode::ColorDodge, "color-dodge"),
    (BlendMode::ColorBurn, "color-burn"),
    (BlendMode::HardLight, "hard-light"),
    (BlendMode::SoftLight, "soft-light"),
    (BlendMode::Difference, "difference"),
    (BlendMode::Exclusion, "exclusion"),
    (BlendMode::Hue, "hue"),
    (BlendMode::Saturation, "saturation"),
    (BlendMode::Color, "color"),
    (BlendMode::Luminosity, "luminosity"),
];

impl BlendMode {
    /// Parse a canonical name (`"multiply"`, `"source-over"`) or one of the
    /// sketching aliases (`"blend"`, `"add"`, `"darkest"`, `"dodge"`, ...).
    /// Case and `_` versus `-` are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase().replace('_', "-");
        let alias = match name.as_str() {
            "blend" | "normal" => Some(Self::SourceOver),
            "add" => Some(Self::Lighter),
            "replace" => Some(Self::Copy),
            "remove" => Some(Self::DestinationOut),
            "darkest" => Some(Self::Darken),
            "lightest" => Some(Self::Lighten),
            "dodge" => Some(Self::ColorDodge),
            "burn" => Some(Self::ColorBurn),
            _ => None,
        };
        alias.or_else(|| NAMES.iter().find(|(_, n)| *n == name).map(|(mode, _)| *mode))
    }

    pub fn as_str(&self) -> &'static str {
        NAMES[*self as usize].1
    }

    pub fn to_skia(self) -> tiny_skia::BlendMode {
        use tiny_skia::BlendMode as Sk;
        match self {
            Self::SourceOver => Sk::SourceOver,
            Self::SourceIn => Sk::SourceIn,
            Self::SourceOut => Sk::SourceOut,
            Self::SourceAtop => Sk::SourceAtop,
            Self::DestinationOver => Sk::DestinationOver,
            Self::DestinationIn => Sk::DestinationIn,
            Self::DestinationOut => Sk::DestinationOut,
            Self::DestinationAtop => Sk::DestinationAtop,
            Self::Lighter => Sk::Plus,
            Self::Copy => Sk::Source,
            Self::Xor => Sk::Xor,
            Self::Clear => Sk::Clear,
            Self::Multiply => Sk::Multiply,
            Self::Screen => Sk::Screen,
            Self::Overlay => Sk::Overlay,
            Self::Darken => Sk::Darken,
            Self::Lighten => Sk::Lighten,
            Self::ColorDodge => Sk::ColorDodge,
            Self::ColorBurn => Sk::ColorBurn,
            Self::HardLight => Sk::HardLight,
            Self::SoftLight => Sk::SoftLight,
            Self::Difference => Sk::Difference,
            Self::Exclusion => Sk::Exclusion,
            Self::Hue => Sk::Hue,
            Self::Saturation => Sk::Saturation,
            Self::Color => Sk::Color,
            Self::Luminosity => Sk::Luminosity,
        }
    }
}

impl FromStr for BlendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown blend mode: {}", s))
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
