//! Colour value types shared by records, palettes and the view.

use serde::{Deserialize, Serialize};

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Grey used for every project when colouring is disabled.
    pub const NEUTRAL: Self = Self(0x6c, 0x70, 0x86);

    /// Parses a hex colour such as `#89b4fa` or `89b4fa`.
    ///
    /// Returns `None` unless the input is exactly six hex digits after the
    /// optional `#`.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self(r, g, b))
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fill used to tint a record in the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brush {
    /// No tint at all.
    #[default]
    Transparent,
    /// The shared generic colour handed out while project colouring is off.
    Neutral,
    /// A project's palette colour.
    Solid(Rgb),
}

impl Brush {
    /// The colour to paint, or `None` for a transparent brush.
    #[must_use]
    pub const fn color(self) -> Option<Rgb> {
        match self {
            Self::Transparent => None,
            Self::Neutral => Some(Rgb::NEUTRAL),
            Self::Solid(rgb) => Some(rgb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#89b4fa"), Some(Rgb(0x89, 0xb4, 0xfa)));
        assert_eq!(Rgb::from_hex("f38ba8"), Some(Rgb(0xf3, 0x8b, 0xa8)));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
    }

    #[test]
    fn hex_round_trips_through_display_form() {
        assert_eq!(Rgb(0xa6, 0xe3, 0xa1).to_hex(), "#a6e3a1");
    }

    #[test]
    fn transparent_brush_has_no_colour() {
        assert_eq!(Brush::Transparent.color(), None);
        assert_eq!(Brush::Neutral.color(), Some(Rgb::NEUTRAL));
    }
}
