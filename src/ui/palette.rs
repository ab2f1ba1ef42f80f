//! Project colour palettes.
//!
//! A palette is an ordered list of colours handed out to projects round-robin.
//! Palettes are either built in (embedded TOML) or loaded from a custom TOML
//! file.
//!
//! # Built-in Palettes
//!
//! - `catppuccin-mocha`: Pastel accents for dark backgrounds (default)
//! - `catppuccin-latte`: Saturated accents for light backgrounds
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-palette"
//! colors = ["#89b4fa", "#a6e3a1", "#f9e2af"]
//! ```

use crate::domain::{DocketError, Result, Rgb};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw palette as written in TOML.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct PaletteFile {
    name: String,
    colors: Vec<String>,
}

/// A non-empty, ordered list of project colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<Rgb>,
}

impl Palette {
    /// Loads a built-in palette by name.
    ///
    /// Returns `None` if the name is unknown.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docket::ui::Palette;
    ///
    /// let palette = Palette::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(palette.name(), "catppuccin-latte");
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../palettes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../palettes/catppuccin-latte.toml"),
            _ => return None,
        };

        Self::from_toml_str(toml_str).ok()
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// palette (see [`from_toml_str`](Self::from_toml_str)).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a palette from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`DocketError::Palette`] for invalid TOML, an empty colour list,
    /// or a colour that is not a six-digit hex value.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let raw: PaletteFile = toml::from_str(toml_str)
            .map_err(|e| DocketError::Palette(format!("failed to parse palette TOML: {e}")))?;

        let colors = raw
            .colors
            .iter()
            .map(|hex| {
                Rgb::from_hex(hex)
                    .ok_or_else(|| DocketError::Palette(format!("invalid colour '{hex}'")))
            })
            .collect::<Result<Vec<_>>>()?;

        if colors.is_empty() {
            return Err(DocketError::Palette(format!(
                "palette '{}' has no colours",
                raw.name
            )));
        }

        Ok(Self {
            name: raw.name,
            colors,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; construction rejects empty palettes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The colour at `index`, wrapping around the palette.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Rgb {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    /// Returns the default palette (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in palette fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha palette should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_palettes_parse() {
        assert_eq!(Palette::default().name(), "catppuccin-mocha");
        assert_eq!(Palette::from_name("catppuccin-latte").unwrap().len(), 10);
        assert!(Palette::from_name("solarized").is_none());
    }

    #[test]
    fn color_at_wraps() {
        let palette = Palette::from_toml_str(
            r##"
            name = "two"
            colors = ["#000000", "#ffffff"]
            "##,
        )
        .unwrap();

        assert_eq!(palette.color_at(0), Rgb(0, 0, 0));
        assert_eq!(palette.color_at(3), Rgb(255, 255, 255));
    }

    #[test]
    fn rejects_empty_and_malformed_palettes() {
        let empty = Palette::from_toml_str("name = \"none\"\ncolors = []");
        assert!(matches!(empty, Err(DocketError::Palette(_))));

        let bad = Palette::from_toml_str("name = \"bad\"\ncolors = [\"blue\"]");
        assert!(matches!(bad, Err(DocketError::Palette(_))));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "name = \"custom\"\ncolors = [\"#123456\"]").unwrap();

        let palette = Palette::from_file(&path).unwrap();
        assert_eq!(palette.name(), "custom");
        assert_eq!(palette.color_at(5), Rgb(0x12, 0x34, 0x56));

        let missing = Palette::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(DocketError::Io(_))));
    }
}
