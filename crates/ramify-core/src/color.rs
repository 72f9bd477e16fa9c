//! Color handling for Ramify mind maps
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, providing convenience methods for working with colors
//! in theme palettes and draw commands.
//!
//! Colors display as `#rrggbb`; the alpha channel is carried separately
//! through [`Color::alpha`], for `fill`/`fill-opacity` style attribute pairs.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::{AlphaColor, DynamicColor, Rgba8, Srgb};

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let Rgba8 { r, g, b, a } = self.to_rgba8();
        [r, g, b, a].hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use ramify_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Create an opaque sRGB color from 8-bit channels.
    ///
    /// Palette constants are built with this constructor so they never go
    /// through string parsing.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: DynamicColor::from_alpha_color(AlphaColor::<Srgb>::from_rgb8(r, g, b)),
        }
    }

    /// Returns the alpha component of this color, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }

    /// Converts to 8-bit sRGB channels, gamut-clipping if needed.
    pub fn to_rgba8(&self) -> Rgba8 {
        self.color.to_alpha_color::<Srgb>().to_rgba8()
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb8(0, 0, 0)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Rgba8 { r, g, b, .. } = self.to_rgba8();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_color_new_error_mentions_input() {
        let err = Color::new("bogus").unwrap_err();
        assert!(err.contains("bogus"));
    }

    #[test]
    fn test_from_rgb8_matches_hex() {
        let parsed = Color::new("#2563eb").unwrap();
        let built = Color::from_rgb8(0x25, 0x63, 0xeb);
        assert!((parsed.alpha() - built.alpha()).abs() < 0.001);
        assert_eq!(parsed.to_rgba8(), built.to_rgba8());
    }

    #[test]
    fn test_color_default_is_opaque() {
        let color = Color::default();
        assert!((color.alpha() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_color_display_is_hex() {
        assert_eq!(Color::from_rgb8(10, 20, 30).to_string(), "#0a141e");
        assert_eq!(Color::from_rgb8(0x25, 0x63, 0xeb).to_string(), "#2563eb");
        assert_eq!(Color::new("red").unwrap().to_string(), "#ff0000");
    }

    #[test]
    fn test_display_drops_alpha() {
        let color = Color::new("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(color.to_string(), "#ff0000");
        assert!((color.alpha() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
