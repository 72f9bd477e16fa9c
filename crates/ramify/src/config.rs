//! Configuration types for Ramify mind-map rendering.
//!
//! All types implement [`serde::Deserialize`] and every section falls back to
//! its defaults, so an empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`LayoutConfig`] - Radial spacing and angular division.
//! - [`CanvasConfig`] - Size of the raster surface.
//! - [`StyleConfig`] - Theme, zoom, background override and label font.
//! - [`ParseConfig`] - The hierarchy marker character.
//!
//! # Example
//!
//! ```
//! # use ramify::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 1200);
//! assert_eq!(config.layout().angular_slices(), 8);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use ramify_core::{color::Color, geometry::Size, theme::Theme, zoom::Zoom};
pub use ramify_parser::ParseConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Parser configuration section.
    #[serde(default)]
    parser: ParseConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(
        layout: LayoutConfig,
        canvas: CanvasConfig,
        style: StyleConfig,
        parser: ParseConfig,
    ) -> Self {
        Self {
            layout,
            canvas,
            style,
            parser,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns mutable style configuration, used to apply command-line overrides.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    /// Returns the parser configuration.
    pub fn parser(&self) -> &ParseConfig {
        &self.parser
    }
}

/// Radial layout parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LayoutConfig {
    /// Distance between consecutive depth rings.
    #[serde(default = "default_level_spacing")]
    level_spacing: f32,

    /// Number of equal angular slices siblings are spread over.
    #[serde(default = "default_angular_slices")]
    angular_slices: u32,
}

fn default_level_spacing() -> f32 {
    200.0
}

fn default_angular_slices() -> u32 {
    8
}

impl LayoutConfig {
    pub fn new(level_spacing: f32, angular_slices: u32) -> Self {
        Self {
            level_spacing,
            angular_slices,
        }
    }

    pub fn level_spacing(&self) -> f32 {
        self.level_spacing
    }

    /// Returns the slice count. Zero is treated as one.
    pub fn angular_slices(&self) -> u32 {
        self.angular_slices.max(1)
    }

    /// Angle between two consecutive slices, in radians.
    pub fn slice_angle(&self) -> f32 {
        std::f32::consts::TAU / self.angular_slices() as f32
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(default_level_spacing(), default_angular_slices())
    }
}

/// Raster surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_width")]
    width: u32,

    #[serde(default = "default_canvas_height")]
    height: u32,
}

fn default_canvas_width() -> u32 {
    1200
}

fn default_canvas_height() -> u32 {
    800
}

impl CanvasConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The canvas size as floating point geometry.
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::new(default_canvas_width(), default_canvas_height())
    }
}

/// Visual styling configuration.
///
/// Controls the theme, the zoom factor and the label font. The background
/// color, when set, overrides the theme background. A font size that is not
/// a positive number is rejected during deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawStyleConfig")]
pub struct StyleConfig {
    theme: Theme,
    zoom: f32,
    background_color: Option<String>,
    font_family: String,
    font_size: f32,
}

#[derive(Deserialize)]
struct RawStyleConfig {
    #[serde(default)]
    theme: Theme,

    #[serde(default = "default_zoom")]
    zoom: f32,

    #[serde(default)]
    background_color: Option<String>,

    #[serde(default = "default_font_family")]
    font_family: String,

    #[serde(default = "default_font_size")]
    font_size: f32,
}

impl TryFrom<RawStyleConfig> for StyleConfig {
    type Error = String;

    fn try_from(raw: RawStyleConfig) -> Result<Self, Self::Error> {
        if !raw.font_size.is_finite() || raw.font_size <= 0.0 {
            return Err(format!(
                "font_size must be a positive number, got {}",
                raw.font_size
            ));
        }
        Ok(Self {
            theme: raw.theme,
            zoom: raw.zoom,
            background_color: raw.background_color,
            font_family: raw.font_family,
            font_size: raw.font_size,
        })
    }
}

fn default_zoom() -> f32 {
    1.0
}

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_font_size() -> f32 {
    14.0
}

impl StyleConfig {
    /// Returns the configured theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the configured zoom, clamped into the allowed range.
    pub fn zoom(&self) -> Zoom {
        Zoom::new(self.zoom)
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.zoom = zoom.factor();
    }

    pub fn set_background_color(&mut self, color: Option<String>) {
        self.background_color = color;
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            zoom: default_zoom(),
            background_color: None,
            font_family: default_font_family(),
            font_size: default_font_size(),
        }
    }
}
