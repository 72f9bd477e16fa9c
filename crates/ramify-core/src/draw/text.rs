//! Label styling and measurement.
//!
//! [`TextDefinition`] describes how a node label is drawn, and
//! [`measure_text`] returns the pixel size a label occupies in that style.
//! Measurement shapes the text with `cosmic-text` against the system fonts,
//! falling back to a per-character estimate when no layout runs are produced
//! (for example when no fonts are installed).
//!
//! # Quick Start
//!
//! ```
//! # use ramify_core::draw::{FontWeight, TextDefinition, measure_text};
//! let mut style = TextDefinition::new();
//! style.set_font_size(14.0);
//! style.set_weight(FontWeight::Bold);
//!
//! let size = measure_text("Machine Learning", &style);
//! assert!(size.height() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};
use log::{info, warn};

use crate::{color::Color, geometry::Size};

/// Font weight of a label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Returns the SVG `font-weight` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Defines the visual style of a label.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Inter"` |
/// | Font size | `14` px |
/// | Weight | Normal |
/// | Color | `None` (painter default, typically black) |
#[derive(Debug, Clone, PartialEq)]
pub struct TextDefinition {
    font_family: String,
    font_size: f32,
    weight: FontWeight,
    color: Option<Color>,
}

impl TextDefinition {
    /// Creates a new text definition with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in pixels.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Sets the font family (e.g. "Inter", "sans-serif").
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_weight(&mut self, weight: FontWeight) {
        self.weight = weight;
    }

    /// Sets the label color. `None` leaves the painter default.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }
}

impl Default for TextDefinition {
    fn default() -> Self {
        Self {
            font_family: "Inter".to_string(),
            font_size: 14.0,
            weight: FontWeight::Normal,
            color: None,
        }
    }
}

/// Measures the size of `content` rendered with `definition`.
///
/// Empty content measures as zero, and so does any font size that is not a
/// positive number.
pub fn measure_text(content: &str, definition: &TextDefinition) -> Size {
    let font_size = definition.font_size();
    if !font_size.is_finite() || font_size <= 0.0 {
        warn!(font_size; "Cannot measure text with a non-positive font size");
        return Size::default();
    }
    TEXT_MANAGER
        .get_or_init(TextManager::new)
        .calculate_text_size(content, definition)
}

/// TextManager keeps a single FontSystem alive, since loading system fonts is expensive.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    fn calculate_text_size(&self, text: &str, text_def: &TextDefinition) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let font_size_px = text_def.font_size();
        let line_height = font_size_px * 1.15;

        let mut font_system = match self.font_system.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("FontSystem lock was poisoned, reusing it");
                poisoned.into_inner()
            }
        };

        let metrics = Metrics::new(font_size_px, line_height);
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let weight = match text_def.weight() {
            FontWeight::Normal => Weight::NORMAL,
            FontWeight::Bold => Weight::BOLD,
        };
        let attrs = Attrs::new()
            .family(Family::Name(text_def.font_family()))
            .weight(weight);

        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        for run in &layout_runs {
            if let Some(last) = run.glyphs.last() {
                max_width = max_width.max(last.x + last.w);
            }
            total_height += metrics.line_height;
        }

        if max_width <= 0.0 {
            // No shaped glyphs: estimate from the character count.
            max_width = text.chars().count() as f32 * (font_size_px * 0.55);
            total_height = total_height.max(metrics.line_height);
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
