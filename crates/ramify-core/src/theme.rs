//! Named color themes for rendered mind maps.
//!
//! A [`Theme`] selects a [`Palette`], the full set of colors the renderer
//! needs: edge strokes, node fills and label colors for root-level and deeper
//! nodes, plus the canvas background.
//!
//! # Example
//!
//! ```
//! # use ramify_core::theme::Theme;
//! let theme: Theme = "dark".parse().unwrap();
//! let palette = theme.palette();
//! assert_ne!(palette.node_fill(1), palette.node_fill(2));
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::color::Color;

/// The named themes a mind map can be rendered with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette.
    #[default]
    Default,
    /// Dark palette.
    Dark,
    /// Accepted for compatibility; renders with the light palette.
    Colorful,
}

impl Theme {
    /// Every theme, in menu order.
    pub const ALL: [Theme; 3] = [Theme::Default, Theme::Dark, Theme::Colorful];

    /// Returns the theme name as used in configuration files and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Dark => "dark",
            Self::Colorful => "colorful",
        }
    }

    /// Returns the palette used to paint this theme.
    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette::dark(),
            Self::Default | Self::Colorful => Palette::light(),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" | "light" => Ok(Self::Default),
            "dark" => Ok(Self::Dark),
            "colorful" => Ok(Self::Colorful),
            _ => {
                let names: Vec<_> = Self::ALL.iter().map(|theme| theme.name()).collect();
                Err(format!(
                    "unknown theme `{s}`, expected one of: {}",
                    names.join(", ")
                ))
            }
        }
    }
}

/// The colors used to paint one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    edge: Color,
    root_fill: Color,
    branch_fill: Color,
    root_text: Color,
    branch_text: Color,
    background: Color,
}

impl Palette {
    fn light() -> Self {
        Self {
            edge: Color::from_rgb8(0x25, 0x63, 0xeb),
            root_fill: Color::from_rgb8(0x3b, 0x82, 0xf6),
            branch_fill: Color::from_rgb8(0xf8, 0xfa, 0xfc),
            root_text: Color::from_rgb8(0xff, 0xff, 0xff),
            branch_text: Color::from_rgb8(0x1e, 0x1e, 0x1e),
            background: Color::from_rgb8(0xff, 0xff, 0xff),
        }
    }

    fn dark() -> Self {
        Self {
            edge: Color::from_rgb8(0x63, 0x66, 0xf1),
            root_fill: Color::from_rgb8(0x4f, 0x46, 0xe5),
            branch_fill: Color::from_rgb8(0x1e, 0x29, 0x3b),
            root_text: Color::from_rgb8(0xff, 0xff, 0xff),
            branch_text: Color::from_rgb8(0xff, 0xff, 0xff),
            background: Color::from_rgb8(0x0f, 0x17, 0x2a),
        }
    }

    /// Stroke color for edges and node borders.
    pub fn edge(&self) -> Color {
        self.edge
    }

    /// Fill color of a node box at the given depth.
    ///
    /// Depth-1 nodes are highlighted; every deeper node shares one fill.
    pub fn node_fill(&self, depth: usize) -> Color {
        if depth == 1 {
            self.root_fill
        } else {
            self.branch_fill
        }
    }

    /// Label color of a node at the given depth.
    pub fn text(&self, depth: usize) -> Color {
        if depth == 1 {
            self.root_text
        } else {
            self.branch_text
        }
    }

    /// Canvas background color.
    pub fn background(&self) -> Color {
        self.background
    }
}
