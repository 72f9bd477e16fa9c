//! The pure renderer: turns a laid-out outline into draw commands.
//!
//! Rendering never touches a surface. The command list always starts by
//! clearing the whole canvas and wraps all geometry in a single scale
//! transform. Node positions are divided by the zoom factor before being
//! scaled back, so positions stay fixed on screen while boxes, strokes and
//! labels grow and shrink with the zoom.

use log::{debug, info};

use ramify_core::{
    color::Color,
    draw::{DrawCommand, LayeredCommands, RenderLayer, StrokeCap, StrokeDefinition, StrokeJoin},
    geometry::{Point, Size},
    outline::{NODE_CORNER_RADIUS, Outline},
    theme::Theme,
    zoom::Zoom,
};

use crate::{config::AppConfig, config::StyleConfig, error::RamifyError, layout};

/// Stroke width of edges and node outlines.
pub const STROKE_WIDTH: f32 = 2.0;

/// Everything the renderer needs besides the outline itself.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    size: Size,
    theme: Theme,
    zoom: Zoom,
    background: Option<Color>,
    style: StyleConfig,
}

impl RenderConfig {
    /// Creates a configuration for a canvas of `size` using the default label font.
    pub fn new(size: Size, theme: Theme, zoom: Zoom) -> Self {
        Self {
            size,
            theme,
            zoom,
            background: None,
            style: StyleConfig::default(),
        }
    }

    /// Builds a render configuration from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RamifyError::Config`] if the configured background color is invalid.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, RamifyError> {
        let style = config.style();
        let background = style.background_color().map_err(RamifyError::Config)?;
        Ok(Self {
            size: config.canvas().size(),
            theme: style.theme(),
            zoom: style.zoom(),
            background,
            style: style.clone(),
        })
    }

    /// Overrides the theme background.
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_zoom(mut self, zoom: Zoom) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// The background painted by the clear command.
    pub fn background(&self) -> Color {
        self.background
            .unwrap_or_else(|| self.theme.palette().background())
    }
}

/// Produces the draw commands for a laid-out outline.
///
/// Nodes without a position are skipped, and an edge is only emitted when
/// both of its ends are placed.
pub fn render(outline: &Outline, config: &RenderConfig) -> Vec<DrawCommand> {
    info!(theme = config.theme.name(), zoom = config.zoom.factor(); "Rendering outline");

    let palette = config.theme.palette();
    let zoom = config.zoom.factor();
    let unscale = |point: Point| point.scale(1.0 / zoom);
    let mut edge_stroke = StrokeDefinition::new(palette.edge(), STROKE_WIDTH);
    edge_stroke.set_cap(StrokeCap::Round);
    let mut outline_stroke = StrokeDefinition::new(palette.edge(), STROKE_WIDTH);
    outline_stroke.set_join(StrokeJoin::Round);

    let mut layered = LayeredCommands::new();

    for (parent, child) in outline.edges() {
        let nodes = outline.nodes();
        let (Some(from), Some(to)) = (nodes[parent].position(), nodes[child].position()) else {
            continue;
        };
        layered.add_to_layer(
            RenderLayer::Edge,
            DrawCommand::Line {
                from: unscale(from),
                to: unscale(to),
                stroke: edge_stroke.clone(),
            },
        );
    }

    for node in outline.nodes() {
        let Some(position) = node.position() else {
            continue;
        };
        let center = unscale(position);
        let depth = node.depth();

        layered.add_to_layer(
            RenderLayer::Node,
            DrawCommand::RoundedRect {
                center,
                size: node.box_size(),
                radius: NODE_CORNER_RADIUS,
                fill: palette.node_fill(depth),
                stroke: outline_stroke.clone(),
            },
        );

        let mut definition = layout::label_definition(&config.style, depth);
        definition.set_color(Some(palette.text(depth)));
        // Label right after its own box: a later overlapping box covers it.
        layered.add_to_layer(
            RenderLayer::Node,
            DrawCommand::Text {
                position: center,
                content: node.label().to_string(),
                definition,
            },
        );
    }

    let mut commands = Vec::with_capacity(layered.len() + 3);
    commands.push(DrawCommand::Clear {
        size: config.size,
        background: Some(config.background()),
    });
    commands.push(DrawCommand::PushScale(zoom));
    commands.extend(layered.into_commands());
    commands.push(DrawCommand::PopScale);

    debug!(commands = commands.len(); "Outline rendered");
    commands
}
