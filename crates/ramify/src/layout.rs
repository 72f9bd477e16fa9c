//! Radial layout.
//!
//! The first node sits at the canvas center. Every other node is placed on a
//! ring around its parent whose radius grows with depth, at an angle chosen by
//! counting how many nodes have been placed since the outline last went one
//! level deeper. The scheme is deliberately simple: with the default eight
//! slices a ninth sibling lands on top of the first.

use log::{debug, info, trace};

use ramify_core::{
    draw::{FontWeight, TextDefinition, measure_text},
    geometry::Point,
    outline::Outline,
};

use crate::config::{AppConfig, LayoutConfig, StyleConfig};

/// Horizontal padding added to the measured label width.
pub const LABEL_PADDING: f32 = 40.0;

/// Direction of the first node on every ring.
const START_ANGLE: f32 = 0.0;

/// Returns the text styling for a label at `depth`, without color.
///
/// Shared by layout (for measuring) and rendering (for drawing) so that box
/// widths always fit the label as painted.
pub fn label_definition(style: &StyleConfig, depth: usize) -> TextDefinition {
    let mut definition = TextDefinition::new();
    definition.set_font_family(style.font_family());
    definition.set_font_size(style.font_size());
    definition.set_weight(if depth == 1 {
        FontWeight::Bold
    } else {
        FontWeight::Normal
    });
    definition
}

/// Places outline nodes around the canvas center.
#[derive(Debug, Clone)]
pub struct RadialLayout {
    center: Point,
    layout: LayoutConfig,
    style: StyleConfig,
}

impl RadialLayout {
    /// Creates a layout engine for the canvas and spacing in `config`.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            center: config.canvas().size().center(),
            layout: *config.layout(),
            style: config.style().clone(),
        }
    }

    /// Returns the point the root node is placed at.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Resolves parents, positions and box widths for every node in place.
    ///
    /// Any previous annotation is discarded first, so applying the layout
    /// twice gives the same result as applying it once.
    pub fn apply(&self, outline: &mut Outline) {
        info!(nodes = outline.len(); "Calculating radial layout");

        let nodes = outline.nodes_mut();
        for node in nodes.iter_mut() {
            let definition = label_definition(&self.style, node.depth());
            let width = measure_text(node.label(), &definition).width() + LABEL_PADDING;
            node.set_bounding_width(width);
            node.set_parent(None);
            node.set_position(None);
        }

        let Some(root) = nodes.first_mut() else {
            debug!("Empty outline, nothing to place");
            return;
        };
        root.set_position(Some(self.center));

        let spacing = self.layout.level_spacing();
        let slice = self.layout.slice_angle();

        let mut ancestors: Vec<usize> = vec![0];
        let mut current_level = 1;
        let mut nodes_at_level = 0u32;
        let mut unplaced = 0usize;

        for index in 1..nodes.len() {
            let depth = nodes[index].depth();
            if depth > current_level {
                nodes_at_level = 0;
                current_level = depth;
            }

            while ancestors
                .last()
                .is_some_and(|&top| nodes[top].depth() >= depth)
            {
                ancestors.pop();
            }
            let parent = ancestors.last().copied();
            ancestors.push(index);
            nodes[index].set_parent(parent);

            let Some(parent) = parent else {
                trace!(index, depth; "No ancestor, leaving node unplaced");
                unplaced += 1;
                continue;
            };

            let radius = spacing * (depth - 1) as f32;
            let angle = START_ANGLE + nodes_at_level as f32 * slice;
            nodes_at_level += 1;

            let position = nodes[parent]
                .position()
                .map(|origin| origin.add_point(Point::from_polar(radius, angle)));
            if position.is_none() {
                unplaced += 1;
            }
            trace!(index, parent, radius, angle, placed = position.is_some(); "Placed node");
            nodes[index].set_position(position);
        }

        debug!(nodes = nodes.len(), unplaced; "Radial layout calculated");
    }
}

/// Convenience wrapper: lays out `outline` with `config` and returns it.
pub fn layout(mut outline: Outline, config: &AppConfig) -> Outline {
    RadialLayout::new(config).apply(&mut outline);
    outline
}
