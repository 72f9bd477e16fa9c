//! Layer-based ordering of draw commands.
//!
//! Drawables add their commands to a [`RenderLayer`]; when flattened, commands
//! are emitted layer by layer from bottom to top, keeping insertion order
//! inside each layer. Edges therefore always sit below every node, regardless
//! of the order in which nodes are visited, while a node's label stays
//! directly above its own box.
//!
//! # Example
//!
//! ```
//! # use ramify_core::draw::{DrawCommand, LayeredCommands, RenderLayer};
//! let mut output = LayeredCommands::new();
//! output.add_to_layer(RenderLayer::Node, DrawCommand::PopScale);
//! output.add_to_layer(RenderLayer::Edge, DrawCommand::PushScale(1.0));
//!
//! let commands = output.into_commands();
//! assert_eq!(commands[0], DrawCommand::PushScale(1.0));
//! ```

use crate::draw::DrawCommand;

/// Defines the rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Connecting edges between parent and child
    Edge,
    /// Node boxes, each followed by its label
    Node,
}

/// Draw commands grouped by rendering layer.
#[derive(Debug, Default)]
pub struct LayeredCommands {
    items: Vec<(RenderLayer, DrawCommand)>,
}

impl LayeredCommands {
    /// Creates a new empty `LayeredCommands`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single command to the specified layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, command: DrawCommand) {
        self.items.push((layer, command));
    }

    /// Returns `true` if no command has been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Flattens all layers into a command list, bottom layer first.
    pub fn into_commands(mut self) -> Vec<DrawCommand> {
        // Stable sort keeps insertion order within a layer
        self.items.sort_by_key(|(layer, _)| *layer);
        self.items.into_iter().map(|(_, command)| command).collect()
    }
}
