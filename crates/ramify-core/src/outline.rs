//! The outline model: an ordered sequence of labeled nodes with depths.
//!
//! An [`Outline`] is produced by the parser, annotated in place by the layout
//! pass (positions, parents and box widths) and read by the renderer. It is
//! rebuilt from scratch on every pass; nodes carry no identity beyond their
//! index in the sequence.
//!
//! # Invariants
//!
//! - Node order equals source line order.
//! - Every node has `depth >= 1`.
//! - The first node is the root regardless of its depth.
//! - A resolved parent always precedes its child and has a strictly smaller depth.

use std::fmt::Write as _;

use crate::geometry::{Point, Size};

/// Height of every node box.
pub const NODE_HEIGHT: f32 = 40.0;

/// Corner radius of every node box.
pub const NODE_CORNER_RADIUS: f32 = 10.0;

/// A single node of an outline.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineNode {
    label: String,
    depth: usize,
    position: Option<Point>,
    parent: Option<usize>,
    bounding_width: f32,
}

impl OutlineNode {
    /// Creates an unplaced node.
    ///
    /// A depth of zero is raised to one; zero-depth lines never become nodes.
    pub fn new(label: impl Into<String>, depth: usize) -> Self {
        Self {
            label: label.into(),
            depth: depth.max(1),
            position: None,
            parent: None,
            bounding_width: 0.0,
        }
    }

    /// The display label, with the hierarchy marker stripped.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The hierarchy depth (number of leading marker characters).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The assigned canvas position, or `None` if layout could not place the node.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Index of the parent node in the owning [`Outline`], if any.
    pub fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Width of the drawn box.
    pub fn bounding_width(&self) -> f32 {
        self.bounding_width
    }

    /// Size of the drawn box.
    pub fn box_size(&self) -> Size {
        Size::new(self.bounding_width, NODE_HEIGHT)
    }

    pub fn set_position(&mut self, position: Option<Point>) {
        self.position = position;
    }

    pub fn set_parent(&mut self, parent: Option<usize>) {
        self.parent = parent;
    }

    pub fn set_bounding_width(&mut self, width: f32) {
        self.bounding_width = width;
    }
}

/// An ordered sequence of outline nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    nodes: Vec<OutlineNode>,
}

impl Outline {
    pub fn new(nodes: Vec<OutlineNode>) -> Self {
        Self { nodes }
    }

    /// All nodes in source order.
    pub fn nodes(&self) -> &[OutlineNode] {
        &self.nodes
    }

    /// Mutable access to the nodes, used by the layout pass.
    pub fn nodes_mut(&mut self) -> &mut [OutlineNode] {
        &mut self.nodes
    }

    /// The root node (first in sequence), if any.
    pub fn root(&self) -> Option<&OutlineNode> {
        self.nodes.first()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the parent of the node at `index`, if one was resolved.
    pub fn parent_of(&self, index: usize) -> Option<&OutlineNode> {
        let parent = self.nodes.get(index)?.parent?;
        self.nodes.get(parent)
    }

    /// Iterates over `(parent, child)` index pairs for every resolved parent link.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| node.parent.map(|parent| (parent, index)))
    }

    /// Re-wraps every label with its marker prefix, one node per line.
    ///
    /// Parsing the result yields the same labels and depths.
    ///
    /// # Examples
    ///
    /// ```
    /// # use ramify_core::outline::{Outline, OutlineNode};
    /// let outline = Outline::new(vec![OutlineNode::new("A", 1), OutlineNode::new("B", 2)]);
    /// assert_eq!(outline.to_source('#'), "# A\n## B\n");
    /// ```
    pub fn to_source(&self, marker: char) -> String {
        let mut source = String::new();
        for node in &self.nodes {
            for _ in 0..node.depth {
                source.push(marker);
            }
            // Writing to a String cannot fail.
            let _ = writeln!(source, " {}", node.label);
        }
        source
    }
}

impl FromIterator<OutlineNode> for Outline {
    fn from_iter<I: IntoIterator<Item = OutlineNode>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for Outline {
    type Item = OutlineNode;
    type IntoIter = std::vec::IntoIter<OutlineNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
