//! Drawing primitives for mind-map rendering.
//!
//! The renderer never paints directly. It produces a list of [`DrawCommand`]s
//! which a painting adapter (SVG document, raster canvas) replays in order.
//! This keeps the layout and styling math pure and testable.
//!
//! # Overview
//!
//! - [`DrawCommand`] - A single paint instruction
//! - [`LayeredCommands`] - Commands collected per [`RenderLayer`] and flattened in z-order
//! - [`StrokeDefinition`] - Stroke color, width, cap and join
//! - [`TextDefinition`] / [`measure_text`] - Label styling and measurement

mod command;
mod layer;
mod stroke;
mod text;

pub use command::DrawCommand;
pub use layer::{LayeredCommands, RenderLayer};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
pub use text::{FontWeight, TextDefinition, measure_text};
