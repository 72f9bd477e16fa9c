//! Paint instructions produced by the renderer.

use crate::{
    color::Color,
    draw::{StrokeDefinition, TextDefinition},
    geometry::{Bounds, Point, Size},
};

/// A single paint instruction.
///
/// Coordinates are in the user space that is current when the command is
/// replayed: inside a [`DrawCommand::PushScale`] / [`DrawCommand::PopScale`]
/// pair every coordinate and size is multiplied by the scale factor.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Reset the whole surface. `background: None` leaves it transparent.
    Clear {
        size: Size,
        background: Option<Color>,
    },
    /// Start a uniform scale transform.
    PushScale(f32),
    /// End the innermost scale transform.
    PopScale,
    /// A straight edge between two points.
    Line {
        from: Point,
        to: Point,
        stroke: StrokeDefinition,
    },
    /// A filled and stroked rectangle with rounded corners, centered on `center`.
    RoundedRect {
        center: Point,
        size: Size,
        radius: f32,
        fill: Color,
        stroke: StrokeDefinition,
    },
    /// A text label centered horizontally and vertically on `position`.
    Text {
        position: Point,
        content: String,
        definition: TextDefinition,
    },
}

impl DrawCommand {
    /// Returns the area this command touches in its own user space, if any.
    ///
    /// Transform and clear commands have no bounds. Text bounds are not
    /// measured here and are reported as a zero-size box at the anchor.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Clear { .. } | Self::PushScale(_) | Self::PopScale => None,
            Self::Line { from, to, .. } => {
                let a = from.to_bounds(Size::default());
                Some(a.merge(&to.to_bounds(Size::default())))
            }
            Self::RoundedRect { center, size, .. } => Some(center.to_bounds(*size)),
            Self::Text { position, .. } => Some(position.to_bounds(Size::default())),
        }
    }
}
