//! SVG export.
//!
//! Replays a command list into an [`svg::Document`]. Scale transforms become
//! nested `<g transform="scale(..)">` groups; commands inside a group keep
//! their unscaled coordinates.

use log::{debug, warn};
use svg::{Document, node::Text as SvgText, node::element as svg_element};

use ramify_core::{apply_stroke, draw::DrawCommand, geometry::Size};

/// Builds a complete SVG document from draw commands.
///
/// The document size comes from the first [`DrawCommand::Clear`]; without
/// one it is the extent of the drawn commands measured from the origin.
pub fn to_svg_document(commands: &[DrawCommand]) -> String {
    let mut size: Option<Size> = None;
    let mut groups = vec![svg_element::Group::new().set("data-layer", "canvas")];

    for command in commands {
        match command {
            DrawCommand::Clear {
                size: clear_size,
                background,
            } => {
                size.get_or_insert(*clear_size);
                if let Some(background) = background {
                    let rect = svg_element::Rectangle::new()
                        .set("x", 0)
                        .set("y", 0)
                        .set("width", clear_size.width())
                        .set("height", clear_size.height())
                        .set("fill", background.to_string())
                        .set("fill-opacity", background.alpha());
                    push(&mut groups, rect);
                }
            }
            DrawCommand::PushScale(factor) => {
                groups.push(
                    svg_element::Group::new().set("transform", format!("scale({factor})")),
                );
            }
            DrawCommand::PopScale => {
                if groups.len() > 1 {
                    if let Some(group) = groups.pop() {
                        push(&mut groups, group);
                    }
                } else {
                    warn!("Unbalanced PopScale ignored");
                }
            }
            DrawCommand::Line { from, to, stroke } => {
                let line = svg_element::Line::new()
                    .set("x1", from.x())
                    .set("y1", from.y())
                    .set("x2", to.x())
                    .set("y2", to.y());
                push(&mut groups, apply_stroke!(line, stroke));
            }
            DrawCommand::RoundedRect {
                center,
                size,
                radius,
                fill,
                stroke,
            } => {
                let rect = svg_element::Rectangle::new()
                    .set("x", center.x() - size.width() / 2.0)
                    .set("y", center.y() - size.height() / 2.0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("rx", *radius)
                    .set("ry", *radius)
                    .set("fill", fill.to_string())
                    .set("fill-opacity", fill.alpha());
                push(&mut groups, apply_stroke!(rect, stroke));
            }
            DrawCommand::Text {
                position,
                content,
                definition,
            } => {
                let mut text = svg_element::Text::new("")
                    .set("x", position.x())
                    .set("y", position.y())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-family", definition.font_family())
                    .set("font-size", definition.font_size())
                    .set("font-weight", definition.weight().to_svg_value());
                if let Some(color) = definition.color() {
                    text = text
                        .set("fill", color.to_string())
                        .set("fill-opacity", color.alpha());
                }
                push(&mut groups, text.add(SvgText::new(content.as_str())));
            }
        }
    }

    // Close groups left open by a missing PopScale.
    while groups.len() > 1 {
        if let Some(group) = groups.pop() {
            push(&mut groups, group);
        }
    }

    let size = size.or_else(|| content_extent(commands));

    let mut document = Document::new();
    if let Some(size) = size {
        document = document
            .set("width", size.width())
            .set("height", size.height())
            .set("viewBox", (0.0, 0.0, size.width(), size.height()));
    }
    for group in groups {
        document = document.add(group);
    }

    let svg = document.to_string();
    debug!(commands = commands.len(), bytes = svg.len(); "SVG document built");
    svg
}

/// Size of the box from the origin to the far corner of every command's
/// bounds, ignoring scale transforms.
fn content_extent(commands: &[DrawCommand]) -> Option<Size> {
    commands
        .iter()
        .filter_map(DrawCommand::bounds)
        .reduce(|acc, bounds| acc.merge(&bounds))
        .map(|bounds| Size::new(bounds.max_x().max(0.0), bounds.max_y().max(0.0)))
}

fn push<T>(groups: &mut [svg_element::Group], node: T)
where
    T: Into<Box<dyn svg::Node>>,
{
    if let Some(group) = groups.last_mut() {
        let current = std::mem::replace(group, svg_element::Group::new());
        *group = current.add(node);
    }
}

#[cfg(test)]
mod tests {
    use ramify_core::{
        color::Color,
        draw::{StrokeDefinition, TextDefinition},
        geometry::Point,
    };

    use super::*;

    fn clear() -> DrawCommand {
        DrawCommand::Clear {
            size: Size::new(1200.0, 800.0),
            background: Some(Color::from_rgb8(255, 255, 255)),
        }
    }

    #[test]
    fn test_document_size_from_clear() {
        let svg = to_svg_document(&[clear()]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="1200""#));
        assert!(svg.contains(r#"viewBox="0 0 1200 800""#));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn test_colors_are_written_as_hex() {
        let svg = to_svg_document(&[
            DrawCommand::Clear {
                size: Size::new(10.0, 10.0),
                background: Some(Color::from_rgb8(255, 0, 0)),
            },
            DrawCommand::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 10.0),
                stroke: StrokeDefinition::new(Color::from_rgb8(0x25, 0x63, 0xeb), 2.0),
            },
        ]);
        assert!(svg.contains(r##"fill="#ff0000""##));
        assert!(svg.contains(r##"stroke="#2563eb""##));
        assert!(!svg.contains("color("));
    }

    #[test]
    fn test_scale_group_wraps_shapes() {
        let svg = to_svg_document(&[
            clear(),
            DrawCommand::PushScale(1.5),
            DrawCommand::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(10.0, 10.0),
                stroke: StrokeDefinition::new(Color::default(), 2.0),
            },
            DrawCommand::PopScale,
        ]);
        let scale = svg.find("scale(1.5)").unwrap();
        let line = svg.find("<line").unwrap();
        assert!(scale < line);
        assert!(svg.contains(r#"stroke-width="2""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let svg = to_svg_document(&[DrawCommand::Text {
            position: Point::new(5.0, 5.0),
            content: "R&D <ideas>".to_string(),
            definition: TextDefinition::default(),
        }]);
        assert!(svg.contains("R&amp;D &lt;ideas&gt;"));
        assert!(svg.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let svg = to_svg_document(&[DrawCommand::PopScale, DrawCommand::PushScale(2.0)]);
        assert!(svg.contains("scale(2)"));
    }

    #[test]
    fn test_rect_is_centered() {
        let svg = to_svg_document(&[DrawCommand::RoundedRect {
            center: Point::new(100.0, 100.0),
            size: Size::new(60.0, 40.0),
            radius: 10.0,
            fill: Color::default(),
            stroke: StrokeDefinition::default(),
        }]);
        assert!(svg.contains(r#"x="70""#));
        assert!(svg.contains(r#"y="80""#));
        assert!(svg.contains(r#"rx="10""#));
        assert!(svg.contains(r#"viewBox="0 0 130 120""#));
    }
}
