//! Unit tests for the line scanner.

use crate::parser::{OutlineLine, outline_line, parse_line};

fn scan(line: &str) -> Option<OutlineLine<'_>> {
    let mut input = line;
    outline_line(&mut input, '#').ok()
}

#[test]
fn test_depth_is_marker_run_length() {
    assert_eq!(scan("# A").map(|l| l.depth), Some(1));
    assert_eq!(scan("#### Deep").map(|l| l.depth), Some(4));
}

#[test]
fn test_single_separator_is_stripped() {
    assert_eq!(scan("## Label").map(|l| l.label), Some("Label"));
    assert_eq!(scan("##\tLabel").map(|l| l.label), Some("Label"));
}

#[test]
fn test_only_one_separator_is_stripped() {
    assert_eq!(scan("#   spaced").map(|l| l.label), Some("  spaced"));
}

#[test]
fn test_label_without_separator() {
    assert_eq!(scan("##Glued").map(|l| l.label), Some("Glued"));
}

#[test]
fn test_marker_only_line_has_empty_label() {
    assert_eq!(scan("###"), Some(OutlineLine { depth: 3, label: "" }));
    assert_eq!(scan("# "), Some(OutlineLine { depth: 1, label: "" }));
}

#[test]
fn test_marker_inside_label_is_kept() {
    assert_eq!(scan("# C# and F#").map(|l| l.label), Some("C# and F#"));
}

#[test]
fn test_line_without_leading_marker_fails() {
    assert!(scan("plain text").is_none());
    assert!(scan("  # indented").is_none());
    assert!(scan("").is_none());
}

#[test]
fn test_parse_line_skips_blank_lines() {
    assert!(parse_line(1, "", '#').is_none());
    assert!(parse_line(1, "   \t", '#').is_none());
}

#[test]
fn test_parse_line_strips_carriage_return() {
    let node = parse_line(1, "## Windows\r", '#').unwrap();
    assert_eq!(node.label(), "Windows");
    assert_eq!(node.depth(), 2);
}

#[test]
fn test_parse_line_strips_repeated_carriage_returns() {
    let node = parse_line(1, "# a\r\r", '#').unwrap();
    assert_eq!(node.label(), "a");
}

#[test]
fn test_parse_line_multibyte_marker() {
    let node = parse_line(1, "•• Bullet", '•').unwrap();
    assert_eq!(node.depth(), 2);
    assert_eq!(node.label(), "Bullet");
}

#[test]
fn test_parse_line_leaves_node_unplaced() {
    let node = parse_line(1, "# Root", '#').unwrap();
    assert!(node.position().is_none());
    assert!(node.parent().is_none());
}
