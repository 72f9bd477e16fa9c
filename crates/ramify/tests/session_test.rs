//! Integration tests for the editor session state machine

use proptest::prelude::*;

use ramify::{
    color::Color,
    config::AppConfig,
    session::{AI_TECHNOLOGIES_SAMPLE, MindMapSession, NEW_TOPIC_TEMPLATE, View},
    theme::Theme,
    zoom::Zoom,
};

fn session() -> MindMapSession {
    MindMapSession::new(AppConfig::default()).expect("Failed to create session")
}

#[test]
fn test_starts_in_text_view_with_sample() {
    let session = session();
    assert_eq!(session.view(), View::TextEditing);
    assert_eq!(session.text(), AI_TECHNOLOGIES_SAMPLE);
    assert_eq!(session.zoom(), Zoom::default());
    assert_eq!(session.theme(), Theme::Default);
    assert!(session.outline().is_none());
}

#[test]
fn test_no_pipeline_in_text_view() {
    let mut session = session();
    session.set_text("# Edited").unwrap();
    session.set_theme(Theme::Dark).unwrap();
    session.zoom_in().unwrap();
    session.reset_outline().unwrap();

    assert_eq!(session.passes(), 0);
    assert!(session.outline().is_none());
    assert_eq!(session.text(), NEW_TOPIC_TEMPLATE);
}

#[test]
fn test_changes_in_preview_rerun_pipeline() {
    let mut session = session();
    session.show_preview().unwrap();
    assert_eq!(session.passes(), 1);
    assert_eq!(session.outline().map(|o| o.len()), Some(13));

    session.set_text("# Only").unwrap();
    session.set_theme(Theme::Colorful).unwrap();
    session.zoom_out().unwrap();
    session.reset_zoom().unwrap();
    assert_eq!(session.passes(), 5);
    assert_eq!(session.outline().map(|o| o.len()), Some(1));
}

#[test]
fn test_preview_edit_preview_is_deterministic() {
    let mut session = session();
    session.show_preview().unwrap();
    let first = session.outline().cloned();
    let first_png = session.export_png().unwrap();

    session.show_editor();
    session.show_preview().unwrap();

    assert_eq!(session.outline().cloned(), first);
    assert_eq!(session.export_png().unwrap(), first_png);
}

#[test]
fn test_edits_in_text_view_apply_on_preview() {
    let mut session = session();
    session.show_preview().unwrap();
    session.show_editor();
    session.set_text("# A\n## B").unwrap();
    assert_eq!(session.outline().map(|o| o.len()), Some(13));

    session.show_preview().unwrap();
    assert_eq!(session.outline().map(|o| o.len()), Some(2));
}

fn pixel_rgb(session: &MindMapSession, x: f32, y: f32) -> (u8, u8, u8) {
    let pixel = session
        .canvas()
        .pixmap()
        .pixel(x as u32, y as u32)
        .expect("Pixel outside the canvas");
    (pixel.red(), pixel.green(), pixel.blue())
}

fn expected_rgb(color: Color) -> (u8, u8, u8) {
    let rgba = color.to_rgba8();
    (rgba.r, rgba.g, rgba.b)
}

#[test]
fn test_preview_paints_theme_colors() {
    for theme in [Theme::Default, Theme::Dark] {
        let mut session = session();
        session.set_theme(theme).unwrap();
        session.show_preview().unwrap();

        let palette = theme.palette();
        let root = session.outline().and_then(|o| o.root()).cloned().unwrap();
        let center = root.position().unwrap();
        // Inside the root box, left of the centered label.
        let inside_x = center.x() - root.box_size().width() / 2.0 + 6.0;

        assert_eq!(
            pixel_rgb(&session, 5.0, 5.0),
            expected_rgb(palette.background()),
            "background for {theme:?}"
        );
        assert_eq!(
            pixel_rgb(&session, inside_x, center.y()),
            expected_rgb(palette.node_fill(1)),
            "root fill for {theme:?}"
        );
    }
}

#[derive(Debug, Clone, Copy)]
enum ZoomStep {
    In,
    Out,
    Reset,
}

fn zoom_step() -> impl Strategy<Value = ZoomStep> {
    prop_oneof![Just(ZoomStep::In), Just(ZoomStep::Out), Just(ZoomStep::Reset)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_zoom_stays_in_range(steps in prop::collection::vec(zoom_step(), 0..40)) {
        let mut session = session();
        for step in steps {
            match step {
                ZoomStep::In => session.zoom_in().unwrap(),
                ZoomStep::Out => session.zoom_out().unwrap(),
                ZoomStep::Reset => session.reset_zoom().unwrap(),
            }
            let factor = session.zoom().factor();
            prop_assert!((Zoom::MIN..=Zoom::MAX).contains(&factor));
        }
    }
}
