//! The editor session: outline text plus a two-view state machine.
//!
//! A session is either in [`View::TextEditing`] or [`View::VisualPreview`].
//! The parse, layout, render and paint pipeline only runs in the preview
//! view: once on entering it and again on every text, theme or zoom change
//! made while it is active. Edits made in the text view are picked up the
//! next time the preview is shown.

use log::{debug, info};

use ramify_core::{outline::Outline, theme::Theme, zoom::Zoom};

use crate::{
    canvas::Canvas,
    config::AppConfig,
    error::RamifyError,
    layout::RadialLayout,
    render::{self, RenderConfig},
};

/// Outline loaded by "New Topic".
pub const NEW_TOPIC_TEMPLATE: &str =
    "# New Topic\n## Subtopic 1\n### Detail 1\n### Detail 2\n## Subtopic 2\n### Detail 3";

/// Outline loaded by "Load Sample"; also the text a new session starts with.
pub const AI_TECHNOLOGIES_SAMPLE: &str = "# AI Technologies\n\
## Machine Learning\n\
### Supervised Learning\n\
### Unsupervised Learning\n\
### Reinforcement Learning\n\
## Natural Language Processing\n\
### Text Generation\n\
### Translation\n\
### Sentiment Analysis\n\
## Computer Vision\n\
### Image Recognition\n\
### Object Detection\n\
### Image Generation";

/// The active editor view.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum View {
    #[default]
    TextEditing,
    VisualPreview,
}

/// An interactive mind-map editing session.
///
/// # Examples
///
/// ```no_run
/// # use ramify::{config::AppConfig, session::{MindMapSession, View}};
/// let mut session = MindMapSession::new(AppConfig::default())?;
/// session.set_text("# Plan\n## Research\n## Build")?;
/// assert!(session.outline().is_none());
///
/// session.show_preview()?;
/// assert_eq!(session.view(), View::VisualPreview);
/// assert_eq!(session.outline().map(|o| o.len()), Some(3));
///
/// let png = session.export_png()?;
/// # Ok::<(), ramify::RamifyError>(())
/// ```
#[derive(Debug)]
pub struct MindMapSession {
    config: AppConfig,
    text: String,
    theme: Theme,
    zoom: Zoom,
    view: View,
    canvas: Canvas,
    outline: Option<Outline>,
    passes: usize,
}

impl MindMapSession {
    /// Creates a session in the text view holding the sample outline.
    ///
    /// Theme and zoom start from the style configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas cannot be allocated.
    pub fn new(config: AppConfig) -> Result<Self, RamifyError> {
        let canvas = Canvas::new(
            config.canvas().width(),
            config.canvas().height(),
            config.style().font_family(),
        )?;
        Ok(Self {
            text: AI_TECHNOLOGIES_SAMPLE.to_string(),
            theme: config.style().theme(),
            zoom: config.style().zoom(),
            view: View::default(),
            canvas,
            outline: None,
            passes: 0,
            config,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// The outline from the most recent pipeline pass, if one has run.
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Number of pipeline passes run so far.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Replaces the outline text.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), RamifyError> {
        self.text = text.into();
        self.refresh()
    }

    /// Loads the "New Topic" template.
    pub fn reset_outline(&mut self) -> Result<(), RamifyError> {
        self.set_text(NEW_TOPIC_TEMPLATE)
    }

    /// Loads the "AI Technologies" sample.
    pub fn load_sample(&mut self) -> Result<(), RamifyError> {
        self.set_text(AI_TECHNOLOGIES_SAMPLE)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), RamifyError> {
        self.theme = theme;
        self.refresh()
    }

    pub fn zoom_in(&mut self) -> Result<(), RamifyError> {
        self.zoom.zoom_in();
        self.zoom_changed()
    }

    pub fn zoom_out(&mut self) -> Result<(), RamifyError> {
        self.zoom.zoom_out();
        self.zoom_changed()
    }

    pub fn reset_zoom(&mut self) -> Result<(), RamifyError> {
        self.zoom.reset();
        self.zoom_changed()
    }

    fn zoom_changed(&mut self) -> Result<(), RamifyError> {
        debug!(zoom:% = self.zoom; "Zoom changed");
        self.refresh()
    }

    /// Switches to the preview view and runs the pipeline.
    pub fn show_preview(&mut self) -> Result<(), RamifyError> {
        info!("Switching to visual preview");
        self.view = View::VisualPreview;
        self.refresh()
    }

    /// Switches to the text view. Nothing is recomputed.
    pub fn show_editor(&mut self) {
        info!("Switching to text editing");
        self.view = View::TextEditing;
    }

    /// Encodes the canvas as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, RamifyError> {
        self.canvas.export_png()
    }

    fn refresh(&mut self) -> Result<(), RamifyError> {
        if self.view != View::VisualPreview {
            debug!("Text view active, skipping pipeline");
            return Ok(());
        }

        let mut outline = ramify_parser::parse(&self.text, self.config.parser());
        RadialLayout::new(&self.config).apply(&mut outline);

        let render_config = RenderConfig::from_app_config(&self.config)?
            .with_theme(self.theme)
            .with_zoom(self.zoom);
        let commands = render::render(&outline, &render_config);
        self.canvas.paint(&commands)?;

        self.outline = Some(outline);
        self.passes += 1;
        debug!(passes = self.passes; "Pipeline pass complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_parse() {
        let config = ramify_parser::ParseConfig::default();
        assert_eq!(ramify_parser::parse(NEW_TOPIC_TEMPLATE, &config).len(), 6);
        assert_eq!(ramify_parser::parse(AI_TECHNOLOGIES_SAMPLE, &config).len(), 13);
    }

    #[test]
    fn test_default_view_is_text_editing() {
        assert_eq!(View::default(), View::TextEditing);
    }
}
