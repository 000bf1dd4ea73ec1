use std::sync::Arc;

use gpui::{TextStyle, Window, WindowTextSystem, px};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LabelRole {
    Tip,
    Input,
}

pub trait TextMeasure {
    /// Rendered width of `text` in the font of the given label.
    fn text_width(&self, role: LabelRole, text: &str) -> f32;
}

/// Width a container needs to show `text` in `role`'s font plus the fixed
/// horizontal padding, truncated to whole pixels.
pub fn content_width(
    measure: &impl TextMeasure,
    role: LabelRole,
    text: &str,
    padding_px: f32,
) -> i32 {
    (measure.text_width(role, text) + padding_px) as i32
}

/// Measures with the window's text system. Holds its own handle so the
/// window stays free for listeners while widths are computed.
pub struct WindowTextMeasure {
    text_system: Arc<WindowTextSystem>,
    text_style: TextStyle,
    tip_font_size: f32,
    input_font_size: f32,
}

impl WindowTextMeasure {
    pub fn new(window: &Window, tip_font_size: f32, input_font_size: f32) -> Self {
        Self {
            text_system: window.text_system().clone(),
            text_style: window.text_style(),
            tip_font_size,
            input_font_size,
        }
    }
}

impl TextMeasure for WindowTextMeasure {
    fn text_width(&self, role: LabelRole, text: &str) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let font_size = match role {
            LabelRole::Tip => px(self.tip_font_size),
            LabelRole::Input => px(self.input_font_size),
        };
        let mut text_style = self.text_style.clone();
        text_style.font_size = font_size.into();
        let run = text_style.to_run(text.len());
        let layout = self.text_system.layout_line(text, font_size, &[run], None);
        let width = f32::from(layout.width);
        if width.is_finite() { width.max(0.0) } else { 0.0 }
    }
}
