use std::time::Duration;

use gpui::{
    Animation, AnimationExt, AnyElement, InteractiveElement, IntoElement, ParentElement,
    SharedString, Styled, Window, div, px,
};

use crate::id::ComponentId;
use crate::style::Size;
use crate::theme::Theme;

use super::query_text::QueryText;
use super::utils::{quantized_stroke_px, resolve_hsla};

const CARET_BLINK_TOGGLE_MS: u64 = 530;
const CARET_BLINK_CYCLE_MS: u64 = CARET_BLINK_TOGGLE_MS * 2;

pub(crate) struct FieldView<'a> {
    pub id: &'a ComponentId,
    pub query: &'a QueryText,
    pub placeholder: &'a SharedString,
    pub focused: bool,
    pub size: Size,
    pub theme: &'a Theme,
}

/// Text row of the search field: placeholder when empty, otherwise the text
/// split around a blinking caret.
pub(crate) fn render_field(view: FieldView<'_>, window: &Window) -> AnyElement {
    let tokens = &view.theme.search_box;
    let font_size = view.size.input_font_size_px();
    let mut row = div()
        .flex()
        .flex_row()
        .flex_none()
        .items_center()
        .whitespace_nowrap()
        .text_size(px(font_size))
        .text_color(resolve_hsla(view.theme, &tokens.fg));

    if view.query.is_empty() {
        if view.focused {
            row = row.child(caret(&view, window));
        }
        return row
            .child(
                div()
                    .text_color(resolve_hsla(view.theme, &tokens.placeholder))
                    .child(view.placeholder.clone()),
            )
            .into_any_element();
    }

    let before = view.query.before_caret().to_string();
    let after = view.query.after_caret().to_string();
    if !before.is_empty() {
        row = row.child(before);
    }
    if view.focused {
        row = row.child(caret(&view, window));
    }
    if !after.is_empty() {
        row = row.child(after);
    }
    row.into_any_element()
}

fn caret(view: &FieldView<'_>, window: &Window) -> AnyElement {
    div()
        .id(view.id.slot("caret"))
        .flex_none()
        .w(quantized_stroke_px(window, 1.5))
        .h(px(view.size.input_font_size_px() + 2.0))
        .bg(resolve_hsla(view.theme, &view.theme.search_box.caret))
        .with_animation(
            view.id.slot("caret-blink"),
            Animation::new(Duration::from_millis(CARET_BLINK_CYCLE_MS))
                .repeat()
                .with_easing(gpui::linear),
            |this, delta| {
                let visible = ((delta * 2.0).fract()) < 0.5;
                this.opacity(if visible { 1.0 } else { 0.0 })
            },
        )
        .into_any_element()
}
