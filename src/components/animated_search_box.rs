use std::time::Instant;

use gpui::{
    ClickEvent, Context, FocusHandle, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Subscription,
    Window, div, px, svg,
};

use crate::error::SearchBoxResult;
use crate::icon::SearchIcon;
use crate::id::ComponentId;
use crate::provider::SearchProvider;
use crate::style::{Radius, Size};

use super::animated_search_state::{AnimatedSearchState, SearchEffects};
use super::field::{FieldView, render_field};
use super::input_mode::KeyboardRequest;
use super::query_text::QueryText;
use super::search_actions::{
    Commit, DeleteBackward, DeleteForward, Dismiss, MoveEnd, MoveHome, MoveLeft, MoveRight,
    SEARCH_FIELD_KEY_CONTEXT, ensure_search_keybindings,
};
use super::search_box::SearchHandler;
use super::text_metrics::WindowTextMeasure;
use super::utils::{apply_rounding, quantized_stroke_px, resolve_hsla};
use super::width_transition::{SearchWidth, TransitionPhase};

/// Search box with a clear button whose container width follows its content:
/// opening, committing and clearing animate between the tip and hint widths.
pub struct AnimatedSearchBox {
    id: ComponentId,
    state: AnimatedSearchState,
    focus_handle: FocusHandle,
    on_search: Option<SearchHandler>,
    size: Size,
    _subscriptions: Vec<Subscription>,
}

impl AnimatedSearchBox {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        ensure_search_keybindings(cx);
        let focus_handle = cx.focus_handle();
        let subscriptions = vec![cx.on_blur(&focus_handle, window, |this, window, cx| {
            let effects = this.state.focus_lost();
            this.apply_effects(effects, window, cx);
        })];

        Self {
            id: ComponentId::numbered("animated-search-box", cx.entity_id().as_u64()),
            state: AnimatedSearchState::new(SearchProvider::metrics(cx)),
            focus_handle,
            on_search: None,
            size: Size::Md,
            _subscriptions: subscriptions,
        }
    }

    pub fn set_hint(&mut self, hint: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.state.set_hint(hint);
        cx.notify();
    }

    pub fn set_tips(&mut self, tips: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.state.set_tips(tips);
        cx.notify();
    }

    pub fn set_background_radius(
        &mut self,
        radius: f32,
        cx: &mut Context<Self>,
    ) -> SearchBoxResult<()> {
        self.state.set_background_radius(radius)?;
        cx.notify();
        Ok(())
    }

    pub fn set_on_search(
        &mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) {
        self.on_search = Some(std::rc::Rc::new(handler));
    }

    pub fn set_size(&mut self, size: Size, cx: &mut Context<Self>) {
        self.size = size;
        cx.notify();
    }

    /// Empties the field without animating the container.
    pub fn clear_text(&mut self, cx: &mut Context<Self>) {
        if self.state.clear_text() {
            cx.notify();
        }
    }

    pub fn text(&self) -> &str {
        self.state.text()
    }

    pub fn is_input_mode_open(&self) -> bool {
        self.state.is_input_mode_open()
    }

    pub fn focus_handle(&self) -> &FocusHandle {
        &self.focus_handle
    }

    fn measure(&self, window: &Window) -> WindowTextMeasure {
        WindowTextMeasure::new(
            window,
            self.size.tip_font_size_px(),
            self.size.input_font_size_px(),
        )
    }

    fn tap_tip(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        // An open field that lost focus after a commit takes it back on click.
        if self.state.is_input_mode_open() {
            window.focus(&self.focus_handle, cx);
            return;
        }
        let measure = self.measure(window);
        let Some(effects) = self.state.tap_tip(&measure, Instant::now()) else {
            return;
        };
        self.apply_effects(effects, window, cx);
    }

    fn commit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.state.is_input_mode_open() {
            return;
        }
        let measure = self.measure(window);
        let now = Instant::now();
        let effects = match self.on_search.clone() {
            Some(handler) => {
                let mut deliver = |text: SharedString| handler(text, window, cx);
                self.state.commit(&measure, now, Some(&mut deliver))
            }
            None => self.state.commit(&measure, now, None),
        };
        self.apply_effects(effects, window, cx);
    }

    fn clear_pressed(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let measure = self.measure(window);
        let effects = self.state.clear_pressed(&measure, Instant::now());
        self.apply_effects(effects, window, cx);
    }

    fn edit(&mut self, apply: impl FnOnce(&mut QueryText) -> bool, cx: &mut Context<Self>) {
        if !self.state.is_input_mode_open() {
            return;
        }
        if self.state.edit(apply) {
            cx.notify();
        }
    }

    fn move_caret(&mut self, apply: impl FnOnce(&mut QueryText), cx: &mut Context<Self>) {
        self.edit(
            |query| {
                apply(query);
                true
            },
            cx,
        );
    }

    fn apply_effects(
        &mut self,
        effects: SearchEffects,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match effects.keyboard() {
            Some(KeyboardRequest::Present) => window.focus(&self.focus_handle, cx),
            Some(KeyboardRequest::Dismiss) => {
                if self.focus_handle.is_focused(window) {
                    window.blur();
                }
            }
            None => {}
        }
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let modifiers = &event.keystroke.modifiers;
        if modifiers.control || modifiers.platform || modifiers.function || modifiers.alt {
            return;
        }
        let Some(text) = event.keystroke.key_char.as_deref() else {
            return;
        };
        self.edit(|query| query.insert(text), cx);
        cx.stop_propagation();
    }
}

impl Render for AnimatedSearchBox {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.state.advance(Instant::now()) == TransitionPhase::Running {
            window.request_animation_frame();
        }

        let theme = SearchProvider::theme(cx);
        let tokens = &theme.search_box;
        let height = self.size.height_px();
        let icon_size = px(self.size.icon_px());
        let focused = self.focus_handle.is_focused(window);
        let radius = self
            .state
            .background_radius()
            .unwrap_or_else(|| Radius::Pill.px_for_height(height));

        let mut root = div()
            .id(self.id.clone())
            .key_context(SEARCH_FIELD_KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .flex()
            .flex_row()
            .flex_none()
            .items_center()
            .gap_2()
            .h(px(height))
            .px(px(12.0))
            .overflow_hidden()
            .bg(resolve_hsla(&theme, &tokens.bg))
            .border(quantized_stroke_px(window, 1.0))
            .border_color(if focused {
                resolve_hsla(&theme, &tokens.border_focus)
            } else {
                gpui::transparent_black()
            })
            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| this.tap_tip(window, cx)))
            .on_action(cx.listener(|this, _: &Commit, window, cx| this.commit(window, cx)))
            .on_action(cx.listener(|this, _: &DeleteBackward, _, cx| {
                this.edit(QueryText::delete_backward, cx)
            }))
            .on_action(cx.listener(|this, _: &DeleteForward, _, cx| {
                this.edit(QueryText::delete_forward, cx)
            }))
            .on_action(cx.listener(|this, _: &MoveLeft, _, cx| {
                this.move_caret(QueryText::move_left, cx)
            }))
            .on_action(cx.listener(|this, _: &MoveRight, _, cx| {
                this.move_caret(QueryText::move_right, cx)
            }))
            .on_action(cx.listener(|this, _: &MoveHome, _, cx| {
                this.move_caret(QueryText::move_home, cx)
            }))
            .on_action(cx.listener(|this, _: &MoveEnd, _, cx| {
                this.move_caret(QueryText::move_end, cx)
            }))
            .on_action(cx.listener(|this, _: &Dismiss, window, cx| {
                let effects = this.state.focus_lost();
                this.apply_effects(effects, window, cx);
            }))
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _, cx| {
                this.handle_key_down(event, cx)
            }));
        root = apply_rounding(root, radius);
        if let SearchWidth::Fixed(width) = self.state.width() {
            root = root.w(px(width.max(0) as f32));
        }

        if !self.state.is_input_mode_open() {
            return root
                .cursor_pointer()
                .child(
                    svg()
                        .flex_none()
                        .path(SearchIcon::Search.path())
                        .size(icon_size)
                        .text_color(resolve_hsla(&theme, &tokens.icon)),
                )
                .child(
                    div()
                        .flex_none()
                        .whitespace_nowrap()
                        .text_size(px(self.size.tip_font_size_px()))
                        .text_color(resolve_hsla(&theme, &tokens.tip_fg))
                        .child(self.state.tips().clone()),
                );
        }

        root.cursor_text()
            .child(render_field(
                FieldView {
                    id: &self.id,
                    query: self.state.query(),
                    placeholder: self.state.placeholder(),
                    focused,
                    size: self.size,
                    theme: &theme,
                },
                window,
            ))
            .child(
                div()
                    .id(self.id.slot("clear-button"))
                    .flex_none()
                    .flex()
                    .items_center()
                    .justify_center()
                    .size(icon_size)
                    .rounded_full()
                    .bg(resolve_hsla(&theme, &tokens.action_bg))
                    .cursor_pointer()
                    .child(
                        svg()
                            .path(SearchIcon::Clear.path())
                            .size(px(self.size.icon_px() * 0.7))
                            .text_color(resolve_hsla(&theme, &tokens.action_fg)),
                    )
                    .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                        cx.stop_propagation();
                        this.clear_pressed(window, cx);
                    })),
            )
    }
}
