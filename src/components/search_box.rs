use std::rc::Rc;

use gpui::{
    ClickEvent, Context, FocusHandle, InteractiveElement, IntoElement, KeyDownEvent,
    ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Subscription,
    Window, div, px, svg,
};

use crate::icon::SearchIcon;
use crate::id::ComponentId;
use crate::provider::SearchProvider;
use crate::style::{Radius, Size};

use super::field::{FieldView, render_field};
use super::input_mode::{InputModeController, KeyboardRequest, ModeOutcome};
use super::query_text::QueryText;
use super::search_actions::{
    Commit, DeleteBackward, DeleteForward, Dismiss, MoveEnd, MoveHome, MoveLeft, MoveRight,
    SEARCH_FIELD_KEY_CONTEXT, ensure_search_keybindings,
};
use super::utils::{apply_rounding, quantized_stroke_px, resolve_hsla};

pub type SearchHandler = Rc<dyn Fn(SharedString, &mut Window, &mut gpui::App)>;

/// Search box that shows a tip label until tapped, then a text field with a
/// search button. Create it with `cx.new(|cx| SearchBox::new(window, cx))`.
pub struct SearchBox {
    id: ComponentId,
    controller: InputModeController,
    focus_handle: FocusHandle,
    on_search: Option<SearchHandler>,
    size: Size,
    radius: Radius,
    _subscriptions: Vec<Subscription>,
}

impl SearchBox {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        ensure_search_keybindings(cx);
        let focus_handle = cx.focus_handle();
        let subscriptions = vec![cx.on_blur(&focus_handle, window, |this, window, cx| {
            let outcome = this.controller.handle_focus_lost();
            this.apply_outcome(outcome, window, cx);
        })];

        Self {
            id: ComponentId::numbered("search-box", cx.entity_id().as_u64()),
            controller: InputModeController::new(),
            focus_handle,
            on_search: None,
            size: Size::Md,
            radius: Radius::Pill,
            _subscriptions: subscriptions,
        }
    }

    pub fn set_hint(&mut self, hint: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.controller.set_hint(hint);
        cx.notify();
    }

    pub fn set_tips(&mut self, tips: impl Into<SharedString>, cx: &mut Context<Self>) {
        self.controller.set_tips(tips);
        cx.notify();
    }

    pub fn set_on_search(
        &mut self,
        handler: impl Fn(SharedString, &mut Window, &mut gpui::App) + 'static,
    ) {
        self.on_search = Some(Rc::new(handler));
    }

    pub fn set_size(&mut self, size: Size, cx: &mut Context<Self>) {
        self.size = size;
        cx.notify();
    }

    pub fn set_radius(&mut self, radius: Radius, cx: &mut Context<Self>) {
        self.radius = radius;
        cx.notify();
    }

    pub fn is_input_mode_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn text(&self) -> &str {
        self.controller.text()
    }

    pub fn focus_handle(&self) -> &FocusHandle {
        &self.focus_handle
    }

    fn tap_tip(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        // An open field that lost focus after a commit takes it back on click.
        if self.controller.is_open() {
            window.focus(&self.focus_handle, cx);
            return;
        }
        if let Some(outcome) = self.controller.tap_tip() {
            self.apply_outcome(outcome, window, cx);
        }
    }

    fn commit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        if !self.controller.is_open() {
            return;
        }
        let outcome = match self.on_search.clone() {
            Some(handler) => {
                let mut deliver = |text: SharedString| handler(text, window, cx);
                self.controller.handle_commit(Some(&mut deliver))
            }
            None => self.controller.handle_commit(None),
        };
        self.apply_outcome(outcome, window, cx);
    }

    fn edit(
        &mut self,
        apply: impl FnOnce(&mut QueryText) -> bool,
        cx: &mut Context<Self>,
    ) {
        if !self.controller.is_open() {
            return;
        }
        if apply(self.controller.query_mut()) {
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

    fn apply_outcome(
        &mut self,
        outcome: ModeOutcome,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        match outcome.keyboard {
            KeyboardRequest::Present => window.focus(&self.focus_handle, cx),
            KeyboardRequest::Dismiss => {
                if self.focus_handle.is_focused(window) {
                    window.blur();
                }
            }
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

impl Render for SearchBox {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let theme = SearchProvider::theme(cx);
        let tokens = &theme.search_box;
        let height = self.size.height_px();
        let icon_size = px(self.size.icon_px());
        let focused = self.focus_handle.is_focused(window);

        let mut root = div()
            .id(self.id.clone())
            .key_context(SEARCH_FIELD_KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .flex()
            .flex_row()
            .items_center()
            .gap_2()
            .h(px(height))
            .px(px(12.0))
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
                let outcome = this.controller.close();
                this.apply_outcome(outcome, window, cx);
            }))
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _, cx| {
                this.handle_key_down(event, cx)
            }));
        root = apply_rounding(root, self.radius.px_for_height(height));

        if !self.controller.is_open() {
            let state = self.controller.state();
            return root
                .cursor_pointer()
                .child(
                    svg()
                        .path(SearchIcon::Search.path())
                        .size(icon_size)
                        .text_color(resolve_hsla(&theme, &tokens.icon)),
                )
                .child(
                    div()
                        .text_size(px(self.size.tip_font_size_px()))
                        .text_color(resolve_hsla(&theme, &tokens.tip_fg))
                        .child(state.tips.clone()),
                );
        }

        let state = self.controller.state();
        root.cursor_text()
            .child(div().flex_1().min_w_0().overflow_hidden().child(render_field(
                FieldView {
                    id: &self.id,
                    query: &state.current_text,
                    placeholder: &state.hint,
                    focused,
                    size: self.size,
                    theme: &theme,
                },
                window,
            )))
            .child(
                div()
                    .id(self.id.slot("search-button"))
                    .flex_none()
                    .cursor_pointer()
                    .child(
                        svg()
                            .path(SearchIcon::Search.path())
                            .size(icon_size)
                            .text_color(resolve_hsla(&theme, &tokens.icon)),
                    )
                    .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                        cx.stop_propagation();
                        this.commit(window, cx);
                    })),
            )
    }
}
