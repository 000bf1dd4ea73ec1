use gpui::SharedString;

use super::query_text::QueryText;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputMode {
    Closed,
    Open,
}

/// What the view must do with the input's focus after a transition. Focusing
/// the field is how the host presents the soft keyboard; blurring dismisses it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyboardRequest {
    Present,
    Dismiss,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ModeOutcome {
    pub mode: InputMode,
    pub keyboard: KeyboardRequest,
    pub display_changed: bool,
}

impl ModeOutcome {
    /// A close was requested but refused because the field still holds text.
    pub fn close_suppressed(&self) -> bool {
        self.keyboard == KeyboardRequest::Dismiss && self.mode == InputMode::Open
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchBoxState {
    pub input_mode_open: bool,
    pub current_text: QueryText,
    pub hint: SharedString,
    pub tips: SharedString,
}

#[derive(Clone, Debug, Default)]
pub struct InputModeController {
    state: SearchBoxState,
}

impl InputModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SearchBoxState {
        &self.state
    }

    pub fn mode(&self) -> InputMode {
        if self.state.input_mode_open {
            InputMode::Open
        } else {
            InputMode::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.input_mode_open
    }

    pub fn text(&self) -> &str {
        self.state.current_text.as_str()
    }

    pub fn query(&self) -> &QueryText {
        &self.state.current_text
    }

    pub fn query_mut(&mut self) -> &mut QueryText {
        &mut self.state.current_text
    }

    pub fn set_hint(&mut self, hint: impl Into<SharedString>) {
        self.state.hint = hint.into();
    }

    pub fn set_tips(&mut self, tips: impl Into<SharedString>) {
        self.state.tips = tips.into();
    }

    /// The tip container only reacts to taps while the box is closed.
    pub fn tip_affordance_active(&self) -> bool {
        !self.state.input_mode_open
    }

    pub fn open(&mut self) -> ModeOutcome {
        let display_changed = !self.state.input_mode_open;
        self.state.input_mode_open = true;
        if display_changed {
            tracing::debug!(target: "tipsearch::input_mode", "input mode opened");
        }
        ModeOutcome {
            mode: InputMode::Open,
            keyboard: KeyboardRequest::Present,
            display_changed,
        }
    }

    pub fn close(&mut self) -> ModeOutcome {
        if !self.state.current_text.is_empty() {
            tracing::trace!(
                target: "tipsearch::input_mode",
                len = self.state.current_text.len(),
                "close suppressed while text is present"
            );
            return ModeOutcome {
                mode: self.mode(),
                keyboard: KeyboardRequest::Dismiss,
                display_changed: false,
            };
        }

        let display_changed = self.state.input_mode_open;
        self.state.input_mode_open = false;
        if display_changed {
            tracing::debug!(target: "tipsearch::input_mode", "input mode closed");
        }
        ModeOutcome {
            mode: InputMode::Closed,
            keyboard: KeyboardRequest::Dismiss,
            display_changed,
        }
    }

    /// Hands the full current text to the listener, if any, then requests a
    /// close. The close is evaluated against the text as it stands after
    /// delivery. Without a listener the commit only closes.
    pub fn handle_commit(
        &mut self,
        listener: Option<&mut dyn FnMut(SharedString)>,
    ) -> ModeOutcome {
        match listener {
            Some(deliver) => {
                let text = SharedString::from(self.state.current_text.as_str().to_string());
                tracing::debug!(
                    target: "tipsearch::input_mode",
                    len = text.len(),
                    "search committed"
                );
                deliver(text);
            }
            None => {
                tracing::trace!(
                    target: "tipsearch::input_mode",
                    "search committed without a listener"
                );
            }
        }
        self.close()
    }

    pub fn handle_focus_lost(&mut self) -> ModeOutcome {
        self.close()
    }

    pub fn tap_tip(&mut self) -> Option<ModeOutcome> {
        if !self.tip_affordance_active() || !self.state.current_text.is_empty() {
            return None;
        }
        Some(self.open())
    }
}
