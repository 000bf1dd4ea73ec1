use gpui::SharedString;

pub const ACTIVE_HINT: &str = "搜索";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HintPair {
    pub user_hint: SharedString,
    pub active_hint: SharedString,
}

impl Default for HintPair {
    fn default() -> Self {
        Self {
            user_hint: SharedString::default(),
            active_hint: SharedString::new_static(ACTIVE_HINT),
        }
    }
}

/// Chooses the placeholder for the search field. Once the user has typed,
/// an emptied field shows the short active hint instead of the configured one.
#[derive(Clone, Debug, Default)]
pub struct HintSwapPolicy {
    hints: HintPair,
    displayed: SharedString,
}

impl HintSwapPolicy {
    pub fn new(user_hint: impl Into<SharedString>) -> Self {
        let mut policy = Self::default();
        policy.set_user_hint(user_hint);
        policy
    }

    pub fn hints(&self) -> &HintPair {
        &self.hints
    }

    pub fn displayed(&self) -> &SharedString {
        &self.displayed
    }

    pub fn set_user_hint(&mut self, hint: impl Into<SharedString>) {
        self.hints.user_hint = hint.into();
        self.displayed = self.hints.user_hint.clone();
    }

    pub fn on_text_changed(&mut self, new_text: &str) -> &SharedString {
        let next = if new_text.is_empty() {
            &self.hints.user_hint
        } else {
            &self.hints.active_hint
        };
        if *next != self.displayed {
            tracing::trace!(target: "tipsearch::hint", hint = %next, "placeholder swapped");
            self.displayed = next.clone();
        }
        &self.displayed
    }
}
