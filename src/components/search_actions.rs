use std::sync::Once;

use gpui::{App, KeyBinding, actions};

pub const SEARCH_FIELD_KEY_CONTEXT: &str = "tipsearch_field";

actions!(
    tipsearch,
    [
        Commit,
        DeleteBackward,
        DeleteForward,
        MoveLeft,
        MoveRight,
        MoveHome,
        MoveEnd,
        Dismiss,
    ]
);

static BINDINGS_INIT: Once = Once::new();

pub fn ensure_search_keybindings(cx: &mut App) {
    BINDINGS_INIT.call_once(|| {
        cx.bind_keys(field_bindings());
    });
}

fn field_bindings() -> Vec<KeyBinding> {
    let context = Some(SEARCH_FIELD_KEY_CONTEXT);
    vec![
        KeyBinding::new("enter", Commit, context),
        KeyBinding::new("backspace", DeleteBackward, context),
        KeyBinding::new("delete", DeleteForward, context),
        KeyBinding::new("left", MoveLeft, context),
        KeyBinding::new("right", MoveRight, context),
        KeyBinding::new("home", MoveHome, context),
        KeyBinding::new("end", MoveEnd, context),
        KeyBinding::new("escape", Dismiss, context),
    ]
}
