mod animated_search_box;
mod animated_search_state;
mod field;
mod hint_swap;
mod input_mode;
mod metrics;
mod query_text;
mod search_actions;
mod search_box;
mod text_metrics;
mod utils;
mod width_transition;

#[cfg(test)]
mod test_state_logic;

pub use animated_search_box::AnimatedSearchBox;
pub use animated_search_state::{AnimatedSearchState, ContainerWidth, SearchEffects};
pub use hint_swap::{ACTIVE_HINT, HintPair, HintSwapPolicy};
pub use input_mode::{InputMode, InputModeController, KeyboardRequest, ModeOutcome, SearchBoxState};
pub use metrics::{DEFAULT_CONTENT_PADDING_PX, SearchMetrics};
pub use query_text::QueryText;
pub use search_actions::{
    Commit, DeleteBackward, DeleteForward, Dismiss, MoveEnd, MoveHome, MoveLeft, MoveRight,
    SEARCH_FIELD_KEY_CONTEXT, ensure_search_keybindings,
};
pub use search_box::{SearchBox, SearchHandler};
pub use text_metrics::{LabelRole, TextMeasure, WindowTextMeasure, content_width};
pub use width_transition::{
    SearchWidth, TransitionPhase, TransitionRequest, WIDTH_TRANSITION_MS, WidthTarget,
    WidthTransitionAnimator,
};
