use std::time::{Duration, Instant};

use gpui::SharedString;

use crate::error::SearchBoxError;
use crate::motion::{MotionLevel, WidthMotion};

use super::animated_search_state::AnimatedSearchState;
use super::hint_swap::{ACTIVE_HINT, HintSwapPolicy};
use super::input_mode::{InputMode, InputModeController, KeyboardRequest};
use super::metrics::SearchMetrics;
use super::query_text::QueryText;
use super::text_metrics::{LabelRole, TextMeasure, content_width};
use super::width_transition::{
    SearchWidth, TransitionPhase, TransitionRequest, WidthTarget, WidthTransitionAnimator,
};

const TIPS: &str = "Find stations";
const HINT: &str = "City or code";

/// Tip glyphs are 10px wide, input glyphs 12px.
struct FixedAdvance;

impl TextMeasure for FixedAdvance {
    fn text_width(&self, role: LabelRole, text: &str) -> f32 {
        let advance = match role {
            LabelRole::Tip => 10.0,
            LabelRole::Input => 12.0,
        };
        text.chars().count() as f32 * advance
    }
}

struct FractionalMeasure(f32);

impl TextMeasure for FractionalMeasure {
    fn text_width(&self, _role: LabelRole, _text: &str) -> f32 {
        self.0
    }
}

#[derive(Default)]
struct RecordingTarget {
    widths: Vec<SearchWidth>,
    layout_passes: usize,
}

impl RecordingTarget {
    fn fixed_values(&self) -> Vec<i32> {
        self.widths
            .iter()
            .filter_map(|width| match width {
                SearchWidth::Fixed(value) => Some(*value),
                SearchWidth::FitContent => None,
            })
            .collect()
    }
}

impl WidthTarget for RecordingTarget {
    fn apply_width(&mut self, width: SearchWidth) {
        self.widths.push(width);
    }

    fn request_layout(&mut self) {
        self.layout_passes += 1;
    }
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn typed(controller: &mut InputModeController, text: &str) {
    assert!(controller.query_mut().insert(text));
}

fn configured_state() -> AnimatedSearchState {
    let mut state = AnimatedSearchState::default();
    state.set_tips(TIPS);
    state.set_hint(HINT);
    state
}

// Widths produced by `FixedAdvance` with the default 42px padding.
const TIP_WIDTH: i32 = 13 * 10 + 42;
const HINT_WIDTH: i32 = 12 * 12 + 42;

#[test]
fn controller_starts_closed_with_tip_affordance_active() {
    let controller = InputModeController::new();
    assert_eq!(controller.mode(), InputMode::Closed);
    assert!(!controller.state().input_mode_open);
    assert!(controller.tip_affordance_active());
    assert!(controller.text().is_empty());
}

#[test]
fn open_presents_keyboard_and_is_idempotent() {
    let mut controller = InputModeController::new();

    let first = controller.open();
    assert_eq!(first.mode, InputMode::Open);
    assert_eq!(first.keyboard, KeyboardRequest::Present);
    assert!(first.display_changed);
    assert!(!controller.tip_affordance_active());

    let second = controller.open();
    assert_eq!(second.mode, InputMode::Open);
    assert_eq!(second.keyboard, KeyboardRequest::Present);
    assert!(!second.display_changed);
}

#[test]
fn close_with_text_only_dismisses_keyboard() {
    let mut controller = InputModeController::new();
    controller.open();
    typed(&mut controller, "rust");

    let outcome = controller.close();
    assert_eq!(outcome.keyboard, KeyboardRequest::Dismiss);
    assert_eq!(outcome.mode, InputMode::Open);
    assert!(!outcome.display_changed);
    assert!(outcome.close_suppressed());
    assert!(controller.is_open());
    assert!(!controller.tip_affordance_active());
    assert_eq!(controller.text(), "rust");
}

#[test]
fn open_then_close_with_empty_text_returns_to_tip_display() {
    let mut controller = InputModeController::new();
    controller.open();

    let outcome = controller.close();
    assert_eq!(outcome.mode, InputMode::Closed);
    assert_eq!(outcome.keyboard, KeyboardRequest::Dismiss);
    assert!(outcome.display_changed);
    assert!(!outcome.close_suppressed());
    assert!(controller.tip_affordance_active());
}

#[test]
fn close_while_closed_is_harmless() {
    let mut controller = InputModeController::new();
    let outcome = controller.close();
    assert_eq!(outcome.mode, InputMode::Closed);
    assert!(!outcome.display_changed);
}

#[test]
fn commit_delivers_text_once_then_stays_open_with_text() {
    let mut controller = InputModeController::new();
    controller.open();
    typed(&mut controller, "hello");

    let mut received = Vec::new();
    let outcome = controller.handle_commit(Some(&mut |text: SharedString| received.push(text)));

    assert_eq!(received, vec![SharedString::from("hello")]);
    assert!(outcome.close_suppressed());
    assert!(controller.is_open());
}

#[test]
fn commit_with_empty_text_closes() {
    let mut controller = InputModeController::new();
    controller.open();

    let mut calls = 0;
    let outcome = controller.handle_commit(Some(&mut |text: SharedString| {
        calls += 1;
        assert!(text.is_empty());
    }));

    assert_eq!(calls, 1);
    assert_eq!(outcome.mode, InputMode::Closed);
    assert!(outcome.display_changed);
}

#[test]
fn commit_without_listener_keeps_the_same_mode_outcome() {
    let mut with_listener = InputModeController::new();
    let mut without_listener = InputModeController::new();
    for controller in [&mut with_listener, &mut without_listener] {
        controller.open();
        typed(controller, "hello");
    }

    let mut calls = 0;
    let heard = with_listener.handle_commit(Some(&mut |_: SharedString| calls += 1));
    let silent = without_listener.handle_commit(None);

    assert_eq!(calls, 1);
    assert_eq!(silent, heard);
    assert!(silent.close_suppressed());
    assert_eq!(without_listener.text(), "hello");

    assert!(without_listener.query_mut().clear());
    let closed = without_listener.handle_commit(None);
    assert_eq!(closed.mode, InputMode::Closed);
    assert!(closed.display_changed);
}

#[test]
fn focus_loss_collapses_only_an_empty_box() {
    let mut controller = InputModeController::new();
    controller.open();
    typed(&mut controller, "x");
    assert!(controller.handle_focus_lost().close_suppressed());

    assert!(controller.query_mut().delete_backward());
    let outcome = controller.handle_focus_lost();
    assert_eq!(outcome.mode, InputMode::Closed);
    assert!(outcome.display_changed);
}

#[test]
fn tip_tap_is_ignored_while_open() {
    let mut controller = InputModeController::new();
    assert!(controller.tap_tip().is_some());
    assert!(controller.tap_tip().is_none());
    assert!(controller.is_open());
}

#[test]
fn search_session_round_trip() {
    let mut controller = InputModeController::new();
    controller.set_tips(TIPS);
    controller.set_hint(HINT);

    let opened = controller.tap_tip().map(|outcome| outcome.keyboard);
    assert_eq!(opened, Some(KeyboardRequest::Present));
    assert!(controller.state().input_mode_open);

    typed(&mut controller, "cats");
    let mut received = Vec::new();
    let outcome = controller.handle_commit(Some(&mut |text: SharedString| received.push(text)));
    assert_eq!(received, vec![SharedString::from("cats")]);
    assert!(outcome.close_suppressed());
    assert_eq!(controller.text(), "cats");

    assert!(controller.query_mut().clear());
    let outcome = controller.close();
    assert_eq!(outcome.mode, InputMode::Closed);
    assert!(controller.tip_affordance_active());
    assert_eq!(controller.state().tips.to_string(), TIPS);
}

#[test]
fn hint_swap_boundaries() {
    let mut policy = HintSwapPolicy::new(HINT);
    assert_eq!(policy.displayed().to_string(), HINT);

    assert_eq!(policy.on_text_changed("a").to_string(), ACTIVE_HINT);
    assert_eq!(policy.on_text_changed("").to_string(), HINT);
    assert_eq!(policy.on_text_changed("a").to_string(), ACTIVE_HINT);
    assert_eq!(policy.on_text_changed("any longer query").to_string(), ACTIVE_HINT);
    assert_eq!(policy.on_text_changed("").to_string(), HINT);
}

#[test]
fn hint_swap_user_hint_takes_effect_immediately() {
    let mut policy = HintSwapPolicy::default();
    assert_eq!(policy.hints().active_hint.to_string(), ACTIVE_HINT);
    policy.on_text_changed("typed");
    policy.set_user_hint("Try a station");
    assert_eq!(policy.displayed().to_string(), "Try a station");
    assert_eq!(policy.on_text_changed("").to_string(), "Try a station");
}

#[test]
fn animate_steps_monotonically_then_fits_content() {
    let mut animator = WidthTransitionAnimator::default();
    let mut target = RecordingTarget::default();
    let start = Instant::now();

    let phase = animator.animate(&mut target, TransitionRequest::new(100, 40), start);
    assert_eq!(phase, TransitionPhase::Running);

    let mut last_phase = phase;
    for step in 1..=15 {
        last_phase = animator.advance(&mut target, start + ms(step * 10));
    }
    assert_eq!(last_phase, TransitionPhase::Completed);
    assert!(!animator.is_running());

    let values = target.fixed_values();
    assert_eq!(values.first(), Some(&100));
    assert_eq!(values.last(), Some(&40));
    assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(target.widths.last(), Some(&SearchWidth::FitContent));
    // One pass per frame plus the final fit-content pass.
    assert_eq!(target.layout_passes, values.len() + 1);
}

#[test]
fn decelerating_tween_covers_most_distance_early() {
    let mut animator = WidthTransitionAnimator::default();
    let mut target = RecordingTarget::default();
    let start = Instant::now();

    animator.animate(&mut target, TransitionRequest::new(0, 100), start);
    animator.advance(&mut target, start + ms(75));
    let halfway = target.fixed_values().last().copied().unwrap_or_default();
    assert!(halfway > 50, "expected more than half the distance, got {halfway}");
}

#[test]
fn new_transition_replaces_the_one_in_flight() {
    let mut animator = WidthTransitionAnimator::default();
    let mut target = RecordingTarget::default();
    let start = Instant::now();

    animator.animate(&mut target, TransitionRequest::new(100, 40), start);
    animator.advance(&mut target, start + ms(50));
    let written_before = target.widths.len();

    animator.animate(&mut target, TransitionRequest::new(40, 200), start + ms(60));
    assert_eq!(animator.generation(), 2);
    assert_eq!(animator.current(), Some(TransitionRequest::new(40, 200)));

    let phase = animator.advance(&mut target, start + ms(60 + 150));
    assert_eq!(phase, TransitionPhase::Completed);

    let after = &target.widths[written_before..];
    assert_eq!(after.first(), Some(&SearchWidth::Fixed(40)));
    assert!(after.iter().all(|width| match width {
        SearchWidth::Fixed(value) => *value >= 40,
        SearchWidth::FitContent => true,
    }));
    assert_eq!(
        &after[after.len() - 2..],
        &[SearchWidth::Fixed(200), SearchWidth::FitContent]
    );
}

#[test]
fn idle_animator_writes_nothing() {
    let mut animator = WidthTransitionAnimator::default();
    let mut target = RecordingTarget::default();
    assert_eq!(animator.advance(&mut target, Instant::now()), TransitionPhase::Idle);
    assert!(target.widths.is_empty());
    assert_eq!(target.layout_passes, 0);
}

#[test]
fn zero_duration_lands_on_fit_content_in_one_call() {
    let mut animator = WidthTransitionAnimator::default();
    let mut target = RecordingTarget::default();
    let phase = animator.animate(
        &mut target,
        TransitionRequest::new(80, 120).with_duration_ms(0),
        Instant::now(),
    );
    assert_eq!(phase, TransitionPhase::Completed);
    assert_eq!(
        target.widths,
        vec![SearchWidth::Fixed(120), SearchWidth::FitContent]
    );
}

#[test]
fn interpolated_width_truncates_toward_zero() {
    let request = TransitionRequest::new(10, 13);
    assert_eq!(request.duration_ms, 150);
    assert_eq!(request.value_at(0.5), 11);
    assert_eq!(TransitionRequest::new(13, 10).value_at(0.5), 11);
    assert_eq!(request.value_at(1.0), 13);
}

#[test]
fn content_width_adds_padding_then_truncates() {
    assert_eq!(
        content_width(&FractionalMeasure(10.7), LabelRole::Tip, "ignored", 42.0),
        52
    );
    assert_eq!(content_width(&FixedAdvance, LabelRole::Input, "", 42.0), 42);
}

#[test]
fn animated_tap_opens_and_grows_from_tips_to_hint() {
    let mut state = configured_state();
    let start = Instant::now();

    let effects = state.tap_tip(&FixedAdvance, start);
    let Some(effects) = effects else {
        panic!("tap on a closed, empty box should open it");
    };
    assert_eq!(effects.keyboard(), Some(KeyboardRequest::Present));
    assert_eq!(
        effects.transition,
        Some(TransitionRequest::new(TIP_WIDTH, HINT_WIDTH))
    );
    assert!(state.is_input_mode_open());
    assert!(state.is_animating());
    assert_eq!(state.width(), SearchWidth::Fixed(TIP_WIDTH));

    assert!(state.tap_tip(&FixedAdvance, start + ms(10)).is_none());

    assert_eq!(state.advance(start + ms(150)), TransitionPhase::Completed);
    assert_eq!(state.width(), SearchWidth::FitContent);
}

#[test]
fn animated_commit_with_text_keeps_width_and_input() {
    let mut state = configured_state();
    let start = Instant::now();
    state.tap_tip(&FixedAdvance, start);
    state.advance(start + ms(150));
    assert!(state.edit(|query| query.insert("cats")));

    let mut received = Vec::new();
    let mut deliver = |text: SharedString| received.push(text);
    let effects = state.commit(&FixedAdvance, start + ms(200), Some(&mut deliver));

    assert_eq!(received, vec![SharedString::from("cats")]);
    assert_eq!(effects.keyboard(), Some(KeyboardRequest::Dismiss));
    assert_eq!(effects.transition, None);
    assert!(state.is_input_mode_open());
    assert_eq!(state.width(), SearchWidth::FitContent);
}

#[test]
fn animated_commit_with_empty_text_shrinks_back_to_tips() {
    let mut state = configured_state();
    let start = Instant::now();
    state.tap_tip(&FixedAdvance, start);

    let mut calls = 0;
    let mut deliver = |_: SharedString| calls += 1;
    let effects = state.commit(&FixedAdvance, start + ms(40), Some(&mut deliver));

    assert_eq!(calls, 1);
    assert!(!state.is_input_mode_open());
    assert_eq!(
        effects.transition,
        Some(TransitionRequest::new(HINT_WIDTH, TIP_WIDTH))
    );
    assert_eq!(state.transition_generation(), 2);
}

#[test]
fn animated_commit_without_listener_still_collapses_an_empty_box() {
    let mut state = configured_state();
    let start = Instant::now();
    state.tap_tip(&FixedAdvance, start);

    let effects = state.commit(&FixedAdvance, start + ms(40), None);

    assert_eq!(effects.mode.map(|outcome| outcome.mode), Some(InputMode::Closed));
    assert_eq!(
        effects.transition,
        Some(TransitionRequest::new(HINT_WIDTH, TIP_WIDTH))
    );

    state.tap_tip(&FixedAdvance, start + ms(400));
    state.edit(|query| query.insert("cats"));
    let effects = state.commit(&FixedAdvance, start + ms(500), None);
    assert_eq!(effects.keyboard(), Some(KeyboardRequest::Dismiss));
    assert_eq!(effects.transition, None);
    assert!(state.is_input_mode_open());
}

#[test]
fn clear_button_with_text_empties_field_and_shrinks_to_hint() {
    let mut state = configured_state();
    let start = Instant::now();
    state.tap_tip(&FixedAdvance, start);
    state.edit(|query| query.insert("cats"));
    assert_eq!(state.placeholder().to_string(), ACTIVE_HINT);

    let effects = state.clear_pressed(&FixedAdvance, start + ms(300));

    assert_eq!(state.text(), "");
    assert_eq!(state.placeholder().to_string(), HINT);
    assert_eq!(effects.mode, None);
    assert_eq!(
        effects.transition,
        Some(TransitionRequest::new(4 * 12 + 42, HINT_WIDTH))
    );
    assert!(state.is_input_mode_open());
}

#[test]
fn clear_button_on_empty_field_closes_to_tips() {
    let mut state = configured_state();
    let start = Instant::now();
    state.tap_tip(&FixedAdvance, start);

    let effects = state.clear_pressed(&FixedAdvance, start + ms(300));

    assert_eq!(effects.keyboard(), Some(KeyboardRequest::Dismiss));
    assert_eq!(effects.mode.map(|outcome| outcome.mode), Some(InputMode::Closed));
    assert_eq!(
        effects.transition,
        Some(TransitionRequest::new(HINT_WIDTH, TIP_WIDTH))
    );
    assert!(!state.is_input_mode_open());
}

#[test]
fn animated_focus_loss_never_animates() {
    let mut state = configured_state();
    state.tap_tip(&FixedAdvance, Instant::now());

    let effects = state.focus_lost();
    assert_eq!(effects.transition, None);
    assert_eq!(effects.mode.map(|outcome| outcome.mode), Some(InputMode::Closed));
}

#[test]
fn edits_drive_the_placeholder() {
    let mut state = configured_state();
    assert_eq!(state.placeholder().to_string(), HINT);

    assert!(state.edit(|query| query.insert("x")));
    assert_eq!(state.placeholder().to_string(), ACTIVE_HINT);

    assert!(!state.edit(QueryText::delete_forward));
    assert_eq!(state.placeholder().to_string(), ACTIVE_HINT);

    assert!(state.edit(QueryText::delete_backward));
    assert_eq!(state.placeholder().to_string(), HINT);

    assert!(!state.clear_text());
}

#[test]
fn reduced_motion_snaps_to_fit_content() {
    let metrics = SearchMetrics::new(42.0, WidthMotion::new().level(MotionLevel::None))
        .unwrap_or_default();
    let mut state = AnimatedSearchState::new(metrics);
    state.set_tips(TIPS);
    state.set_hint(HINT);

    let effects = state.tap_tip(&FixedAdvance, Instant::now());
    assert_eq!(
        effects.and_then(|effects| effects.transition),
        Some(TransitionRequest::new(TIP_WIDTH, HINT_WIDTH).with_duration_ms(0))
    );
    assert!(!state.is_animating());
    assert_eq!(state.width(), SearchWidth::FitContent);
    assert_eq!(state.container().layout_passes, 2);
}

#[test]
fn background_radius_rejects_unrenderable_values() {
    let mut state = AnimatedSearchState::default();
    assert_eq!(state.background_radius(), None);
    assert_eq!(state.set_background_radius(12.0), Ok(()));
    assert_eq!(state.background_radius(), Some(12.0));

    assert_eq!(
        state.set_background_radius(-1.0),
        Err(SearchBoxError::InvalidRadius(-1.0))
    );
    assert!(state.set_background_radius(f32::NAN).is_err());
    assert_eq!(state.background_radius(), Some(12.0));
}

#[test]
fn metrics_validate_padding_and_duration() {
    assert_eq!(
        SearchMetrics::new(-4.0, WidthMotion::default()),
        Err(SearchBoxError::InvalidPadding(-4.0))
    );
    assert_eq!(
        SearchMetrics::new(42.0, WidthMotion::new().duration_ms(0)),
        Err(SearchBoxError::ZeroDuration)
    );

    let metrics = SearchMetrics::new(24.0, WidthMotion::new().duration_ms(300));
    assert_eq!(
        metrics.map(|metrics| metrics.transition(10, 20)),
        Ok(TransitionRequest::new(10, 20).with_duration_ms(300))
    );
}

#[test]
fn query_text_edits_by_char_not_byte() {
    let mut query = QueryText::new("地铁");
    assert_eq!(query.len(), 2);
    assert_eq!(query.caret(), 2);

    query.move_left();
    assert!(query.insert("站"));
    assert_eq!(query.as_str(), "地站铁");
    assert_eq!(query.before_caret(), "地站");
    assert_eq!(query.after_caret(), "铁");

    assert!(query.delete_forward());
    assert!(!query.delete_forward());
    assert_eq!(query.as_str(), "地站");

    query.move_home();
    assert!(!query.delete_backward());
    query.move_end();
    assert!(query.delete_backward());
    assert_eq!(query.as_str(), "地");
}

#[test]
fn query_text_drops_control_characters() {
    let mut query = QueryText::default();
    assert!(!query.insert("\n"));
    assert!(!query.insert("\t"));
    assert!(query.insert("c\td"));
    assert_eq!(query.as_str(), "cd");
    assert!(query.clear());
    assert!(query.insert("a\r\nb"));
    assert_eq!(query.as_str(), "ab");
    assert_eq!(QueryText::new("x\ny").as_str(), "xy");
}
