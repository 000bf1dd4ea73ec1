use std::time::Instant;

use gpui::SharedString;

use crate::error::{SearchBoxError, SearchBoxResult, non_negative_finite};

use super::hint_swap::HintSwapPolicy;
use super::input_mode::{InputModeController, KeyboardRequest, ModeOutcome};
use super::metrics::SearchMetrics;
use super::query_text::QueryText;
use super::text_metrics::{LabelRole, TextMeasure, content_width};
use super::width_transition::{
    SearchWidth, TransitionPhase, TransitionRequest, WidthTarget, WidthTransitionAnimator,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContainerWidth {
    pub width: SearchWidth,
    pub layout_passes: u64,
}

impl Default for ContainerWidth {
    fn default() -> Self {
        Self {
            width: SearchWidth::FitContent,
            layout_passes: 0,
        }
    }
}

impl WidthTarget for ContainerWidth {
    fn apply_width(&mut self, width: SearchWidth) {
        self.width = width;
    }

    fn request_layout(&mut self) {
        self.layout_passes = self.layout_passes.wrapping_add(1);
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SearchEffects {
    pub mode: Option<ModeOutcome>,
    pub transition: Option<TransitionRequest>,
}

impl SearchEffects {
    pub fn keyboard(&self) -> Option<KeyboardRequest> {
        self.mode.map(|outcome| outcome.keyboard)
    }
}

/// Headless model of the animated search box: input mode, placeholder
/// swapping and the container width tween, driven by the view's events.
#[derive(Clone, Debug)]
pub struct AnimatedSearchState {
    controller: InputModeController,
    hints: HintSwapPolicy,
    animator: WidthTransitionAnimator,
    container: ContainerWidth,
    metrics: SearchMetrics,
    background_radius: Option<f32>,
}

impl Default for AnimatedSearchState {
    fn default() -> Self {
        Self::new(SearchMetrics::default())
    }
}

impl AnimatedSearchState {
    pub fn new(metrics: SearchMetrics) -> Self {
        Self {
            controller: InputModeController::new(),
            hints: HintSwapPolicy::default(),
            animator: WidthTransitionAnimator::new(metrics.motion().easing),
            container: ContainerWidth::default(),
            metrics,
            background_radius: None,
        }
    }

    pub fn controller(&self) -> &InputModeController {
        &self.controller
    }

    pub fn hints(&self) -> &HintSwapPolicy {
        &self.hints
    }

    pub fn placeholder(&self) -> &SharedString {
        self.hints.displayed()
    }

    pub fn tips(&self) -> &SharedString {
        &self.controller.state().tips
    }

    pub fn text(&self) -> &str {
        self.controller.text()
    }

    pub fn query(&self) -> &QueryText {
        self.controller.query()
    }

    pub fn is_input_mode_open(&self) -> bool {
        self.controller.is_open()
    }

    pub fn container(&self) -> ContainerWidth {
        self.container
    }

    pub fn width(&self) -> SearchWidth {
        self.container.width
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn transition_generation(&self) -> u64 {
        self.animator.generation()
    }

    pub fn metrics(&self) -> SearchMetrics {
        self.metrics
    }

    pub fn set_metrics(&mut self, metrics: SearchMetrics) {
        self.metrics = metrics;
        self.animator.set_easing(metrics.motion().easing);
    }

    pub fn background_radius(&self) -> Option<f32> {
        self.background_radius
    }

    pub fn set_background_radius(&mut self, radius: f32) -> SearchBoxResult<()> {
        if !non_negative_finite(radius) {
            return Err(SearchBoxError::InvalidRadius(radius));
        }
        self.background_radius = Some(radius);
        Ok(())
    }

    pub fn set_hint(&mut self, hint: impl Into<SharedString>) {
        let hint = hint.into();
        self.controller.set_hint(hint.clone());
        self.hints.set_user_hint(hint);
    }

    pub fn set_tips(&mut self, tips: impl Into<SharedString>) {
        self.controller.set_tips(tips);
    }

    /// Applies an edit to the query and refreshes the placeholder when the
    /// text actually changed.
    pub fn edit(&mut self, apply: impl FnOnce(&mut QueryText) -> bool) -> bool {
        let changed = apply(self.controller.query_mut());
        if changed {
            self.hints.on_text_changed(self.controller.text());
        }
        changed
    }

    pub fn clear_text(&mut self) -> bool {
        self.edit(QueryText::clear)
    }

    pub fn tap_tip(&mut self, measure: &impl TextMeasure, now: Instant) -> Option<SearchEffects> {
        let outcome = self.controller.tap_tip()?;
        let start = self.measure(measure, LabelRole::Tip, self.tips().as_ref());
        let end = self.measure(measure, LabelRole::Input, self.placeholder().as_ref());
        let transition = self.start_transition(start, end, now);
        Some(SearchEffects {
            mode: Some(outcome),
            transition: Some(transition),
        })
    }

    pub fn commit(
        &mut self,
        measure: &impl TextMeasure,
        now: Instant,
        listener: Option<&mut dyn FnMut(SharedString)>,
    ) -> SearchEffects {
        let outcome = self.controller.handle_commit(listener);
        let transition = self
            .controller
            .query()
            .is_empty()
            .then(|| self.collapse_to_tips(measure, now));
        SearchEffects {
            mode: Some(outcome),
            transition,
        }
    }

    /// With text present the field is emptied and shrinks to the hint; an
    /// already empty field closes back to the tip.
    pub fn clear_pressed(&mut self, measure: &impl TextMeasure, now: Instant) -> SearchEffects {
        if !self.controller.query().is_empty() {
            let previous = self.controller.text().to_string();
            self.clear_text();
            let start = self.measure(measure, LabelRole::Input, &previous);
            let end = self.measure(measure, LabelRole::Input, self.placeholder().as_ref());
            return SearchEffects {
                mode: None,
                transition: Some(self.start_transition(start, end, now)),
            };
        }

        let outcome = self.controller.close();
        SearchEffects {
            mode: Some(outcome),
            transition: Some(self.collapse_to_tips(measure, now)),
        }
    }

    pub fn focus_lost(&mut self) -> SearchEffects {
        SearchEffects {
            mode: Some(self.controller.handle_focus_lost()),
            transition: None,
        }
    }

    pub fn advance(&mut self, now: Instant) -> TransitionPhase {
        self.animator.advance(&mut self.container, now)
    }

    fn collapse_to_tips(&mut self, measure: &impl TextMeasure, now: Instant) -> TransitionRequest {
        let start = self.measure(measure, LabelRole::Input, self.placeholder().as_ref());
        let end = self.measure(measure, LabelRole::Tip, self.tips().as_ref());
        self.start_transition(start, end, now)
    }

    fn measure(&self, measure: &impl TextMeasure, role: LabelRole, text: &str) -> i32 {
        content_width(measure, role, text, self.metrics.padding_px())
    }

    fn start_transition(&mut self, start: i32, end: i32, now: Instant) -> TransitionRequest {
        let request = self.metrics.transition(start, end);
        self.animator.animate(&mut self.container, request, now);
        request
    }
}
