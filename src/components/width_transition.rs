use std::time::{Duration, Instant};

use crate::motion::Easing;

pub const WIDTH_TRANSITION_MS: u16 = 150;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SearchWidth {
    Fixed(i32),
    FitContent,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransitionRequest {
    pub start_width_px: i32,
    pub end_width_px: i32,
    pub duration_ms: u16,
}

impl TransitionRequest {
    pub fn new(start_width_px: i32, end_width_px: i32) -> Self {
        Self {
            start_width_px,
            end_width_px,
            duration_ms: WIDTH_TRANSITION_MS,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u16) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.duration_ms))
    }

    /// Integer width for an eased progress value, truncated toward zero.
    pub fn value_at(&self, eased: f32) -> i32 {
        let start = self.start_width_px as f32;
        let span = (self.end_width_px - self.start_width_px) as f32;
        (start + eased * span) as i32
    }
}

/// Element whose width the animator drives.
pub trait WidthTarget {
    fn apply_width(&mut self, width: SearchWidth);
    fn request_layout(&mut self);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransitionPhase {
    Idle,
    Running,
    Completed,
}

#[derive(Clone, Copy, Debug)]
struct ActiveTransition {
    request: TransitionRequest,
    started_at: Instant,
    generation: u64,
}

/// Runs one width tween at a time. Starting a new transition replaces the
/// one in flight; the replaced tween writes nothing further.
#[derive(Clone, Debug)]
pub struct WidthTransitionAnimator {
    easing: Easing,
    active: Option<ActiveTransition>,
    generation: u64,
}

impl Default for WidthTransitionAnimator {
    fn default() -> Self {
        Self::new(Easing::Decelerate)
    }
}

impl WidthTransitionAnimator {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            active: None,
            generation: 0,
        }
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// Bumped for every started transition; views key frame state on it.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current(&self) -> Option<TransitionRequest> {
        self.active.map(|active| active.request)
    }

    pub fn animate(
        &mut self,
        target: &mut impl WidthTarget,
        request: TransitionRequest,
        now: Instant,
    ) -> TransitionPhase {
        self.generation = self.generation.wrapping_add(1);
        if let Some(previous) = self.active.take() {
            tracing::debug!(
                target: "tipsearch::width",
                replaced = previous.generation,
                by = self.generation,
                "width transition superseded"
            );
        }
        tracing::debug!(
            target: "tipsearch::width",
            start = request.start_width_px,
            end = request.end_width_px,
            duration_ms = request.duration_ms,
            "width transition started"
        );

        self.active = Some(ActiveTransition {
            request,
            started_at: now,
            generation: self.generation,
        });
        self.advance(target, now)
    }

    /// Called once per host frame. Writes the interpolated width, and on the
    /// frame that reaches the end switches the target to fit-content.
    pub fn advance(&mut self, target: &mut impl WidthTarget, now: Instant) -> TransitionPhase {
        let Some(active) = self.active else {
            return TransitionPhase::Idle;
        };

        let request = active.request;
        let elapsed = now.saturating_duration_since(active.started_at);
        let duration = request.duration();
        let fraction = if duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
        };

        target.apply_width(SearchWidth::Fixed(
            request.value_at(self.easing.apply(fraction)),
        ));
        target.request_layout();

        if fraction < 1.0 {
            return TransitionPhase::Running;
        }

        self.active = None;
        target.apply_width(SearchWidth::FitContent);
        target.request_layout();
        tracing::debug!(
            target: "tipsearch::width",
            generation = active.generation,
            "width transition completed"
        );
        TransitionPhase::Completed
    }
}
