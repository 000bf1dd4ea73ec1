use crate::error::{SearchBoxError, SearchBoxResult, non_negative_finite};
use crate::motion::{MotionLevel, WidthMotion};

use super::width_transition::TransitionRequest;

pub const DEFAULT_CONTENT_PADDING_PX: f32 = 42.0;

/// Sizing inputs shared by every width computation of the animated box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchMetrics {
    padding_px: f32,
    motion: WidthMotion,
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self {
            padding_px: DEFAULT_CONTENT_PADDING_PX,
            motion: WidthMotion::default(),
        }
    }
}

impl SearchMetrics {
    pub fn new(padding_px: f32, motion: WidthMotion) -> SearchBoxResult<Self> {
        if !non_negative_finite(padding_px) {
            return Err(SearchBoxError::InvalidPadding(padding_px));
        }
        if motion.level == MotionLevel::Full && motion.duration_ms == 0 {
            return Err(SearchBoxError::ZeroDuration);
        }
        Ok(Self { padding_px, motion })
    }

    pub fn padding_px(&self) -> f32 {
        self.padding_px
    }

    pub fn motion(&self) -> WidthMotion {
        self.motion
    }

    pub fn transition(&self, start_width_px: i32, end_width_px: i32) -> TransitionRequest {
        TransitionRequest::new(start_width_px, end_width_px)
            .with_duration_ms(self.motion.effective_duration_ms())
    }
}
