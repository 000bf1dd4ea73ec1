#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MotionLevel {
    Full,
    None,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Easing {
    Linear,
    Decelerate,
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn apply(self, delta: f32) -> f32 {
        let delta = delta.clamp(0.0, 1.0);
        match self {
            Easing::Linear => delta,
            Easing::Decelerate => 1.0 - (1.0 - delta) * (1.0 - delta),
            Easing::EaseOut => 1.0 - (1.0 - delta).powi(5),
            Easing::EaseInOut => {
                if delta < 0.5 {
                    2.0 * delta * delta
                } else {
                    1.0 - (-2.0 * delta + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WidthMotion {
    pub level: MotionLevel,
    pub duration_ms: u16,
    pub easing: Easing,
}

impl Default for WidthMotion {
    fn default() -> Self {
        Self {
            level: MotionLevel::Full,
            duration_ms: 150,
            easing: Easing::Decelerate,
        }
    }
}

impl WidthMotion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(mut self, level: MotionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn duration_ms(mut self, duration_ms: u16) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Duration actually used by the animator. Reduced motion collapses the
    /// tween to a single frame that lands on fit-content.
    pub fn effective_duration_ms(&self) -> u16 {
        match self.level {
            MotionLevel::Full => self.duration_ms,
            MotionLevel::None => 0,
        }
    }
}
