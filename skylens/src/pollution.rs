//! Light-pollution state and the clean animation.
//!
//! Pollution is a scalar in [0, 1] (0 = perfectly clear sky). The external
//! configuration surface speaks percent (0-100). The clean animation decays
//! the value toward zero one step per timer tick and terminates on its own
//! once the residual is negligible.

/// Amount removed per clean-animation tick.
const CLEAN_STEP: f64 = 0.01;

/// Residual below which the clean animation declares itself finished.
const CLEAN_FLOOR: f64 = 0.01;

/// Simulated light-pollution level, clamped to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pollution(f64);

impl Pollution {
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Set from the percent-based configuration surface (slider).
    pub fn from_percent(percent: u8) -> Self {
        Self::new(f64::from(percent.min(100)) / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn set(&mut self, value: f64) {
        self.0 = value.clamp(0.0, 1.0);
    }

    fn decrement(&mut self, step: f64) {
        self.0 = (self.0 - step).max(0.0);
    }
}

/// Monotonic decay animation for the pollution level.
///
/// Driven by a periodic host timer calling [`CleanAnimation::tick`]. Safe to
/// re-invoke after completion and safe to start repeatedly; starting with
/// pollution already at the floor is a no-op that terminates on the first
/// tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanAnimation {
    active: bool,
}

impl CleanAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin (or continue) cleaning. Idempotent.
    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance one step. Returns `true` while the animation keeps running.
    pub fn tick(&mut self, pollution: &mut Pollution) -> bool {
        if !self.active {
            return false;
        }

        pollution.decrement(CLEAN_STEP);
        if pollution.value() <= CLEAN_FLOOR {
            self.active = false;
        }
        self.active
    }
}
