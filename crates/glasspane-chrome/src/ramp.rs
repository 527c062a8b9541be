//! Fixed-step opacity ramps.

use std::time::{Duration, Instant};

/// What a ramp is for, which decides what happens when it finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampPurpose {
    SplashFadeIn,
    SplashFadeOut,
    MainFadeIn,
    CloseFadeOut,
}

/// Moves a window's opacity toward a target by a fixed step per interval.
///
/// A zero step never reaches its target; callers that must finish (close)
/// carry their own deadline.
#[derive(Debug, Clone)]
pub struct OpacityRamp {
    purpose: RampPurpose,
    opacity: f64,
    target: f64,
    step: f64,
    interval: Duration,
    next_due: Instant,
}

impl OpacityRamp {
    /// Start a ramp at `from`; the first step lands one interval after `now`.
    pub fn new(
        purpose: RampPurpose,
        from: f64,
        target: f64,
        step: f64,
        interval: Duration,
        now: Instant,
    ) -> Self {
        Self {
            purpose,
            opacity: from.clamp(0.0, 1.0),
            target: target.clamp(0.0, 1.0),
            step: step.abs(),
            interval,
            next_due: now + interval,
        }
    }

    pub fn purpose(&self) -> RampPurpose {
        self.purpose
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn is_finished(&self) -> bool {
        self.opacity == self.target
    }

    /// Apply one step if it is due. Returns the new opacity when a step ran.
    pub fn advance(&mut self, now: Instant) -> Option<f64> {
        if now < self.next_due || self.is_finished() {
            return None;
        }
        self.opacity = if self.target > self.opacity {
            (self.opacity + self.step).min(self.target)
        } else {
            (self.opacity - self.step).max(self.target)
        };
        self.next_due = now + self.interval;
        Some(self.opacity)
    }
}
