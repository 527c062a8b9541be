//! Fade, resize-loop and UI animation timing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Main window opacity ramps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Opacity added per tick when the main window appears. Slower than
    /// the splash fade-out.
    pub main_fade_in_step: f64,
    pub main_fade_in_interval_ms: u64,
    /// Opacity removed per tick when closing.
    pub close_step: f64,
    pub close_interval_ms: u64,
    /// Hard upper bound on how long a close may take.
    pub close_fallback_ms: u64,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            main_fade_in_step: 0.05,
            main_fade_in_interval_ms: 16,
            close_step: 0.2,
            close_interval_ms: 10,
            close_fallback_ms: 500,
        }
    }
}

impl FadeConfig {
    pub fn main_fade_in_interval(&self) -> Duration {
        Duration::from_millis(self.main_fade_in_interval_ms)
    }

    pub fn close_interval(&self) -> Duration {
        Duration::from_millis(self.close_interval_ms)
    }

    pub fn close_fallback(&self) -> Duration {
        Duration::from_millis(self.close_fallback_ms)
    }
}

/// Manual resize loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Cursor poll period while a resize gesture is active (~60 Hz).
    pub tick_interval_ms: u64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 16,
        }
    }
}

impl ResizeConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Page-side chrome animation delays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Time the fade-out transition gets before minimize/close is sent.
    pub exit_delay_ms: u64,
    /// Time the maximize transition gets before maximize is sent.
    pub maximize_delay_ms: u64,
    /// Time allowed for the OS to finish restoring or resizing after a
    /// window-state notification.
    pub settle_delay_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            exit_delay_ms: 200,
            maximize_delay_ms: 200,
            settle_delay_ms: 100,
        }
    }
}

impl AnimationConfig {
    pub fn exit_delay(&self) -> Duration {
        Duration::from_millis(self.exit_delay_ms)
    }

    pub fn maximize_delay(&self) -> Duration {
        Duration::from_millis(self.maximize_delay_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
