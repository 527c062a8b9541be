//! Splash window configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Splash window and splash-to-main handoff settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    /// Show a splash window while the main UI loads.
    pub enabled: bool,
    pub width: u32,
    pub height: u32,
    /// Minimum time the splash stays up, measured from its creation.
    pub min_duration_ms: u64,
    /// Opacity added per fade-in tick (valid range: (0.0, 1.0]).
    pub fade_in_step: f64,
    pub fade_in_interval_ms: u64,
    /// Opacity removed per fade-out tick during the handoff.
    pub fade_out_step: f64,
    pub fade_out_interval_ms: u64,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 320,
            height: 240,
            min_duration_ms: 800,
            fade_in_step: 0.05,
            fade_in_interval_ms: 16,
            fade_out_step: 0.1,
            fade_out_interval_ms: 16,
        }
    }
}

impl SplashConfig {
    pub fn min_duration(&self) -> Duration {
        Duration::from_millis(self.min_duration_ms)
    }

    pub fn fade_in_interval(&self) -> Duration {
        Duration::from_millis(self.fade_in_interval_ms)
    }

    pub fn fade_out_interval(&self) -> Duration {
        Duration::from_millis(self.fade_out_interval_ms)
    }
}
