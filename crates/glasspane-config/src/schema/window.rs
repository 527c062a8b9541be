//! Main window configuration types.

use serde::{Deserialize, Serialize};

/// Main application window settings.
///
/// The window is always frameless and transparent; these control its
/// initial and minimum size. The minimum also floors manual resizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial width in pixels.
    pub width: u32,
    /// Initial height in pixels.
    pub height: u32,
    /// Minimum width in pixels (valid range: 100-width).
    pub min_width: u32,
    /// Minimum height in pixels (valid range: 100-height).
    pub min_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Glasspane".into(),
            width: 800,
            height: 600,
            min_width: 400,
            min_height: 500,
        }
    }
}
