//! The seam between the coordination logic and real windows.

use glasspane_common::{Bounds, BridgeNotification, Point, WindowError, WindowRole};
use glasspane_config::schema::{SplashConfig, WindowConfig};

/// How a window should be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub min_size: Option<(u32, u32)>,
    pub resizable: bool,
    pub always_on_top: bool,
    /// Whether the window is shown as soon as it is created.
    pub visible: bool,
}

impl WindowSpec {
    /// Small, always-on-top, fixed-size splash; shown immediately at zero opacity.
    pub fn splash(config: &SplashConfig, title: &str) -> Self {
        Self {
            title: title.to_string(),
            width: config.width,
            height: config.height,
            min_size: None,
            resizable: false,
            always_on_top: true,
            visible: true,
        }
    }

    /// The application window; created hidden until the handoff reveals it.
    pub fn main(config: &WindowConfig) -> Self {
        Self {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            min_size: Some((config.min_width, config.min_height)),
            resizable: true,
            always_on_top: false,
            visible: false,
        }
    }
}

/// Native window operations the shell controller needs.
///
/// Every frameless window is also transparent. Methods taking a role are
/// no-ops when that window does not exist.
pub trait WindowBackend {
    /// Create the window for `role` with its page loaded.
    fn open(&mut self, role: WindowRole, spec: &WindowSpec) -> Result<(), WindowError>;

    fn exists(&self, role: WindowRole) -> bool;

    fn destroy(&mut self, role: WindowRole);

    /// Outer bounds of the window, if it exists and they can be queried.
    fn bounds(&self, role: WindowRole) -> Option<Bounds>;

    fn set_bounds(&mut self, role: WindowRole, bounds: Bounds);

    fn set_opacity(&mut self, role: WindowRole, opacity: f64);

    fn show(&mut self, role: WindowRole);

    fn focus(&mut self, role: WindowRole);

    fn minimize(&mut self, role: WindowRole);

    fn is_minimized(&self, role: WindowRole) -> bool;

    fn is_maximized(&self, role: WindowRole) -> bool;

    fn set_maximized(&mut self, role: WindowRole, maximized: bool);

    /// Physical pixels per logical pixel on the window's display.
    fn scale_factor(&self, role: WindowRole) -> f64;

    /// Current global cursor position, in physical pixels.
    fn cursor_position(&self) -> Point;

    /// Deliver a notification to the page in the main window.
    fn notify(&mut self, notification: BridgeNotification);
}
