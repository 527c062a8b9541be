//! winit + wry implementation of the shell's `WindowBackend`.

use std::collections::HashMap;
use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

use glasspane_chrome::{WindowBackend, WindowSpec};
use glasspane_common::{Bounds, BridgeNotification, Point, WindowError, WindowRole};
use glasspane_webview::{WebViewConfig, WebViewRegistry};

use super::bounds::{bounds_from, client_rect, to_winit};
use super::cursor::CursorTracker;

/// What each window loads.
#[derive(Debug, Clone)]
pub struct PageSet {
    pub main: String,
    pub splash: String,
    /// Chrome controller script injected into the main page.
    pub ui_script: String,
}

/// The native windows, their webviews and the tracked cursor.
pub struct NativeWindows {
    pub(super) windows: HashMap<WindowRole, Arc<Window>>,
    pub(super) webviews: WebViewRegistry,
    pub(super) cursor: CursorTracker,
    pub(super) pages: PageSet,
}

impl NativeWindows {
    pub fn new(webviews: WebViewRegistry, pages: PageSet) -> Self {
        Self {
            windows: HashMap::new(),
            webviews,
            cursor: CursorTracker::new(),
            pages,
        }
    }

    pub fn role_of(&self, id: WindowId) -> Option<WindowRole> {
        self.windows
            .iter()
            .find(|(_, w)| w.id() == id)
            .map(|(role, _)| *role)
    }

    /// Desktop position of a window's client area.
    pub fn window_origin(&self, role: WindowRole) -> Option<Point> {
        let position = self.windows.get(&role)?.inner_position().ok()?;
        Some(Point::new(position.x, position.y))
    }

    /// Resize a window's webview to fill its client area.
    pub fn sync_webview_bounds(&self, role: WindowRole) {
        let (Some(window), Some(handle)) = (self.windows.get(&role), self.webviews.get(role))
        else {
            return;
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return;
        }
        if let Err(e) = handle.set_bounds(client_rect(size)) {
            tracing::warn!(%role, error = %e, "Failed to update webview bounds");
        }
    }

    fn create(
        &mut self,
        event_loop: &ActiveEventLoop,
        role: WindowRole,
        spec: &WindowSpec,
    ) -> Result<(), WindowError> {
        let mut attrs = WindowAttributes::default()
            .with_title(spec.title.clone())
            .with_decorations(false)
            .with_transparent(true)
            .with_visible(spec.visible)
            .with_resizable(spec.resizable)
            .with_inner_size(LogicalSize::new(spec.width, spec.height));
        if let Some((min_w, min_h)) = spec.min_size {
            attrs = attrs.with_min_inner_size(LogicalSize::new(min_w, min_h));
        }
        if spec.always_on_top {
            attrs = attrs.with_window_level(WindowLevel::AlwaysOnTop);
        }

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| WindowError::Create(e.to_string()))?;

        let config = match role {
            WindowRole::Splash => WebViewConfig::with_url(self.pages.splash.clone()),
            WindowRole::Main => {
                WebViewConfig::with_url(self.pages.main.clone()).with_script(self.pages.ui_script.clone())
            }
        };
        self.webviews
            .create(role, &*window, client_rect(window.inner_size()), config)
            .map_err(|e| WindowError::WebView(e.to_string()))?;

        self.windows.insert(role, window);
        Ok(())
    }
}

/// A `WindowBackend` view over [`NativeWindows`] for one event-loop callback.
///
/// Without an event loop (during teardown) windows can be destroyed and
/// queried but not created.
pub struct LoopBackend<'a> {
    native: &'a mut NativeWindows,
    event_loop: Option<&'a ActiveEventLoop>,
}

impl<'a> LoopBackend<'a> {
    pub fn new(native: &'a mut NativeWindows, event_loop: &'a ActiveEventLoop) -> Self {
        Self {
            native,
            event_loop: Some(event_loop),
        }
    }

    pub fn detached(native: &'a mut NativeWindows) -> Self {
        Self {
            native,
            event_loop: None,
        }
    }
}

impl WindowBackend for LoopBackend<'_> {
    fn open(&mut self, role: WindowRole, spec: &WindowSpec) -> Result<(), WindowError> {
        let Some(event_loop) = self.event_loop else {
            return Err(WindowError::NotSupported(
                "window creation outside the event loop".into(),
            ));
        };
        self.native.create(event_loop, role, spec)
    }

    fn exists(&self, role: WindowRole) -> bool {
        self.native.windows.contains_key(&role)
    }

    fn destroy(&mut self, role: WindowRole) {
        self.native.webviews.destroy(role);
        if self.native.windows.remove(&role).is_some() {
            tracing::debug!(%role, "window destroyed");
        }
    }

    fn bounds(&self, role: WindowRole) -> Option<Bounds> {
        let window = self.native.windows.get(&role)?;
        let position = window.outer_position().ok()?;
        Some(bounds_from(position, window.outer_size()))
    }

    fn set_bounds(&mut self, role: WindowRole, bounds: Bounds) {
        let Some(window) = self.native.windows.get(&role) else {
            return;
        };
        let (position, size) = to_winit(bounds);
        window.set_outer_position(position);
        if let Some(applied) = window.request_inner_size(size) {
            if let Some(handle) = self.native.webviews.get(role) {
                if let Err(e) = handle.set_bounds(client_rect(applied)) {
                    tracing::warn!(%role, error = %e, "Failed to update webview bounds");
                }
            }
        }
    }

    fn set_opacity(&mut self, role: WindowRole, opacity: f64) {
        if let Some(handle) = self.native.webviews.get(role) {
            if let Err(e) = handle.set_opacity(opacity) {
                tracing::debug!(%role, error = %e, "Failed to set opacity");
            }
        }
    }

    fn show(&mut self, role: WindowRole) {
        if let Some(window) = self.native.windows.get(&role) {
            window.set_visible(true);
        }
    }

    fn focus(&mut self, role: WindowRole) {
        if let Some(window) = self.native.windows.get(&role) {
            window.focus_window();
        }
        if let Some(handle) = self.native.webviews.get(role) {
            if let Err(e) = handle.focus() {
                tracing::debug!(%role, error = %e, "Failed to focus webview");
            }
        }
    }

    fn minimize(&mut self, role: WindowRole) {
        if let Some(window) = self.native.windows.get(&role) {
            window.set_minimized(true);
        }
    }

    fn is_minimized(&self, role: WindowRole) -> bool {
        self.native
            .windows
            .get(&role)
            .and_then(|w| w.is_minimized())
            .unwrap_or(false)
    }

    fn is_maximized(&self, role: WindowRole) -> bool {
        self.native
            .windows
            .get(&role)
            .is_some_and(|w| w.is_maximized())
    }

    fn set_maximized(&mut self, role: WindowRole, maximized: bool) {
        if let Some(window) = self.native.windows.get(&role) {
            window.set_maximized(maximized);
        }
    }

    fn scale_factor(&self, role: WindowRole) -> f64 {
        self.native
            .windows
            .get(&role)
            .map_or(1.0, |w| w.scale_factor())
    }

    fn cursor_position(&self) -> Point {
        self.native
            .cursor
            .current(self.scale_factor(WindowRole::Main))
    }

    fn notify(&mut self, notification: BridgeNotification) {
        if let Some(handle) = self.native.webviews.get(WindowRole::Main) {
            if let Err(e) = handle.notify(notification) {
                tracing::warn!(kind = notification.kind(), error = %e, "Failed to notify page");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glasspane_webview::WebViewManager;

    fn native() -> NativeWindows {
        let pages = PageSet {
            main: "glasspane://localhost/index.html".into(),
            splash: "glasspane://localhost/splash.html".into(),
            ui_script: String::new(),
        };
        NativeWindows::new(WebViewRegistry::new(WebViewManager::default()), pages)
    }

    #[test]
    fn detached_backend_cannot_open() {
        let mut native = native();
        let mut backend = LoopBackend::detached(&mut native);
        let spec = WindowSpec::main(&Default::default());
        assert!(matches!(
            backend.open(WindowRole::Main, &spec),
            Err(WindowError::NotSupported(_))
        ));
    }

    #[test]
    fn missing_windows_are_noops() {
        let mut native = native();
        let mut backend = LoopBackend::detached(&mut native);
        assert!(!backend.exists(WindowRole::Main));
        assert_eq!(backend.bounds(WindowRole::Main), None);
        assert!(!backend.is_maximized(WindowRole::Main));
        assert!(!backend.is_minimized(WindowRole::Main));
        backend.set_bounds(WindowRole::Main, Bounds::new(0, 0, 10, 10));
        backend.set_opacity(WindowRole::Splash, 0.5);
        backend.show(WindowRole::Main);
        backend.focus(WindowRole::Main);
        backend.minimize(WindowRole::Main);
        backend.set_maximized(WindowRole::Main, true);
        assert_eq!(backend.scale_factor(WindowRole::Main), 1.0);
        backend.notify(BridgeNotification::Restored);
        backend.destroy(WindowRole::Splash);
    }

    #[test]
    fn cursor_comes_from_tracker() {
        let mut native = native();
        native.cursor.apply_motion(12.0, 34.0);
        let backend = LoopBackend::detached(&mut native);
        assert_eq!(backend.cursor_position(), Point::new(12, 34));
    }
}
