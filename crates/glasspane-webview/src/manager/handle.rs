use glasspane_common::{BridgeNotification, WindowRole};
use wry::WebView;

use crate::ipc::js_dispatch_notification;

/// A managed WebView filling one of the shell's windows.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) role: WindowRole,
    /// Initial URL (best-effort tracking).
    pub(super) current_url: String,
}

impl WebViewHandle {
    pub fn role(&self) -> WindowRole {
        self.role
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Deliver a bridge notification to the page.
    pub fn notify(&self, notification: BridgeNotification) -> Result<(), wry::Error> {
        self.webview
            .evaluate_script(&js_dispatch_notification(notification))
    }

    /// Set the rendered opacity of the whole page.
    pub fn set_opacity(&self, opacity: f64) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&js_set_opacity(opacity))
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}

/// Script setting the document root opacity. Before the root exists the
/// value is applied once the DOM is ready.
fn js_set_opacity(opacity: f64) -> String {
    let value = opacity.clamp(0.0, 1.0);
    format!(
        "(function() {{ var o = '{value:.3}'; var r = document.documentElement; \
         if (r) {{ r.style.opacity = o; }} else {{ \
         document.addEventListener('DOMContentLoaded', function() {{ \
         document.documentElement.style.opacity = o; }}); }} }})();"
    )
}
