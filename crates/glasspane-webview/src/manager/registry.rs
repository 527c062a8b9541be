use std::collections::HashMap;

use glasspane_common::WindowRole;
use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Maps window roles to their WebView handles.
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: HashMap<WindowRole, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: HashMap::new(),
        }
    }

    pub fn manager(&self) -> &WebViewManager {
        &self.manager
    }

    /// Create the WebView for a window and register it, replacing any
    /// previous one for that role.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        role: WindowRole,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(role, window, bounds, config)?;
        self.handles.insert(role, handle);
        Ok(())
    }

    pub fn get(&self, role: WindowRole) -> Option<&WebViewHandle> {
        self.handles.get(&role)
    }

    /// Destroy the WebView for a window.
    pub fn destroy(&mut self, role: WindowRole) -> bool {
        if self.handles.remove(&role).is_some() {
            debug!(%role, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed { role });
            true
        } else {
            false
        }
    }

    /// Drain all pending events from all WebViews.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy all active WebViews. Used during graceful shutdown.
    pub fn destroy_all(&mut self) {
        for role in WindowRole::ALL {
            self.destroy(role);
        }
    }

    pub fn count(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destroying_missing_webview_is_noop() {
        let mut registry = WebViewRegistry::new(WebViewManager::default());
        assert!(!registry.destroy(WindowRole::Main));
        registry.destroy_all();
        assert_eq!(registry.count(), 0);
        assert!(registry.drain_events().is_empty());
    }
}
