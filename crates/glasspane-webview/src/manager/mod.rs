//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances as children of the
//! shell's native windows, one per window role.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::WebViewHandle;
pub use handlers::NavigationPolicy;
pub use registry::WebViewRegistry;
pub use types::WebViewConfig;

/// Builds WebViews that share one event sink, content provider and
/// navigation policy.
pub struct WebViewManager {
    /// Events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    content_provider: Arc<ContentProvider>,
    navigation: Arc<NavigationPolicy>,
}

impl WebViewManager {
    pub fn new(content: ContentProvider, navigation: NavigationPolicy) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: Arc::new(content),
            navigation: Arc::new(navigation),
        }
    }

    pub fn navigation(&self) -> &NavigationPolicy {
        &self.navigation
    }

    pub(crate) fn push_event(&self, event: WebViewEvent) {
        if let Ok(mut evts) = self.events.lock() {
            evts.push(event);
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new(ContentProvider::bundled(), NavigationPolicy::default())
    }
}
