use std::sync::{Arc, Mutex};

use glasspane_common::WindowRole;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Origins the bundled pages may be served from. WebView2 on Windows
/// rewrites `glasspane://localhost/...` to `http://glasspane.localhost/...`.
const BUNDLED_ORIGINS: &[&str] = &["http://glasspane.localhost", "https://glasspane.localhost"];

/// Decides which URLs a WebView may navigate to.
///
/// Always allowed: the `glasspane://` scheme and `about:blank`. When a
/// dev server is configured, its origin is allowed too. Everything else
/// is blocked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationPolicy {
    dev_origin: Option<String>,
}

impl NavigationPolicy {
    pub fn new(dev_server_url: Option<&str>) -> Self {
        let dev_origin = dev_server_url.and_then(origin_of);
        if let (Some(url), None) = (dev_server_url, &dev_origin) {
            warn!(url, "dev server URL has no usable origin; not allowlisted");
        }
        Self { dev_origin }
    }

    pub fn dev_origin(&self) -> Option<&str> {
        self.dev_origin.as_deref()
    }

    pub fn allows(&self, url: &str) -> bool {
        url.starts_with("glasspane://")
            || url == "about:blank"
            || BUNDLED_ORIGINS
                .iter()
                .any(|origin| is_same_origin(url, origin))
            || self
                .dev_origin
                .as_deref()
                .is_some_and(|origin| is_same_origin(url, origin))
    }
}

/// `scheme://host[:port]` of an http(s) URL.
pub fn origin_of(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme != "http" && scheme != "https" {
        return None;
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if host.is_empty() || host.contains('@') {
        return None;
    }
    Some(format!("{scheme}://{host}"))
}

fn is_same_origin(url: &str, origin: &str) -> bool {
    match url.strip_prefix(origin) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        role: WindowRole,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(%role, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(%role, body_len = body.len(), "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { role, body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        role: WindowRole,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%role, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { role, state, url });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        policy: Arc<NavigationPolicy>,
        role: WindowRole,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !policy.allows(&url) {
                warn!(%role, url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }

            debug!(%role, url = %url, "navigation allowed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationRequested { role, url });
            }
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
