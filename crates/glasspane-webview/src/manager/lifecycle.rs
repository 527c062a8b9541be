use std::borrow::Cow;
use std::sync::Arc;

use glasspane_common::WindowRole;
use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{ContentProvider, SCHEME};
use crate::ipc::BRIDGE_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a WebView filling `bounds` inside the given window.
    ///
    /// The bridge script is installed before any of `config.init_scripts`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        role: WindowRole,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(false)
            .with_initialization_script(BRIDGE_INIT_SCRIPT);

        for script in &config.init_scripts {
            builder = builder.with_initialization_script(script);
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events), role);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events), role);
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(&self.events),
            Arc::clone(&self.navigation),
            role,
        );
        builder = Self::attach_custom_protocol(builder, Arc::clone(&self.content_provider));

        let webview = builder.with_url(&config.url).build_as_child(window)?;

        debug!(%role, url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            role,
            current_url: config.url,
        })
    }

    fn attach_custom_protocol<'a>(
        builder: WebViewBuilder<'a>,
        provider: Arc<ContentProvider>,
    ) -> WebViewBuilder<'a> {
        builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            match provider.resolve_uri(&uri) {
                Some((mime, data)) => respond(200, mime, data.to_vec()),
                None => {
                    warn!(uri = %uri, "custom protocol: asset not found");
                    respond(404, "text/plain", b"Not Found".to_vec())
                }
            }
        })
    }
}

fn respond(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", "glasspane://localhost")
        .body(Cow::from(body))
        .unwrap_or_else(|e| {
            warn!(error = %e, "custom protocol: failed to build response");
            Response::new(Cow::Borrowed(&[][..]))
        })
}
