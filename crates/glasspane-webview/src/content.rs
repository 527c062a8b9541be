//! Bundled content served over the `glasspane://` custom protocol.
//!
//! The splash and main pages ship inside the binary, so WebViews can
//! load them without a local HTTP server or a resource directory.

use std::collections::HashMap;

/// Custom protocol scheme for bundled pages.
pub const SCHEME: &str = "glasspane";

/// URL of the bundled main page.
pub const MAIN_PAGE_URL: &str = "glasspane://localhost/index.html";

/// URL of the bundled splash page.
pub const SPLASH_PAGE_URL: &str = "glasspane://localhost/splash.html";

const INDEX_HTML: &str = include_str!("../assets/index.html");
const SPLASH_HTML: &str = include_str!("../assets/splash.html");
const STYLE_CSS: &str = include_str!("../assets/style.css");

/// Serves in-memory assets by path.
///
/// A request for `glasspane://localhost/index.html` resolves to the
/// asset registered as `index.html`.
#[derive(Debug, Default)]
pub struct ContentProvider {
    assets: HashMap<String, (String, Vec<u8>)>, // path -> (mime, data)
}

impl ContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider preloaded with the pages compiled into the binary.
    pub fn bundled() -> Self {
        let mut provider = Self::new();
        provider.add_asset("index.html", "text/html", INDEX_HTML);
        provider.add_asset("splash.html", "text/html", SPLASH_HTML);
        provider.add_asset("style.css", "text/css", STYLE_CSS);
        provider
    }

    /// Register or replace an asset. An empty mime guesses from the extension.
    pub fn add_asset(
        &mut self,
        path: impl Into<String>,
        mime: impl Into<String>,
        data: impl Into<Vec<u8>>,
    ) {
        let path = path.into();
        let mut mime = mime.into();
        if mime.is_empty() {
            mime = mime_from_extension(&path).to_string();
        }
        self.assets
            .insert(normalize_path(&path).to_string(), (mime, data.into()));
    }

    /// Resolve a request path to its MIME type and bytes.
    pub fn resolve(&self, path: &str) -> Option<(&str, &[u8])> {
        self.assets
            .get(normalize_path(path))
            .map(|(mime, data)| (mime.as_str(), data.as_slice()))
    }

    /// Resolve a full request URI, including the form WebView2 rewrites
    /// custom protocols into (`http://glasspane.localhost/...`).
    pub fn resolve_uri(&self, uri: &str) -> Option<(&str, &[u8])> {
        let path = uri
            .strip_prefix("glasspane://localhost")
            .or_else(|| uri.strip_prefix("http://glasspane.localhost"))
            .or_else(|| uri.strip_prefix("https://glasspane.localhost"))
            .or_else(|| uri.strip_prefix("glasspane://"))?;
        self.resolve(path)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Strip leading slashes, query and fragment; the root maps to `index.html`.
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        "index.html"
    } else {
        path
    }
}

/// Guess MIME type from file extension.
fn mime_from_extension(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
