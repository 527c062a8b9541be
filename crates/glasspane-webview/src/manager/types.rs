/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load.
    pub url: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
    /// Extra scripts run before page scripts, after the bridge is installed.
    pub init_scripts: Vec<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            transparent: true,
            devtools: cfg!(debug_assertions),
            user_agent: Some(concat!("Glasspane/", env!("CARGO_PKG_VERSION")).to_string()),
            init_scripts: Vec::new(),
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Add an initialization script.
    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.init_scripts.push(script.into());
        self
    }
}
