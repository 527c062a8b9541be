//! GlasspaneApp struct definition and constructor.

use glasspane_chrome::ShellController;
use glasspane_config::GlasspaneConfig;
use glasspane_webview::content::{MAIN_PAGE_URL, SPLASH_PAGE_URL};
use glasspane_webview::ui::generate_ui_script;
use glasspane_webview::{ContentProvider, NavigationPolicy, WebViewManager, WebViewRegistry};

use super::backend::{NativeWindows, PageSet};

/// Top-level application state.
pub struct GlasspaneApp {
    pub(super) controller: ShellController,
    pub(super) native: NativeWindows,

    // Set once resumed() has created the windows
    pub(super) started: bool,

    // Whether the app should exit
    pub(super) should_exit: bool,
}

impl GlasspaneApp {
    pub fn new(config: GlasspaneConfig) -> Self {
        let dev_url = config.dev.server_url.as_deref();
        let pages = PageSet {
            main: dev_url.unwrap_or(MAIN_PAGE_URL).to_string(),
            splash: SPLASH_PAGE_URL.to_string(),
            ui_script: generate_ui_script(&config.animation),
        };
        let manager = WebViewManager::new(ContentProvider::bundled(), NavigationPolicy::new(dev_url));

        Self {
            controller: ShellController::new(&config),
            native: NativeWindows::new(WebViewRegistry::new(manager), pages),
            started: false,
            should_exit: false,
        }
    }
}
