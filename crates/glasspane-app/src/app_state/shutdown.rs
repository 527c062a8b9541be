//! Graceful shutdown: stop the chrome controller, destroy webviews and windows.

use super::backend::LoopBackend;
use super::core::GlasspaneApp;

impl GlasspaneApp {
    /// Tear everything down. Safe to call more than once.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        let mut backend = LoopBackend::detached(&mut self.native);
        self.controller.shutdown(&mut backend);

        // Any webview left without a window (none in practice)
        self.native.webviews.destroy_all();
        self.native.windows.clear();
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
