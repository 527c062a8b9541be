//! Window creation at startup.

use std::time::Instant;

use glasspane_chrome::{ShellController, WindowBackend};

/// Open the splash and main windows.
///
/// A splash that fails to open is logged and skipped; the main window is
/// required.
pub(super) fn open_windows<B: WindowBackend>(
    controller: &mut ShellController,
    backend: &mut B,
    now: Instant,
) -> glasspane_common::Result<()> {
    if let Err(e) = controller.create_splash(backend, now) {
        tracing::warn!("Splash window unavailable, continuing without it: {e}");
    }
    controller.create_main(backend)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glasspane_common::{GlasspaneError, WindowError};
    use glasspane_config::GlasspaneConfig;

    use crate::app_state::backend::LoopBackend;
    use crate::app_state::core::GlasspaneApp;

    #[test]
    fn main_window_failure_is_an_app_error() {
        let mut app = GlasspaneApp::new(GlasspaneConfig::default());
        let mut backend = LoopBackend::detached(&mut app.native);

        let err = open_windows(&mut app.controller, &mut backend, Instant::now()).unwrap_err();

        assert!(matches!(
            err,
            GlasspaneError::Window(WindowError::NotSupported(_))
        ));
        assert!(!backend.exists(glasspane_common::WindowRole::Main));
    }
}
