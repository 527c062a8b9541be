//! Window-control commands and window-state notifications.

use std::time::Instant;

use glasspane_common::WindowRole;

use crate::backend::WindowBackend;
use crate::handoff::HandoffState;
use crate::ramp::RampPurpose;

use super::{CloseState, ShellController};

impl ShellController {
    pub fn minimize<B: WindowBackend>(&mut self, backend: &mut B) {
        if backend.exists(WindowRole::Main) {
            backend.minimize(WindowRole::Main);
        }
    }

    /// Maximize the main window, or restore it when already maximized.
    /// Ends any resize gesture in progress.
    pub fn toggle_maximize<B: WindowBackend>(&mut self, backend: &mut B) {
        if !backend.exists(WindowRole::Main) {
            return;
        }
        if self.resize.is_some() {
            tracing::debug!("maximize toggled during resize, ending resize");
            self.stop_resize();
        }
        let maximized = backend.is_maximized(WindowRole::Main);
        backend.set_maximized(WindowRole::Main, !maximized);
    }

    /// Fade the main window out and close it.
    ///
    /// The window is closed at the fallback deadline even if the fade
    /// has not reached zero by then.
    pub fn close<B: WindowBackend>(&mut self, backend: &mut B, now: Instant) {
        if self.close != CloseState::Open || !backend.exists(WindowRole::Main) {
            return;
        }
        self.stop_resize();
        self.close = CloseState::Closing {
            fallback_at: now + self.fade.close_fallback(),
        };
        let step = self.fade.close_step;
        let interval = self.fade.close_interval();
        self.start_ramp(
            WindowRole::Main,
            RampPurpose::CloseFadeOut,
            0.0,
            step,
            interval,
            now,
        );
        tracing::info!("closing main window");
    }

    pub(crate) fn finish_close<B: WindowBackend>(&mut self, backend: &mut B) {
        self.ramps = [None, None];
        self.resize = None;
        self.next_resize_tick = None;
        self.handoff = HandoffState::Complete;
        for role in WindowRole::ALL {
            if backend.exists(role) {
                backend.destroy(role);
            }
        }
        self.close = CloseState::Closed;
        tracing::info!("main window closed");
    }

    /// Compare the main window's state with the last observation and
    /// forward any transitions to the page.
    pub fn sync_window_state<B: WindowBackend>(&mut self, backend: &mut B) {
        if !backend.exists(WindowRole::Main) {
            return;
        }
        let maximized = backend.is_maximized(WindowRole::Main);
        let minimized = backend.is_minimized(WindowRole::Main);
        for notification in self.window_state.observe(maximized, minimized) {
            tracing::debug!(kind = notification.kind(), "window state notification");
            backend.notify(notification);
        }
    }
}
