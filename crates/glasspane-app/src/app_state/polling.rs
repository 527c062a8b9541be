//! Per-iteration work: drain webview events, advance timers, schedule the
//! next wake-up.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use glasspane_common::WindowRole;
use glasspane_webview::ipc::parse_command;
use glasspane_webview::{PageLoadState, WebViewEvent};

use super::backend::LoopBackend;
use super::core::GlasspaneApp;

/// Longest sleep between iterations while nothing is scheduled.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl GlasspaneApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        self.poll_webview_events(event_loop, now);

        let mut backend = LoopBackend::new(&mut self.native, event_loop);
        self.controller.sync_window_state(&mut backend);
        self.controller.tick(&mut backend, now);

        if self.controller.is_closed() {
            tracing::info!("Main window closed, exiting");
            self.should_exit = true;
            event_loop.exit();
            return;
        }

        let idle = Instant::now() + POLL_INTERVAL;
        let wake = self
            .controller
            .next_deadline()
            .map_or(idle, |deadline| deadline.min(idle));
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    fn poll_webview_events(&mut self, event_loop: &ActiveEventLoop, now: Instant) {
        let events = self.native.webviews.drain_events();
        if events.is_empty() {
            return;
        }

        let mut backend = LoopBackend::new(&mut self.native, event_loop);
        for event in events {
            match event {
                WebViewEvent::PageLoad {
                    role,
                    state: PageLoadState::Finished,
                    ..
                } => {
                    self.controller.on_first_paint(&mut backend, role, now);
                }
                WebViewEvent::IpcMessage {
                    role: WindowRole::Main,
                    body,
                } => match parse_command(&body) {
                    Ok(command) => self.controller.handle_command(&mut backend, command, now),
                    Err(e) => tracing::warn!("Rejected bridge message: {e}"),
                },
                WebViewEvent::IpcMessage { role, .. } => {
                    tracing::warn!(%role, "Ignoring bridge message from non-main window");
                }
                WebViewEvent::NavigationRequested { role, url } => {
                    tracing::debug!(%role, url = %url, "navigation");
                }
                WebViewEvent::PageLoad { .. } | WebViewEvent::Closed { .. } => {}
            }
        }
    }
}
