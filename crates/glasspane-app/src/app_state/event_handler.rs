//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, DeviceEvents};
use winit::window::WindowId;

use glasspane_chrome::WindowBackend;
use glasspane_common::WindowRole;

use super::backend::LoopBackend;
use super::core::GlasspaneApp;
use super::init::open_windows;

impl ApplicationHandler for GlasspaneApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            return;
        }
        self.started = true;

        // Raw motion is the fallback when the desktop cursor cannot be queried.
        event_loop.listen_device_events(DeviceEvents::Always);
        self.native.cursor.use_desktop_query();

        let mut backend = LoopBackend::new(&mut self.native, event_loop);
        if let Err(e) = open_windows(&mut self.controller, &mut backend, Instant::now()) {
            tracing::error!("Failed to create main window: {e}");
            self.should_exit = true;
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(role) = self.native.role_of(window_id) else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!(%role, "Window close requested");
                let mut backend = LoopBackend::new(&mut self.native, event_loop);
                match role {
                    WindowRole::Main => self.controller.close(&mut backend, Instant::now()),
                    WindowRole::Splash => backend.destroy(role),
                }
            }

            WindowEvent::Resized(_) => {
                self.native.sync_webview_bounds(role);
                if role == WindowRole::Main {
                    let mut backend = LoopBackend::new(&mut self.native, event_loop);
                    self.controller.sync_window_state(&mut backend);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(origin) = self.native.window_origin(role) {
                    self.native.cursor.resync(origin, (position.x, position.y));
                }
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if self.native.cursor.uses_desktop_query() {
            return;
        }
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.native.cursor.apply_motion(dx, dy);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
