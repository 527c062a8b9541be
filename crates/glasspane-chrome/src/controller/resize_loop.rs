//! The cursor-polling resize loop.

use std::time::Instant;

use glasspane_common::{ResizeDirection, WindowRole};

use crate::backend::WindowBackend;
use crate::resize::ResizeSession;

use super::{CloseState, ShellController};

impl ShellController {
    /// Begin a resize gesture from the main window's current bounds and
    /// the current cursor position. Replaces any gesture in progress.
    ///
    /// Ignored while the window is maximized or closing.
    pub fn start_resize<B: WindowBackend>(
        &mut self,
        backend: &mut B,
        direction: ResizeDirection,
        now: Instant,
    ) {
        if self.close != CloseState::Open {
            return;
        }
        if backend.is_maximized(WindowRole::Main) {
            tracing::debug!(%direction, "resize ignored while maximized");
            return;
        }
        let Some(bounds) = backend.bounds(WindowRole::Main) else {
            return;
        };
        let cursor = backend.cursor_position();
        self.resize_floor = self
            .min_size
            .scaled(backend.scale_factor(WindowRole::Main));
        self.resize = Some(ResizeSession::new(direction, bounds, cursor));
        self.next_resize_tick = Some(now + self.resize_interval);
        tracing::debug!(
            %direction,
            ?bounds,
            ?cursor,
            floor = ?self.resize_floor,
            "resize started"
        );
    }

    pub fn stop_resize(&mut self) {
        if self.resize.take().is_some() {
            tracing::debug!("resize stopped");
        }
        self.next_resize_tick = None;
    }

    pub(crate) fn tick_resize<B: WindowBackend>(&mut self, backend: &mut B, now: Instant) {
        let (Some(session), Some(due)) = (self.resize, self.next_resize_tick) else {
            return;
        };
        if now < due {
            return;
        }
        if !backend.exists(WindowRole::Main) {
            self.stop_resize();
            return;
        }
        self.next_resize_tick = Some(now + self.resize_interval);
        let bounds = session.bounds_at(backend.cursor_position(), self.resize_floor);
        backend.set_bounds(WindowRole::Main, bounds);
    }
}
