//! The shell controller: single owner of splash/main window chrome state.
//!
//! All time-based behavior (opacity ramps, the handoff delay, the close
//! fallback, the resize poll) is stored as deadlines and advanced by
//! [`ShellController::tick`]. Nothing blocks and nothing runs on another
//! thread.

use std::time::{Duration, Instant};

use glasspane_common::{BridgeCommand, WindowRole};
use glasspane_config::schema::{FadeConfig, SplashConfig, WindowConfig};
use glasspane_config::GlasspaneConfig;

use crate::backend::WindowBackend;
use crate::handoff::HandoffState;
use crate::ramp::OpacityRamp;
use crate::resize::{MinSize, ResizeSession};
use crate::window_state::WindowStateTracker;

mod lifecycle;
mod resize_loop;
mod window_ops;

#[cfg(test)]
mod fake;

/// Close progress of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CloseState {
    Open,
    /// Fading out; forced shut at `fallback_at` if the fade has not finished.
    Closing { fallback_at: Instant },
    Closed,
}

/// Coordinates the splash and main windows.
pub struct ShellController {
    pub(crate) window: WindowConfig,
    pub(crate) splash: SplashConfig,
    pub(crate) fade: FadeConfig,
    /// Minimum main window size in logical pixels.
    pub(crate) min_size: MinSize,
    pub(crate) resize_interval: Duration,

    // Splash handoff
    pub(crate) splash_created_at: Option<Instant>,
    pub(crate) splash_painted: bool,
    pub(crate) handoff: HandoffState,

    // Per-window opacity, indexed by `WindowRole::index`
    pub(crate) opacity: [f64; 2],
    pub(crate) ramps: [Option<OpacityRamp>; 2],

    pub(crate) close: CloseState,

    // Manual resize
    pub(crate) resize: Option<ResizeSession>,
    // `min_size` in physical pixels for the display the gesture started on
    pub(crate) resize_floor: MinSize,
    pub(crate) next_resize_tick: Option<Instant>,

    pub(crate) window_state: WindowStateTracker,
}

impl ShellController {
    pub fn new(config: &GlasspaneConfig) -> Self {
        Self {
            window: config.window.clone(),
            splash: config.splash.clone(),
            fade: config.fade.clone(),
            min_size: MinSize {
                width: config.window.min_width as i32,
                height: config.window.min_height as i32,
            },
            resize_interval: config.resize.tick_interval(),
            splash_created_at: None,
            splash_painted: false,
            handoff: HandoffState::Waiting,
            opacity: [0.0; 2],
            ramps: [None, None],
            close: CloseState::Open,
            resize: None,
            resize_floor: MinSize {
                width: config.window.min_width as i32,
                height: config.window.min_height as i32,
            },
            next_resize_tick: None,
            window_state: WindowStateTracker::new(),
        }
    }

    pub fn handoff_state(&self) -> HandoffState {
        self.handoff
    }

    /// Last opacity applied to a window.
    pub fn opacity(&self, role: WindowRole) -> f64 {
        self.opacity[role.index()]
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_some()
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.close, CloseState::Closing { .. })
    }

    /// Whether the main window has been closed and the app should exit.
    pub fn is_closed(&self) -> bool {
        self.close == CloseState::Closed
    }

    /// Route a bridge command from the page.
    pub fn handle_command<B: WindowBackend>(
        &mut self,
        backend: &mut B,
        command: BridgeCommand,
        now: Instant,
    ) {
        tracing::debug!(kind = command.kind(), "bridge command");
        match command {
            BridgeCommand::Minimize => self.minimize(backend),
            BridgeCommand::Maximize => self.toggle_maximize(backend),
            BridgeCommand::Close => self.close(backend, now),
            BridgeCommand::AppReady => self.app_ready(backend, now),
            BridgeCommand::StartResize(direction) => self.start_resize(backend, direction, now),
            BridgeCommand::StopResize => self.stop_resize(),
        }
    }

    /// Advance every due timer.
    pub fn tick<B: WindowBackend>(&mut self, backend: &mut B, now: Instant) {
        if let HandoffState::Scheduled { at } = self.handoff {
            if now >= at {
                self.begin_handoff(backend, now);
            }
        }

        if let CloseState::Closing { fallback_at } = self.close {
            if now >= fallback_at {
                tracing::warn!("close fade did not finish in time, forcing close");
                self.finish_close(backend);
                return;
            }
        }

        self.tick_ramps(backend, now);
        self.tick_resize(backend, now);
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        let handoff = match self.handoff {
            HandoffState::Scheduled { at } => Some(at),
            _ => None,
        };
        let fallback = match self.close {
            CloseState::Closing { fallback_at } => Some(fallback_at),
            _ => None,
        };
        let ramps = self.ramps.iter().flatten().map(OpacityRamp::next_due);

        [handoff, fallback, self.next_resize_tick]
            .into_iter()
            .flatten()
            .chain(ramps)
            .min()
    }

    /// Tear down all chrome state and destroy both windows. Idempotent.
    pub fn shutdown<B: WindowBackend>(&mut self, backend: &mut B) {
        self.resize = None;
        self.next_resize_tick = None;
        self.ramps = [None, None];
        self.handoff = HandoffState::Complete;
        for role in WindowRole::ALL {
            if backend.exists(role) {
                backend.destroy(role);
            }
        }
        self.close = CloseState::Closed;
    }
}
