//! Window creation, the splash fade-in and the splash-to-main handoff.

use std::time::{Duration, Instant};

use glasspane_common::{WindowError, WindowRole};

use crate::backend::{WindowBackend, WindowSpec};
use crate::handoff::{handoff_delay, HandoffState};
use crate::ramp::{OpacityRamp, RampPurpose};

use super::{CloseState, ShellController};

impl ShellController {
    /// Open the splash window at zero opacity and start the splash clock.
    ///
    /// Does nothing when the splash is disabled.
    pub fn create_splash<B: WindowBackend>(
        &mut self,
        backend: &mut B,
        now: Instant,
    ) -> Result<(), WindowError> {
        if !self.splash.enabled {
            tracing::debug!("splash disabled, skipping");
            return Ok(());
        }
        let spec = WindowSpec::splash(&self.splash, &self.window.title);
        backend.open(WindowRole::Splash, &spec)?;
        self.apply_opacity(backend, WindowRole::Splash, 0.0);
        self.splash_created_at = Some(now);
        tracing::info!("splash window created");
        Ok(())
    }

    /// Open the main window hidden and fully transparent.
    pub fn create_main<B: WindowBackend>(&mut self, backend: &mut B) -> Result<(), WindowError> {
        let spec = WindowSpec::main(&self.window);
        backend.open(WindowRole::Main, &spec)?;
        self.apply_opacity(backend, WindowRole::Main, 0.0);
        tracing::info!(
            width = spec.width,
            height = spec.height,
            "main window created (hidden)"
        );
        Ok(())
    }

    /// A window produced its first paintable frame.
    ///
    /// For the splash this starts the fade-in, once.
    pub fn on_first_paint<B: WindowBackend>(
        &mut self,
        backend: &mut B,
        role: WindowRole,
        now: Instant,
    ) {
        if role != WindowRole::Splash || self.splash_painted || !backend.exists(role) {
            return;
        }
        self.splash_painted = true;
        if matches!(
            self.handoff,
            HandoffState::Waiting | HandoffState::Scheduled { .. }
        ) {
            let step = self.splash.fade_in_step;
            let interval = self.splash.fade_in_interval();
            self.start_ramp(role, RampPurpose::SplashFadeIn, 1.0, step, interval, now);
        }
    }

    /// The page in the main window finished its first paint.
    ///
    /// Only the first signal counts. The handoff starts once the splash
    /// has been up for the configured minimum.
    pub fn app_ready<B: WindowBackend>(&mut self, backend: &mut B, now: Instant) {
        if !self.handoff.accepts_ready() || self.close != CloseState::Open {
            tracing::debug!(state = ?self.handoff, "app-ready ignored");
            return;
        }

        let delay = match self.splash_created_at {
            Some(created) if backend.exists(WindowRole::Splash) => {
                handoff_delay(created, now, self.splash.min_duration())
            }
            _ => Duration::ZERO,
        };

        if delay.is_zero() {
            tracing::info!("app ready, starting handoff");
            self.begin_handoff(backend, now);
        } else {
            tracing::info!(delay_ms = delay.as_millis() as u64, "app ready, holding splash");
            self.handoff = HandoffState::Scheduled { at: now + delay };
        }
    }

    /// Fade the splash out, or go straight to the main window without one.
    pub(crate) fn begin_handoff<B: WindowBackend>(&mut self, backend: &mut B, now: Instant) {
        if backend.exists(WindowRole::Splash) {
            self.handoff = HandoffState::FadingSplash;
            let step = self.splash.fade_out_step;
            let interval = self.splash.fade_out_interval();
            self.start_ramp(
                WindowRole::Splash,
                RampPurpose::SplashFadeOut,
                0.0,
                step,
                interval,
                now,
            );
        } else {
            self.reveal_main(backend, now);
        }
    }

    /// Destroy the splash, then show, focus and fade in the main window.
    fn reveal_main<B: WindowBackend>(&mut self, backend: &mut B, now: Instant) {
        if backend.exists(WindowRole::Splash) {
            backend.destroy(WindowRole::Splash);
            tracing::debug!("splash destroyed");
        }
        self.ramps[WindowRole::Splash.index()] = None;

        if !backend.exists(WindowRole::Main) {
            self.handoff = HandoffState::Complete;
            return;
        }

        self.handoff = HandoffState::RevealingMain;
        backend.show(WindowRole::Main);
        backend.focus(WindowRole::Main);
        let step = self.fade.main_fade_in_step;
        let interval = self.fade.main_fade_in_interval();
        self.start_ramp(
            WindowRole::Main,
            RampPurpose::MainFadeIn,
            1.0,
            step,
            interval,
            now,
        );
    }

    /// Start a ramp from the window's current opacity, replacing any
    /// ramp already running on that window.
    pub(crate) fn start_ramp(
        &mut self,
        role: WindowRole,
        purpose: RampPurpose,
        target: f64,
        step: f64,
        interval: Duration,
        now: Instant,
    ) {
        let slot = &mut self.ramps[role.index()];
        if let Some(previous) = slot.as_ref() {
            tracing::debug!(%role, replaced = ?previous.purpose(), ?purpose, "ramp replaced");
        }
        let from = self.opacity[role.index()];
        *slot = Some(OpacityRamp::new(purpose, from, target, step, interval, now));
    }

    pub(crate) fn apply_opacity<B: WindowBackend>(
        &mut self,
        backend: &mut B,
        role: WindowRole,
        opacity: f64,
    ) {
        self.opacity[role.index()] = opacity;
        backend.set_opacity(role, opacity);
    }

    pub(crate) fn tick_ramps<B: WindowBackend>(&mut self, backend: &mut B, now: Instant) {
        for role in WindowRole::ALL {
            let i = role.index();
            let Some(ramp) = self.ramps[i].as_mut() else {
                continue;
            };

            // A window that disappeared under its ramp counts as finished.
            if backend.exists(role) {
                if let Some(value) = ramp.advance(now) {
                    self.opacity[i] = value;
                    backend.set_opacity(role, value);
                }
                if !ramp.is_finished() {
                    continue;
                }
            }

            let purpose = ramp.purpose();
            self.ramps[i] = None;
            self.on_ramp_finished(backend, purpose, now);
        }
    }

    fn on_ramp_finished<B: WindowBackend>(
        &mut self,
        backend: &mut B,
        purpose: RampPurpose,
        now: Instant,
    ) {
        tracing::debug!(?purpose, "ramp finished");
        match purpose {
            RampPurpose::SplashFadeIn => {}
            RampPurpose::SplashFadeOut => self.reveal_main(backend, now),
            RampPurpose::MainFadeIn => {
                self.handoff = HandoffState::Complete;
                tracing::info!("handoff complete");
            }
            RampPurpose::CloseFadeOut => self.finish_close(backend),
        }
    }
}
