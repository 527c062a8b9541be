//! Splash-to-main handoff phases and timing.

use std::time::{Duration, Instant};

/// Progress of the one-shot splash-to-main handoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffState {
    /// Waiting for the page to report it is ready.
    Waiting,
    /// Ready was reported early; the handoff starts at the given instant.
    Scheduled { at: Instant },
    /// The splash is fading out.
    FadingSplash,
    /// The splash is gone and the main window is fading in.
    RevealingMain,
    Complete,
}

impl HandoffState {
    /// Whether a ready signal can still start the handoff.
    pub fn accepts_ready(&self) -> bool {
        matches!(self, HandoffState::Waiting)
    }
}

/// How long to hold the splash after the page reports ready at `ready_at`
/// so that it stays up for at least `min_duration` since `splash_created`.
pub fn handoff_delay(splash_created: Instant, ready_at: Instant, min_duration: Duration) -> Duration {
    let shown_for = ready_at.saturating_duration_since(splash_created);
    min_duration.saturating_sub(shown_for)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN: Duration = Duration::from_millis(800);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn early_ready_waits_out_the_remainder() {
        let t0 = Instant::now();
        assert_eq!(handoff_delay(t0, t0 + ms(300), MIN), ms(500));
        assert_eq!(handoff_delay(t0, t0, MIN), MIN);
    }

    #[test]
    fn late_ready_starts_immediately() {
        let t0 = Instant::now();
        assert_eq!(handoff_delay(t0, t0 + ms(800), MIN), Duration::ZERO);
        assert_eq!(handoff_delay(t0, t0 + ms(1000), MIN), Duration::ZERO);
    }

    #[test]
    fn only_waiting_accepts_ready() {
        assert!(HandoffState::Waiting.accepts_ready());
        assert!(!HandoffState::Scheduled { at: Instant::now() }.accepts_ready());
        assert!(!HandoffState::FadingSplash.accepts_ready());
        assert!(!HandoffState::RevealingMain.accepts_ready());
        assert!(!HandoffState::Complete.accepts_ready());
    }
}
