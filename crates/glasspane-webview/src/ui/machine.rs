use std::time::Duration;

use glasspane_common::{BridgeCommand, BridgeNotification, ResizeDirection};
use glasspane_config::schema::AnimationConfig;

use super::phase::AnimationPhase;

/// Something that happened on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    MinimizeClicked,
    MaximizeClicked,
    CloseClicked,
    /// The window `load` event.
    Loaded,
    /// A requested animation frame arrived.
    AnimationFrame,
    Notified(BridgeNotification),
    /// A timer scheduled by [`UiEffect::Schedule`] elapsed.
    TimerFired(Deferred),
    ResizeHandlePressed(ResizeDirection),
    /// Mouse button released anywhere on the page.
    MouseReleased,
}

/// Work postponed by a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    Send(BridgeCommand),
    /// Clear transient phases and show the app again.
    Reveal,
}

/// What the page does in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEffect {
    /// Replace the phase class on `#app`.
    ApplyPhase(AnimationPhase),
    /// Drop transient phase classes, leaving `visible` alone.
    ClearTransient,
    /// Apply a phase on the next animation frame.
    OnNextFrame(AnimationPhase),
    Schedule { delay: Duration, then: Deferred },
    Send(BridgeCommand),
    /// Send unless this page already sent the command.
    SendOnce(BridgeCommand),
}

/// Owns the `#app` animation phase.
///
/// Delays are fixed: the machine assumes the OS finishes minimizing,
/// maximizing or restoring within them. [`effects`](Self::effects) is the
/// transition table the page script is rendered from;
/// [`handle`](Self::handle) runs it against the machine's own state.
#[derive(Debug, Clone)]
pub struct AnimationMachine {
    phase: AnimationPhase,
    exit_delay: Duration,
    maximize_delay: Duration,
    settle_delay: Duration,
    sent_once: Vec<BridgeCommand>,
    next_frame: Option<AnimationPhase>,
}

impl AnimationMachine {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            phase: AnimationPhase::Hidden,
            exit_delay: config.exit_delay(),
            maximize_delay: config.maximize_delay(),
            settle_delay: config.settle_delay(),
            sent_once: Vec::new(),
            next_frame: None,
        }
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn ready_sent(&self) -> bool {
        self.sent_once.contains(&BridgeCommand::AppReady)
    }

    /// Effects the page runs for `event`, whatever the current state.
    ///
    /// Animation frames carry no effects of their own; they deliver the
    /// phase requested by an earlier [`UiEffect::OnNextFrame`].
    pub fn effects(&self, event: UiEvent) -> Vec<UiEffect> {
        match event {
            UiEvent::MinimizeClicked => self.exit_then(BridgeCommand::Minimize),
            UiEvent::CloseClicked => self.exit_then(BridgeCommand::Close),
            UiEvent::MaximizeClicked => vec![
                UiEffect::ApplyPhase(AnimationPhase::Maximizing),
                UiEffect::Schedule {
                    delay: self.maximize_delay,
                    then: Deferred::Send(BridgeCommand::Maximize),
                },
            ],
            UiEvent::Loaded => vec![
                UiEffect::OnNextFrame(AnimationPhase::Visible),
                UiEffect::SendOnce(BridgeCommand::AppReady),
            ],
            UiEvent::AnimationFrame => Vec::new(),
            UiEvent::Notified(_) => vec![UiEffect::Schedule {
                delay: self.settle_delay,
                then: Deferred::Reveal,
            }],
            UiEvent::TimerFired(Deferred::Send(command)) => vec![UiEffect::Send(command)],
            UiEvent::TimerFired(Deferred::Reveal) => vec![
                UiEffect::ClearTransient,
                UiEffect::OnNextFrame(AnimationPhase::Visible),
            ],
            UiEvent::ResizeHandlePressed(direction) => {
                vec![UiEffect::Send(BridgeCommand::StartResize(direction))]
            }
            UiEvent::MouseReleased => vec![UiEffect::Send(BridgeCommand::StopResize)],
        }
    }

    /// Run `event` through the machine. Returns the effects that took
    /// place; a `SendOnce` whose command already went out is dropped.
    pub fn handle(&mut self, event: UiEvent) -> Vec<UiEffect> {
        if event == UiEvent::AnimationFrame {
            return match self.next_frame.take() {
                Some(phase) => {
                    self.phase = phase;
                    vec![UiEffect::ApplyPhase(phase)]
                }
                None => Vec::new(),
            };
        }

        let mut done = Vec::new();
        for effect in self.effects(event) {
            match effect {
                UiEffect::ApplyPhase(phase) => self.phase = phase,
                UiEffect::ClearTransient => {
                    if self.phase.is_transient() {
                        self.phase = AnimationPhase::Hidden;
                    }
                }
                UiEffect::OnNextFrame(phase) => self.next_frame = Some(phase),
                UiEffect::SendOnce(command) => {
                    if self.sent_once.contains(&command) {
                        continue;
                    }
                    self.sent_once.push(command);
                }
                UiEffect::Schedule { .. } | UiEffect::Send(_) => {}
            }
            done.push(effect);
        }
        done
    }

    fn exit_then(&self, command: BridgeCommand) -> Vec<UiEffect> {
        vec![
            UiEffect::ApplyPhase(AnimationPhase::FadingOut),
            UiEffect::Schedule {
                delay: self.exit_delay,
                then: Deferred::Send(command),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> AnimationMachine {
        AnimationMachine::new(&AnimationConfig::default())
    }

    /// Feed an event, then keep feeding the frames and timers it asks
    /// for. Returns every bridge command sent and the total time waited.
    fn settle(m: &mut AnimationMachine, event: UiEvent) -> (Vec<BridgeCommand>, Duration) {
        let mut queue = vec![event];
        let mut sent = Vec::new();
        let mut waited = Duration::ZERO;
        while let Some(event) = queue.pop() {
            for effect in m.handle(event) {
                match effect {
                    UiEffect::Send(cmd) | UiEffect::SendOnce(cmd) => sent.push(cmd),
                    UiEffect::OnNextFrame(_) => queue.push(UiEvent::AnimationFrame),
                    UiEffect::Schedule { delay, then } => {
                        waited += delay;
                        queue.push(UiEvent::TimerFired(then));
                    }
                    UiEffect::ApplyPhase(_) | UiEffect::ClearTransient => {}
                }
            }
        }
        (sent, waited)
    }

    #[test]
    fn starts_hidden() {
        let m = machine();
        assert_eq!(m.phase(), AnimationPhase::Hidden);
        assert!(!m.ready_sent());
    }

    #[test]
    fn close_fades_out_before_sending() {
        let mut m = machine();
        let effects = m.handle(UiEvent::CloseClicked);
        assert_eq!(
            effects,
            vec![
                UiEffect::ApplyPhase(AnimationPhase::FadingOut),
                UiEffect::Schedule {
                    delay: Duration::from_millis(200),
                    then: Deferred::Send(BridgeCommand::Close),
                },
            ]
        );
        assert_eq!(
            m.handle(UiEvent::TimerFired(Deferred::Send(BridgeCommand::Close))),
            vec![UiEffect::Send(BridgeCommand::Close)]
        );
    }

    #[test]
    fn minimize_fades_out_before_sending() {
        let mut m = machine();
        let (sent, waited) = settle(&mut m, UiEvent::MinimizeClicked);
        assert_eq!(sent, vec![BridgeCommand::Minimize]);
        assert_eq!(waited, Duration::from_millis(200));
        assert_eq!(m.phase(), AnimationPhase::FadingOut);
    }

    #[test]
    fn maximize_dips_before_sending() {
        let mut m = machine();
        let (sent, waited) = settle(&mut m, UiEvent::MaximizeClicked);
        assert_eq!(sent, vec![BridgeCommand::Maximize]);
        assert_eq!(waited, Duration::from_millis(200));
        assert_eq!(m.phase(), AnimationPhase::Maximizing);
    }

    #[test]
    fn load_shows_app_and_signals_ready_once() {
        let mut m = machine();
        let (sent, _) = settle(&mut m, UiEvent::Loaded);
        assert_eq!(sent, vec![BridgeCommand::AppReady]);
        assert_eq!(m.phase(), AnimationPhase::Visible);

        let (sent, _) = settle(&mut m, UiEvent::Loaded);
        assert!(sent.is_empty());
        assert!(m.ready_sent());
    }

    #[test]
    fn visible_waits_for_frame() {
        let mut m = machine();
        m.handle(UiEvent::Loaded);
        assert_eq!(m.phase(), AnimationPhase::Hidden);
        m.handle(UiEvent::AnimationFrame);
        assert_eq!(m.phase(), AnimationPhase::Visible);
        // Stray frames change nothing.
        assert!(m.handle(UiEvent::AnimationFrame).is_empty());
    }

    #[test]
    fn notifications_reveal_after_settle_delay() {
        for notification in [
            BridgeNotification::Restored,
            BridgeNotification::Maximized,
            BridgeNotification::Unmaximized,
        ] {
            let mut m = machine();
            settle(&mut m, UiEvent::MaximizeClicked);
            let (sent, waited) = settle(&mut m, UiEvent::Notified(notification));
            assert!(sent.is_empty());
            assert_eq!(waited, Duration::from_millis(100));
            assert_eq!(m.phase(), AnimationPhase::Visible);
        }
    }

    #[test]
    fn reveal_clears_transient_phase_first() {
        let mut m = machine();
        m.handle(UiEvent::MinimizeClicked);
        m.handle(UiEvent::TimerFired(Deferred::Reveal));
        assert_eq!(m.phase(), AnimationPhase::Hidden);
        m.handle(UiEvent::AnimationFrame);
        assert_eq!(m.phase(), AnimationPhase::Visible);
    }

    #[test]
    fn reveal_keeps_visible_phase() {
        let mut m = machine();
        settle(&mut m, UiEvent::Loaded);
        m.handle(UiEvent::TimerFired(Deferred::Reveal));
        assert_eq!(m.phase(), AnimationPhase::Visible);
    }

    #[test]
    fn effects_do_not_depend_on_state() {
        let fresh = machine();
        let mut used = machine();
        settle(&mut used, UiEvent::Loaded);
        settle(&mut used, UiEvent::MaximizeClicked);
        for event in [
            UiEvent::Loaded,
            UiEvent::CloseClicked,
            UiEvent::TimerFired(Deferred::Reveal),
            UiEvent::Notified(BridgeNotification::Restored),
        ] {
            assert_eq!(fresh.effects(event), used.effects(event), "{event:?}");
        }
    }

    #[test]
    fn restore_after_minimize_round_trip() {
        let mut m = machine();
        settle(&mut m, UiEvent::Loaded);
        let (sent, _) = settle(&mut m, UiEvent::MinimizeClicked);
        assert_eq!(sent, vec![BridgeCommand::Minimize]);
        settle(&mut m, UiEvent::Notified(BridgeNotification::Restored));
        assert_eq!(m.phase(), AnimationPhase::Visible);
    }

    #[test]
    fn resize_handles_forward_immediately() {
        let mut m = machine();
        let dir = ResizeDirection::parse("sw").unwrap();
        assert_eq!(
            m.handle(UiEvent::ResizeHandlePressed(dir)),
            vec![UiEffect::Send(BridgeCommand::StartResize(dir))]
        );
        assert_eq!(
            m.handle(UiEvent::MouseReleased),
            vec![UiEffect::Send(BridgeCommand::StopResize)]
        );
        assert_eq!(m.phase(), AnimationPhase::Hidden);
    }

    #[test]
    fn delays_come_from_config() {
        let config = AnimationConfig {
            exit_delay_ms: 50,
            maximize_delay_ms: 75,
            settle_delay_ms: 10,
        };
        let mut m = AnimationMachine::new(&config);
        assert_eq!(settle(&mut m, UiEvent::CloseClicked).1, Duration::from_millis(50));
        assert_eq!(settle(&mut m, UiEvent::MaximizeClicked).1, Duration::from_millis(75));
        assert_eq!(
            settle(&mut m, UiEvent::Notified(BridgeNotification::Maximized)).1,
            Duration::from_millis(10)
        );
    }
}
