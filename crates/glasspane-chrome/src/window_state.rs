//! Turns polled window state into bridge notifications.

use glasspane_common::BridgeNotification;

/// Remembers the last observed maximized/minimized state of the main
/// window and reports transitions only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowStateTracker {
    maximized: bool,
    minimized: bool,
}

impl WindowStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Record the current state and return the notifications it implies.
    ///
    /// Leaving the minimized state yields `Restored`; maximize transitions
    /// yield `Maximized`/`Unmaximized`. Restored is always reported first.
    pub fn observe(&mut self, maximized: bool, minimized: bool) -> Vec<BridgeNotification> {
        let mut out = Vec::new();
        if self.minimized && !minimized {
            out.push(BridgeNotification::Restored);
        }
        if !self.maximized && maximized {
            out.push(BridgeNotification::Maximized);
        } else if self.maximized && !maximized {
            out.push(BridgeNotification::Unmaximized);
        }
        self.maximized = maximized;
        self.minimized = minimized;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_state_is_silent() {
        let mut t = WindowStateTracker::new();
        assert!(t.observe(false, false).is_empty());
        assert!(t.observe(false, false).is_empty());
    }

    #[test]
    fn maximize_then_unmaximize() {
        let mut t = WindowStateTracker::new();
        assert_eq!(t.observe(true, false), vec![BridgeNotification::Maximized]);
        assert!(t.observe(true, false).is_empty());
        assert_eq!(t.observe(false, false), vec![BridgeNotification::Unmaximized]);
    }

    #[test]
    fn restore_from_minimized() {
        let mut t = WindowStateTracker::new();
        assert!(t.observe(false, true).is_empty());
        assert!(t.is_minimized());
        assert_eq!(t.observe(false, false), vec![BridgeNotification::Restored]);
    }

    #[test]
    fn restore_into_maximized_reports_both() {
        let mut t = WindowStateTracker::new();
        t.observe(false, true);
        assert_eq!(
            t.observe(true, false),
            vec![BridgeNotification::Restored, BridgeNotification::Maximized]
        );
    }
}
