use std::fmt;

/// Visual phase of the `#app` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// No phase class applied; the element is transparent.
    #[default]
    Hidden,
    Visible,
    /// Exit transition before minimize or close.
    FadingOut,
    /// Brief dip while the window maximizes or restores.
    Maximizing,
}

impl AnimationPhase {
    /// Every phase that carries a class, in the order the script clears them.
    pub const WITH_CLASS: [AnimationPhase; 3] = [
        AnimationPhase::Visible,
        AnimationPhase::FadingOut,
        AnimationPhase::Maximizing,
    ];

    /// CSS class applied to `#app` in this phase.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            AnimationPhase::Hidden => None,
            AnimationPhase::Visible => Some("visible"),
            AnimationPhase::FadingOut => Some("fading-out"),
            AnimationPhase::Maximizing => Some("maximizing"),
        }
    }

    /// Phases that only last until the next window-state notification.
    pub fn is_transient(&self) -> bool {
        matches!(self, AnimationPhase::FadingOut | AnimationPhase::Maximizing)
    }
}

impl fmt::Display for AnimationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class().unwrap_or("hidden"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_distinct() {
        let classes: Vec<_> = AnimationPhase::WITH_CLASS
            .iter()
            .filter_map(|p| p.css_class())
            .collect();
        assert_eq!(classes, vec!["visible", "fading-out", "maximizing"]);
        assert_eq!(AnimationPhase::Hidden.css_class(), None);
    }

    #[test]
    fn transient_phases() {
        assert!(AnimationPhase::FadingOut.is_transient());
        assert!(AnimationPhase::Maximizing.is_transient());
        assert!(!AnimationPhase::Visible.is_transient());
        assert!(!AnimationPhase::Hidden.is_transient());
    }

    #[test]
    fn display_uses_class_name() {
        assert_eq!(AnimationPhase::FadingOut.to_string(), "fading-out");
        assert_eq!(AnimationPhase::Hidden.to_string(), "hidden");
    }
}
