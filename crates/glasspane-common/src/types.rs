use serde::{Deserialize, Serialize};
use std::fmt;

/// Outer bounds of a native window, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A position on the desktop, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The two native windows the shell owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowRole {
    Splash,
    Main,
}

impl WindowRole {
    pub const ALL: [WindowRole; 2] = [WindowRole::Splash, WindowRole::Main];

    /// Stable slot index, used for per-window fixed-size tables.
    pub fn index(self) -> usize {
        match self {
            WindowRole::Splash => 0,
            WindowRole::Main => 1,
        }
    }
}

impl fmt::Display for WindowRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowRole::Splash => f.write_str("splash"),
            WindowRole::Main => f.write_str("main"),
        }
    }
}

/// Which window edges a resize gesture moves.
///
/// Parsed from the compass tokens the page puts on its resize handles
/// (`"n"`, `"se"`, `"w"`, ...). Every character must be one of `n`, `s`,
/// `e`, `w`, and opposite edges cannot be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ResizeDirection {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl ResizeDirection {
    pub fn parse(token: &str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        let mut dir = Self::default();
        for c in token.chars() {
            let edge = match c {
                'n' => &mut dir.north,
                's' => &mut dir.south,
                'e' => &mut dir.east,
                'w' => &mut dir.west,
                _ => return None,
            };
            if *edge {
                return None;
            }
            *edge = true;
        }
        if (dir.north && dir.south) || (dir.east && dir.west) {
            return None;
        }
        Some(dir)
    }

    /// Whether the gesture changes the width.
    pub fn horizontal(&self) -> bool {
        self.east || self.west
    }

    /// Whether the gesture changes the height.
    pub fn vertical(&self) -> bool {
        self.north || self.south
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.north {
            f.write_str("n")?;
        }
        if self.south {
            f.write_str("s")?;
        }
        if self.east {
            f.write_str("e")?;
        }
        if self.west {
            f.write_str("w")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_serialization() {
        let b = Bounds::new(100, 100, 800, 600);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"x":100,"y":100,"width":800,"height":600}"#);
    }

    #[test]
    fn window_role_display_and_index() {
        assert_eq!(WindowRole::Splash.to_string(), "splash");
        assert_eq!(WindowRole::Main.to_string(), "main");
        assert_ne!(WindowRole::Splash.index(), WindowRole::Main.index());
    }

    #[test]
    fn parse_single_edges() {
        let n = ResizeDirection::parse("n").unwrap();
        assert!(n.north && !n.south && !n.east && !n.west);
        let w = ResizeDirection::parse("w").unwrap();
        assert!(w.west && w.horizontal() && !w.vertical());
    }

    #[test]
    fn parse_corners() {
        for token in ["ne", "nw", "se", "sw"] {
            let dir = ResizeDirection::parse(token).unwrap();
            assert!(dir.horizontal() && dir.vertical(), "{token}");
        }
    }

    #[test]
    fn parse_is_order_independent() {
        assert_eq!(ResizeDirection::parse("es"), ResizeDirection::parse("se"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(ResizeDirection::parse("").is_none());
        assert!(ResizeDirection::parse("x").is_none());
        assert!(ResizeDirection::parse("N").is_none());
        assert!(ResizeDirection::parse("nn").is_none());
        assert!(ResizeDirection::parse("ns").is_none());
        assert!(ResizeDirection::parse("ew").is_none());
        assert!(ResizeDirection::parse("se; rm").is_none());
    }

    #[test]
    fn display_round_trips_canonical_tokens() {
        for token in ["n", "s", "e", "w", "ne", "nw", "se", "sw"] {
            let dir = ResizeDirection::parse(token).unwrap();
            assert_eq!(dir.to_string(), token);
        }
    }
}
