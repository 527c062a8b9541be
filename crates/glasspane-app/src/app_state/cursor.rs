//! Global cursor tracking.
//!
//! winit cannot query the desktop cursor position, so it is read from the
//! OS through `mouse_position`. Where that query is unavailable (Wayland
//! sessions without XWayland) the position is rebuilt from raw mouse
//! motion and resynced whenever the cursor moves over one of our windows.

use glasspane_common::Point;
use mouse_position::mouse_position::Mouse;

/// macOS reports the desktop cursor in points, not physical pixels.
const DESKTOP_IN_POINTS: bool = cfg!(target_os = "macos");

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorTracker {
    x: f64,
    y: f64,
    desktop: bool,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a raw mouse-motion delta.
    pub fn apply_motion(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// The cursor is at `local` inside a window whose client area starts
    /// at `window_origin` on the desktop.
    pub fn resync(&mut self, window_origin: Point, local: (f64, f64)) {
        self.x = f64::from(window_origin.x) + local.0;
        self.y = f64::from(window_origin.y) + local.1;
    }

    pub fn position(&self) -> Point {
        Point::new(self.x.round() as i32, self.y.round() as i32)
    }

    /// Switch to reading the desktop cursor from the OS, if it answers.
    pub fn use_desktop_query(&mut self) {
        self.desktop = query_desktop().is_some();
        if self.desktop {
            tracing::debug!("cursor: using desktop position query");
        } else {
            tracing::warn!("cursor: desktop position unavailable, tracking raw mouse motion");
        }
    }

    pub fn uses_desktop_query(&self) -> bool {
        self.desktop
    }

    /// Cursor position in physical pixels. `scale_factor` is the scale of
    /// the display the cursor is measured against.
    pub fn current(&self, scale_factor: f64) -> Point {
        if self.desktop {
            if let Some(raw) = query_desktop() {
                return desktop_to_physical(raw, scale_factor);
            }
        }
        self.position()
    }
}

fn query_desktop() -> Option<(i32, i32)> {
    match Mouse::get_mouse_position() {
        Mouse::Position { x, y } => Some((x, y)),
        Mouse::Error => None,
    }
}

fn desktop_to_physical((x, y): (i32, i32), scale_factor: f64) -> Point {
    if !DESKTOP_IN_POINTS || !scale_factor.is_finite() || scale_factor <= 0.0 {
        return Point::new(x, y);
    }
    Point::new(
        (f64::from(x) * scale_factor).round() as i32,
        (f64::from(y) * scale_factor).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin() {
        assert_eq!(CursorTracker::new().position(), Point::new(0, 0));
    }

    #[test]
    fn accumulates_motion() {
        let mut c = CursorTracker::new();
        c.apply_motion(10.4, -3.0);
        c.apply_motion(0.4, 1.0);
        assert_eq!(c.position(), Point::new(11, -2));
    }

    #[test]
    fn resync_replaces_accumulated_drift() {
        let mut c = CursorTracker::new();
        c.apply_motion(500.0, 500.0);
        c.resync(Point::new(100, 100), (25.0, 40.0));
        assert_eq!(c.position(), Point::new(125, 140));
        c.apply_motion(5.0, 5.0);
        assert_eq!(c.position(), Point::new(130, 145));
    }

    #[test]
    fn raw_motion_until_desktop_query_enabled() {
        let mut c = CursorTracker::new();
        assert!(!c.uses_desktop_query());
        c.apply_motion(50.0, 30.0);
        assert_eq!(c.current(2.0), Point::new(50, 30));
    }

    #[test]
    fn desktop_position_is_physical() {
        let p = desktop_to_physical((640, 360), 2.0);
        if DESKTOP_IN_POINTS {
            assert_eq!(p, Point::new(1280, 720));
        } else {
            assert_eq!(p, Point::new(640, 360));
        }
        assert_eq!(desktop_to_physical((640, 360), f64::NAN), Point::new(640, 360));
    }
}
