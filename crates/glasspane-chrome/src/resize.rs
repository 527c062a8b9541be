//! Manual edge/corner resizing for the frameless main window.
//!
//! A gesture records the window bounds and the cursor position when it
//! starts; every tick the new bounds are derived from the cursor delta
//! against that origin, never incrementally, so rounding cannot drift.

use glasspane_common::{Bounds, Point, ResizeDirection};

/// Size floor applied while resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinSize {
    pub width: i32,
    pub height: i32,
}

impl MinSize {
    /// Convert a floor given in logical pixels to physical pixels, rounding
    /// the way the windowing system does for its own minimum size.
    pub fn scaled(self, scale_factor: f64) -> Self {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return self;
        }
        Self {
            width: (f64::from(self.width) * scale_factor).round() as i32,
            height: (f64::from(self.height) * scale_factor).round() as i32,
        }
    }
}

/// State of one in-progress resize gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub direction: ResizeDirection,
    pub start_bounds: Bounds,
    pub start_cursor: Point,
}

impl ResizeSession {
    pub fn new(direction: ResizeDirection, start_bounds: Bounds, start_cursor: Point) -> Self {
        Self {
            direction,
            start_bounds,
            start_cursor,
        }
    }

    /// Bounds for the window with the cursor now at `cursor`.
    pub fn bounds_at(&self, cursor: Point, min: MinSize) -> Bounds {
        compute_bounds(self, cursor, min)
    }
}

/// Derive new window bounds from the session origin and the current cursor.
///
/// East/south edges grow the size by the delta. West/north edges shrink
/// it and move the origin by the same amount. Each size is floored at
/// `min`; when the floor clamps a west/north drag, the origin is pinned
/// so the opposite edge stays where it was.
pub fn compute_bounds(session: &ResizeSession, cursor: Point, min: MinSize) -> Bounds {
    let start = session.start_bounds;
    let dir = session.direction;
    let dx = cursor.x - session.start_cursor.x;
    let dy = cursor.y - session.start_cursor.y;

    let mut bounds = start;

    if dir.east {
        bounds.width = (start.width + dx).max(min.width);
    }
    if dir.west {
        let (x, width) = shrink_from_origin(start.x, start.width, dx, min.width);
        bounds.x = x;
        bounds.width = width;
    }
    if dir.south {
        bounds.height = (start.height + dy).max(min.height);
    }
    if dir.north {
        let (y, height) = shrink_from_origin(start.y, start.height, dy, min.height);
        bounds.y = y;
        bounds.height = height;
    }

    bounds
}

/// Move the leading edge of one axis by `delta`, keeping the trailing
/// edge fixed once the size hits `min`.
fn shrink_from_origin(origin: i32, size: i32, delta: i32, min: i32) -> (i32, i32) {
    let size_after = size - delta;
    if size_after >= min {
        (origin + delta, size_after)
    } else {
        (origin + size - min, min)
    }
}
