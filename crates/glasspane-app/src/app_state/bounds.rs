//! Conversion between shell bounds, winit geometry and wry rects.

use glasspane_common::Bounds;
use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Rect filling a window's client area, for its webview.
pub fn client_rect(size: PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}

pub fn bounds_from(position: PhysicalPosition<i32>, size: PhysicalSize<u32>) -> Bounds {
    Bounds::new(
        position.x,
        position.y,
        i32::try_from(size.width).unwrap_or(i32::MAX),
        i32::try_from(size.height).unwrap_or(i32::MAX),
    )
}

/// Position and size to request for `bounds`. Sizes are at least 1px.
pub fn to_winit(bounds: Bounds) -> (PhysicalPosition<i32>, PhysicalSize<u32>) {
    (
        PhysicalPosition::new(bounds.x, bounds.y),
        PhysicalSize::new(bounds.width.max(1) as u32, bounds.height.max(1) as u32),
    )
}
