//! In-memory `WindowBackend` for controller tests.

use std::collections::HashMap;

use glasspane_common::{Bounds, BridgeNotification, Point, WindowError, WindowRole};

use crate::backend::{WindowBackend, WindowSpec};

#[derive(Debug, Clone)]
pub(crate) struct FakeWindow {
    pub bounds: Bounds,
    pub opacity: Vec<f64>,
    pub visible: bool,
    pub focused: bool,
    pub minimized: bool,
    pub maximized: bool,
    pub spec: WindowSpec,
}

#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    pub windows: HashMap<WindowRole, FakeWindow>,
    pub destroyed: Vec<WindowRole>,
    pub cursor: Point,
    pub notifications: Vec<BridgeNotification>,
    pub set_bounds_calls: usize,
    pub fail_open: bool,
    /// `None` behaves like a 1.0 display.
    pub scale_factor: Option<f64>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self, role: WindowRole) -> &FakeWindow {
        &self.windows[&role]
    }

    pub fn window_mut(&mut self, role: WindowRole) -> &mut FakeWindow {
        self.windows.get_mut(&role).expect("window exists")
    }

    pub fn last_opacity(&self, role: WindowRole) -> Option<f64> {
        self.windows.get(&role)?.opacity.last().copied()
    }
}

impl WindowBackend for FakeBackend {
    fn open(&mut self, role: WindowRole, spec: &WindowSpec) -> Result<(), WindowError> {
        if self.fail_open {
            return Err(WindowError::Create("fake backend refused".into()));
        }
        self.windows.insert(
            role,
            FakeWindow {
                bounds: Bounds::new(100, 100, spec.width as i32, spec.height as i32),
                opacity: Vec::new(),
                visible: spec.visible,
                focused: false,
                minimized: false,
                maximized: false,
                spec: spec.clone(),
            },
        );
        Ok(())
    }

    fn exists(&self, role: WindowRole) -> bool {
        self.windows.contains_key(&role)
    }

    fn destroy(&mut self, role: WindowRole) {
        if self.windows.remove(&role).is_some() {
            self.destroyed.push(role);
        }
    }

    fn bounds(&self, role: WindowRole) -> Option<Bounds> {
        self.windows.get(&role).map(|w| w.bounds)
    }

    fn set_bounds(&mut self, role: WindowRole, bounds: Bounds) {
        if let Some(w) = self.windows.get_mut(&role) {
            w.bounds = bounds;
            self.set_bounds_calls += 1;
        }
    }

    fn set_opacity(&mut self, role: WindowRole, opacity: f64) {
        if let Some(w) = self.windows.get_mut(&role) {
            w.opacity.push(opacity);
        }
    }

    fn show(&mut self, role: WindowRole) {
        if let Some(w) = self.windows.get_mut(&role) {
            w.visible = true;
        }
    }

    fn focus(&mut self, role: WindowRole) {
        if let Some(w) = self.windows.get_mut(&role) {
            w.focused = true;
        }
    }

    fn minimize(&mut self, role: WindowRole) {
        if let Some(w) = self.windows.get_mut(&role) {
            w.minimized = true;
        }
    }

    fn is_minimized(&self, role: WindowRole) -> bool {
        self.windows.get(&role).is_some_and(|w| w.minimized)
    }

    fn is_maximized(&self, role: WindowRole) -> bool {
        self.windows.get(&role).is_some_and(|w| w.maximized)
    }

    fn set_maximized(&mut self, role: WindowRole, maximized: bool) {
        if let Some(w) = self.windows.get_mut(&role) {
            w.maximized = maximized;
        }
    }

    fn scale_factor(&self, role: WindowRole) -> f64 {
        if self.windows.contains_key(&role) {
            self.scale_factor.unwrap_or(1.0)
        } else {
            1.0
        }
    }

    fn cursor_position(&self) -> Point {
        self.cursor
    }

    fn notify(&mut self, notification: BridgeNotification) {
        self.notifications.push(notification);
    }
}
