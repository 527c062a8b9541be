//! Window chrome coordination for the Glasspane shell.
//!
//! Everything here is OS-independent: the [`ShellController`] owns the
//! splash handoff, the opacity ramps, the close fallback and the manual
//! resize loop as deadline-driven state, and talks to real windows only
//! through the [`WindowBackend`] trait. The app drives it with
//! [`ShellController::tick`] and sleeps until
//! [`ShellController::next_deadline`].

pub mod backend;
pub mod controller;
pub mod handoff;
pub mod ramp;
pub mod resize;
pub mod window_state;

pub use backend::{WindowBackend, WindowSpec};
pub use controller::ShellController;
pub use handoff::HandoffState;
pub use ramp::{OpacityRamp, RampPurpose};
pub use resize::{compute_bounds, MinSize, ResizeSession};
pub use window_state::WindowStateTracker;
