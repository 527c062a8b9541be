//! The page-side chrome controller.
//!
//! [`AnimationMachine`] holds the transition table: events in, timed
//! effects out. [`generate_ui_script`] renders each page handler from
//! that table, so the injected JavaScript and the machine cannot drift.

mod machine;
mod phase;
mod script;

pub use machine::{AnimationMachine, Deferred, UiEffect, UiEvent};
pub use phase::AnimationPhase;
pub use script::generate_ui_script;
