//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the native windows, their webviews and the shell
//! controller that coordinates them.

mod backend;
mod bounds;
mod core;
mod cursor;
mod event_handler;
mod init;
mod polling;
mod shutdown;

pub use core::GlasspaneApp;
