//! WebView layer for the Glasspane shell.
//!
//! Wraps the `wry` crate to provide:
//! - One managed WebView per native window (splash and main)
//! - The fixed UI bridge (JavaScript <-> Rust)
//! - A `glasspane://` custom protocol for bundled pages
//! - A navigation allowlist
//! - The page-side animation controller and its Rust model

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod ui;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, BRIDGE_INIT_SCRIPT};
pub use manager::{NavigationPolicy, WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry};
