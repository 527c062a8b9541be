//! The UI bridge contract.
//!
//! The page may send exactly the commands listed in [`COMMAND_KINDS`] and
//! receives exactly the notifications listed in [`NOTIFICATION_KINDS`].
//! Both directions are fire-and-forget; nothing carries a reply.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::BridgeError;
use crate::types::ResizeDirection;

/// Wire names of every command the page is allowed to send.
pub const COMMAND_KINDS: &[&str] = &[
    "window-minimize",
    "window-maximize",
    "window-close",
    "app-ready",
    "start-resize",
    "stop-resize",
];

/// Wire names of every notification the shell sends to the page.
pub const NOTIFICATION_KINDS: &[&str] =
    &["window-restored", "window-maximized", "window-unmaximized"];

/// A command from the page to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeCommand {
    Minimize,
    /// Maximize, or unmaximize when already maximized.
    Maximize,
    Close,
    AppReady,
    StartResize(ResizeDirection),
    StopResize,
}

impl BridgeCommand {
    /// Decode a command from its wire kind and payload.
    ///
    /// Only `start-resize` takes a payload (the direction token); every
    /// other command ignores it.
    pub fn from_wire(kind: &str, payload: &Value) -> Result<Self, BridgeError> {
        match kind {
            "window-minimize" => Ok(Self::Minimize),
            "window-maximize" => Ok(Self::Maximize),
            "window-close" => Ok(Self::Close),
            "app-ready" => Ok(Self::AppReady),
            "stop-resize" => Ok(Self::StopResize),
            "start-resize" => {
                let token = payload
                    .as_str()
                    .ok_or_else(|| BridgeError::InvalidPayload {
                        kind: kind.to_string(),
                        reason: "expected direction string".into(),
                    })?;
                ResizeDirection::parse(token)
                    .map(Self::StartResize)
                    .ok_or_else(|| BridgeError::InvalidPayload {
                        kind: kind.to_string(),
                        reason: format!("unknown direction {token:?}"),
                    })
            }
            other => Err(BridgeError::KindNotAllowed(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Minimize => "window-minimize",
            Self::Maximize => "window-maximize",
            Self::Close => "window-close",
            Self::AppReady => "app-ready",
            Self::StartResize(_) => "start-resize",
            Self::StopResize => "stop-resize",
        }
    }
}

/// A notification from the shell to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeNotification {
    /// The main window came back from the minimized state.
    Restored,
    Maximized,
    Unmaximized,
}

impl BridgeNotification {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Restored => "window-restored",
            Self::Maximized => "window-maximized",
            Self::Unmaximized => "window-unmaximized",
        }
    }
}

/// Whether a wire kind is on the command allow-list.
pub fn is_command_allowed(kind: &str) -> bool {
    COMMAND_KINDS.contains(&kind)
}
