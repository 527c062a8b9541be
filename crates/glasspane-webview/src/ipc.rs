//! The UI bridge on the WebView side.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the page calls one of the functions on the frozen
//!   `window.glasspane` object, which posts
//!   `{"kind": ..., "payload": ...}` through `window.ipc.postMessage`.
//! - **Rust -> JS**: notifications are delivered by evaluating
//!   `window.glasspane._dispatch(kind, null)` in the page.

use glasspane_common::bridge::is_command_allowed;
use glasspane_common::{BridgeCommand, BridgeError, BridgeNotification};
use serde::{Deserialize, Serialize};

/// Raw bridge message as posted by the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::InvalidMessage(e.to_string()))
    }
}

/// Decode an IPC body into a bridge command, enforcing the allow-list.
pub fn parse_command(body: &str) -> Result<BridgeCommand, BridgeError> {
    let msg = IpcMessage::from_json(body)?;
    if !is_command_allowed(&msg.kind) {
        return Err(BridgeError::KindNotAllowed(msg.kind));
    }
    BridgeCommand::from_wire(&msg.kind, &msg.payload)
}

/// Script that delivers a notification to the page's registered callbacks.
pub fn js_dispatch_notification(notification: BridgeNotification) -> String {
    format!(
        "window.glasspane && window.glasspane._dispatch('{}', null);",
        notification.kind()
    )
}

/// Installs the bridge object. Injected into every WebView before any
/// page script runs; the page cannot replace or extend it.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    if (window.glasspane) {
        return;
    }
    var handlers = {};
    function send(kind, payload) {
        window.ipc.postMessage(JSON.stringify({
            kind: kind,
            payload: payload === undefined ? null : payload
        }));
    }
    function listen(kind) {
        return function(callback) {
            if (typeof callback !== 'function') {
                return;
            }
            (handlers[kind] = handlers[kind] || []).push(callback);
        };
    }
    var api = {
        minimize: function() { send('window-minimize'); },
        maximize: function() { send('window-maximize'); },
        close: function() { send('window-close'); },
        appReady: function() { send('app-ready'); },
        startResize: function(direction) { send('start-resize', String(direction)); },
        stopResize: function() { send('stop-resize'); },
        onRestore: listen('window-restored'),
        onMaximize: listen('window-maximized'),
        onUnmaximize: listen('window-unmaximized'),
        _dispatch: function(kind, payload) {
            var list = handlers[kind] || [];
            for (var i = 0; i < list.length; i++) {
                list[i](payload);
            }
        }
    };
    Object.defineProperty(window, 'glasspane', {
        value: Object.freeze(api),
        writable: false,
        configurable: false
    });
})();
"#;
