//! WebView event types.

use glasspane_common::WindowRole;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView, tagged with the window that hosts it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    PageLoad {
        role: WindowRole,
        state: PageLoadState,
        url: String,
    },
    /// Raw bridge message from the page; already known to be valid JSON.
    IpcMessage { role: WindowRole, body: String },
    /// An allowed navigation started.
    NavigationRequested { role: WindowRole, url: String },
    Closed { role: WindowRole },
}

impl WebViewEvent {
    pub fn role(&self) -> WindowRole {
        match self {
            Self::PageLoad { role, .. }
            | Self::IpcMessage { role, .. }
            | Self::NavigationRequested { role, .. }
            | Self::Closed { role } => *role,
        }
    }
}
