use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("failed to create window: {0}")]
    Create(String),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Rejections at the UI bridge boundary.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("invalid bridge message: {0}")]
    InvalidMessage(String),

    #[error("bridge kind not allowed: {0}")]
    KindNotAllowed(String),

    #[error("invalid payload for {kind}: {reason}")]
    InvalidPayload { kind: String, reason: String },
}

#[derive(Debug, thiserror::Error)]
pub enum GlasspaneError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
