pub mod bridge;
pub mod errors;
pub mod types;

pub use bridge::{BridgeCommand, BridgeNotification};
pub use errors::{BridgeError, ConfigError, GlasspaneError, WindowError};
pub use types::{Bounds, Point, ResizeDirection, WindowRole};

pub type Result<T> = std::result::Result<T, GlasspaneError>;
