//! Configuration schema types for Glasspane.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod splash;
mod system;
mod timing;
mod window;

pub use splash::*;
pub use system::*;
pub use timing::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Glasspane.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlasspaneConfig {
    pub window: WindowConfig,
    pub splash: SplashConfig,
    pub fade: FadeConfig,
    pub resize: ResizeConfig,
    pub animation: AnimationConfig,
    pub dev: DevConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: GlasspaneConfig = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.splash.min_duration_ms, 800);
        assert_eq!(config.fade.close_fallback_ms, 500);
        assert!(config.dev.server_url.is_none());
    }

    #[test]
    fn serializes_back_to_toml() {
        let config = GlasspaneConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: GlasspaneConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.window.min_height, config.window.min_height);
        assert_eq!(parsed.logging.level, config.logging.level);
    }
}
