//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::GlasspaneConfig;
use glasspane_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlasspaneConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_window(&mut errors, config);
    sections::validate_splash(&mut errors, config);
    sections::validate_fade(&mut errors, config);
    sections::validate_resize(&mut errors, config);
    sections::validate_animation(&mut errors, config);
    sections::validate_dev(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
