//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    assert!(validate(&GlasspaneConfig::default()).is_ok());
}

#[test]
fn catches_min_width_above_width() {
    let mut config = GlasspaneConfig::default();
    config.window.min_width = 900;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.min_width"));
}

#[test]
fn catches_min_height_too_small() {
    let mut config = GlasspaneConfig::default();
    config.window.min_height = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.min_height"));
}

#[test]
fn catches_zero_fade_step() {
    let mut config = GlasspaneConfig::default();
    config.fade.close_step = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("fade.close_step"));
}

#[test]
fn catches_step_above_one() {
    let mut config = GlasspaneConfig::default();
    config.splash.fade_in_step = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splash.fade_in_step"));
}

#[test]
fn catches_nan_step() {
    let mut config = GlasspaneConfig::default();
    config.splash.fade_out_step = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("splash.fade_out_step"));
}

#[test]
fn catches_zero_intervals() {
    let mut config = GlasspaneConfig::default();
    config.resize.tick_interval_ms = 0;
    config.fade.close_fallback_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("resize.tick_interval_ms"));
    assert!(err.contains("fade.close_fallback_ms"));
}

#[test]
fn catches_non_http_dev_server() {
    let mut config = GlasspaneConfig::default();
    config.dev.server_url = Some("file:///etc/passwd".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("dev.server_url"));
}

#[test]
fn accepts_http_dev_server() {
    let mut config = GlasspaneConfig::default();
    config.dev.server_url = Some("http://localhost:5173".into());
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = GlasspaneConfig::default();
    config.window.width = 10;
    config.splash.fade_in_interval_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("splash.fade_in_interval_ms"));
    assert!(err.contains("; "));
}

#[test]
fn catches_runaway_animation_delay() {
    let mut config = GlasspaneConfig::default();
    config.animation.settle_delay_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.settle_delay_ms"));
}
