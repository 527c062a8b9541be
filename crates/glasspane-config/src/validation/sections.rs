//! Per-section validators.

use crate::schema::GlasspaneConfig;

use super::helpers::{validate_range, validate_step};

/// Longest interval any timer may be configured with.
const MAX_INTERVAL_MS: u64 = 1000;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &GlasspaneConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width.into(), 100, 16384);
    validate_range(errors, "window.height", w.height.into(), 100, 16384);
    validate_range(
        errors,
        "window.min_width",
        w.min_width.into(),
        100,
        w.width.max(100).into(),
    );
    validate_range(
        errors,
        "window.min_height",
        w.min_height.into(),
        100,
        w.height.max(100).into(),
    );
}

pub(crate) fn validate_splash(errors: &mut Vec<String>, config: &GlasspaneConfig) {
    let s = &config.splash;
    validate_range(errors, "splash.width", s.width.into(), 50, 4096);
    validate_range(errors, "splash.height", s.height.into(), 50, 4096);
    validate_range(errors, "splash.min_duration_ms", s.min_duration_ms, 0, 10_000);
    validate_step(errors, "splash.fade_in_step", s.fade_in_step);
    validate_step(errors, "splash.fade_out_step", s.fade_out_step);
    validate_range(
        errors,
        "splash.fade_in_interval_ms",
        s.fade_in_interval_ms,
        1,
        MAX_INTERVAL_MS,
    );
    validate_range(
        errors,
        "splash.fade_out_interval_ms",
        s.fade_out_interval_ms,
        1,
        MAX_INTERVAL_MS,
    );
}

pub(crate) fn validate_fade(errors: &mut Vec<String>, config: &GlasspaneConfig) {
    let f = &config.fade;
    validate_step(errors, "fade.main_fade_in_step", f.main_fade_in_step);
    validate_step(errors, "fade.close_step", f.close_step);
    validate_range(
        errors,
        "fade.main_fade_in_interval_ms",
        f.main_fade_in_interval_ms,
        1,
        MAX_INTERVAL_MS,
    );
    validate_range(
        errors,
        "fade.close_interval_ms",
        f.close_interval_ms,
        1,
        MAX_INTERVAL_MS,
    );
    validate_range(errors, "fade.close_fallback_ms", f.close_fallback_ms, 1, 5000);
}

pub(crate) fn validate_resize(errors: &mut Vec<String>, config: &GlasspaneConfig) {
    validate_range(
        errors,
        "resize.tick_interval_ms",
        config.resize.tick_interval_ms,
        1,
        100,
    );
}

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &GlasspaneConfig) {
    let a = &config.animation;
    validate_range(errors, "animation.exit_delay_ms", a.exit_delay_ms, 0, 2000);
    validate_range(errors, "animation.maximize_delay_ms", a.maximize_delay_ms, 0, 2000);
    validate_range(errors, "animation.settle_delay_ms", a.settle_delay_ms, 0, 2000);
}

pub(crate) fn validate_dev(errors: &mut Vec<String>, config: &GlasspaneConfig) {
    if let Some(url) = &config.dev.server_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("dev.server_url = {url:?} must be an http(s) URL"));
        }
    }
}
