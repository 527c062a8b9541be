//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Glasspane Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Glasspane"
# width = 800
# height = 600
# min_width = 400        # also the floor for edge resizing
# min_height = 500

[splash]
# enabled = true
# width = 320
# height = 240
# min_duration_ms = 800
# fade_in_step = 0.05    # 0.0-1.0, opacity per tick
# fade_in_interval_ms = 16
# fade_out_step = 0.1
# fade_out_interval_ms = 16

[fade]
# main_fade_in_step = 0.05
# main_fade_in_interval_ms = 16
# close_step = 0.2
# close_interval_ms = 10
# close_fallback_ms = 500   # window closes by then even if the fade stalls

[resize]
# tick_interval_ms = 16  # ~60 Hz cursor polling during edge drags

[animation]
# exit_delay_ms = 200     # fade-out time before minimize/close
# maximize_delay_ms = 200
# settle_delay_ms = 100   # wait after maximize/unmaximize before fading back in

[dev]
# server_url = "http://localhost:5173"

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
}
