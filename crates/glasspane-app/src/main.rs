mod app_state;
mod cli;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use glasspane_config::GlasspaneConfig;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Glasspane crashed ---");
        eprintln!("Run with --log-level debug and include the log when reporting.");
        eprintln!("-------------------------\n");

        default_hook(info);
    }));
}

/// Load environment variables from a .env file (KEY=VALUE lines).
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Workspace root, two levels up from crates/glasspane-app/
        manifest_dir.join("..").join("..").join(".env"),
        std::path::PathBuf::from(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn main() {
    load_dotenv();
    install_panic_hook();

    let args = cli::parse();

    // Config is read before logging so its level can seed the filter;
    // the outcome is logged once the subscriber is up.
    let loaded = match &args.config {
        Some(path) => glasspane_config::load_config_from(path),
        None => glasspane_config::load_config(),
    };
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level.as_directive())
        .unwrap_or("info");

    let log_directive = cli::log_directive(args.log_level.as_deref(), config_level);
    let directive = log_directive
        .parse::<Directive>()
        .or_else(|_| "glasspane=info".parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Glasspane v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        GlasspaneConfig::default()
    });

    if args.no_splash {
        config.splash.enabled = false;
    }
    let env_dev_url = std::env::var(cli::DEV_SERVER_ENV).ok();
    config.dev.server_url = cli::resolve_dev_url(
        args.dev_url.as_deref(),
        env_dev_url.as_deref(),
        config.dev.server_url.as_deref(),
    );
    if let Some(url) = &config.dev.server_url {
        tracing::info!(url = %url, "Loading main window from dev server");
    }
    tracing::debug!(config = %glasspane_config::config_to_json(&config), "Effective config");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::GlasspaneApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
