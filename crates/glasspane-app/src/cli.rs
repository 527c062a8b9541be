use std::path::PathBuf;

use clap::Parser;

/// Environment variable naming a dev server for the main window.
pub const DEV_SERVER_ENV: &str = "GLASSPANE_DEV_SERVER_URL";

/// Glasspane: a frameless, transparent desktop shell.
#[derive(Parser, Debug)]
#[command(name = "glasspane", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Load the main window from this dev server URL.
    #[arg(long)]
    pub dev_url: Option<String>,

    /// Skip the splash window.
    #[arg(long)]
    pub no_splash: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Pick the dev server URL: CLI flag, then environment, then config.
/// Blank values count as unset.
pub fn resolve_dev_url(
    cli: Option<&str>,
    env: Option<&str>,
    config: Option<&str>,
) -> Option<String> {
    [cli, env, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty())
        .map(str::to_string)
}

/// `tracing` filter directive for our crates.
pub fn log_directive(cli: Option<&str>, config_level: &str) -> String {
    match cli {
        Some(level) if level.contains('=') => level.to_string(),
        Some(level) => format!("glasspane={level}"),
        None => format!("glasspane={config_level}"),
    }
}
