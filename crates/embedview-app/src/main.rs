mod chrome;
mod cli;
mod delegate;
mod host;

use std::process::ExitCode;

use embedview_common::ConfigError;
use embedview_config::schema::LogLevel;
use embedview_config::{ConfigFile, SessionConfig};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use crate::delegate::SessionEnd;
use crate::host::{EmbedviewApp, UserEvent};

/// Build the log filter: `--log-level` first, then `RUST_LOG`, then the
/// configured level.
fn env_filter(cli_directive: Option<&str>, configured: LogLevel) -> EnvFilter {
    if let Some(directive) = cli_directive {
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid --log-level '{directive}': {e}"),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured.directive()))
}

/// An explicit `--config` file must exist; the platform default is created
/// from the template on first run.
fn load_session_config(path: Option<&std::path::Path>) -> Result<SessionConfig, ConfigError> {
    match path {
        Some(path) => ConfigFile::at(path).read(),
        None => ConfigFile::platform_default()?.read_or_create(),
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = load_session_config(args.config.as_deref());
    let level = loaded
        .as_ref()
        .map(|config| config.logging.level)
        .unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(args.log_level.as_deref(), level))
        .init();

    tracing::info!("Embedview v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SessionConfig::default()
    });
    args.apply_to(&mut config);

    if let Err(e) = embedview_config::validation::validate(&config) {
        tracing::error!("Invalid session configuration: {e}");
        return ExitCode::FAILURE;
    }
    if config.session.url.trim().is_empty() {
        tracing::error!("No page to open: pass --url or set `url` in the [session] config section");
        return ExitCode::FAILURE;
    }
    tracing::info!(
        url = %config.session.url,
        query = config.session.query.len(),
        headers = config.session.headers.len(),
        "Session configured"
    );

    let event_loop = match EventLoop::<UserEvent>::with_user_event().build() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = EmbedviewApp::new(config, event_loop.create_proxy());

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");

    match app.outcome() {
        Some(SessionEnd::Failed) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
