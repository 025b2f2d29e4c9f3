//! Visualizer server binary for the statusviz backend.
//!
//! Entry point that wires together configuration, the event feed, and the
//! Axum HTTP server. All state is in-memory: every run starts from the
//! configured palette seed and an empty event queue.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `statusviz.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Seed the event feed and shared state
//! 4. Serve the HTTP API and static assets

mod error;

use std::path::Path;
use std::sync::Arc;

use statusviz_api::server::{ServerConfig, start_server};
use statusviz_api::state::AppState;
use statusviz_core::{EventFeed, VisualizerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::StartupError;

/// Application entry point for the visualizer server.
///
/// # Errors
///
/// Returns an error if configuration loading or the server itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. This happens before logging init so the
    //    configured level can seed the filter; the outcome is logged
    //    right after.
    let config_path = Path::new("statusviz.yaml");
    let config = load_config(config_path)?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("statusviz-server starting");
    info!(
        config_file = config_path.exists(),
        host = config.http.host,
        port = config.http.port,
        static_dir = %config.static_files.dir.display(),
        seed_codes = config.palette.seed.len(),
        "Configuration loaded"
    );

    // 3. Seed the event feed and shared state.
    let feed = EventFeed::with_palette(&config.palette.seed);
    let state = Arc::new(AppState::with_feed(feed));
    info!("Event feed seeded");

    // 4. Serve the HTTP API and static assets until terminated.
    let server_config = ServerConfig {
        host: config.http.host.clone(),
        port: config.http.port,
        static_dir: config.static_files.dir.clone(),
    };
    start_server(&server_config, state)
        .await
        .map_err(StartupError::from)?;

    info!("statusviz-server shutdown complete");

    Ok(())
}

/// Load the server configuration from `statusviz.yaml`.
///
/// Looks for the config file relative to the current working directory
/// and falls back to defaults (plus environment overrides) when it is
/// absent.
fn load_config(path: &Path) -> Result<VisualizerConfig, StartupError> {
    if path.exists() {
        let config = VisualizerConfig::from_file(path)?;
        Ok(config)
    } else {
        let mut config = VisualizerConfig::default();
        config.http.apply_env_overrides();
        Ok(config)
    }
}
