//! Error types for the visualizer server binary.
//!
//! [`StartupError`] is the top-level error type that wraps the failure
//! modes of server startup, providing a single error type that `main`
//! can propagate with `?`.

/// Top-level error for the visualizer server binary.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: statusviz_core::ConfigError,
    },

    /// The HTTP server failed to start or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: statusviz_api::ServerError,
    },
}
