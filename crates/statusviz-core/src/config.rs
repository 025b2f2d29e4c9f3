//! Configuration loading and typed config structures for the statusviz server.
//!
//! The canonical configuration lives in `statusviz.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure and provides a loader that reads the file. Every field has a
//! default, so the server runs with no config file at all.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::registry::StatusColorRegistry;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
///
/// Mirrors the structure of `statusviz.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VisualizerConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub http: HttpConfig,

    /// Static asset settings.
    #[serde(default)]
    pub static_files: StaticFilesConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Initial status-code palette.
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl VisualizerConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `STATUSVIZ_HOST` overrides `http.host`
    /// - `STATUSVIZ_PORT` overrides `http.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.http.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.http.apply_env_overrides();
        Ok(config)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl HttpConfig {
    /// Override listener settings with environment variables when set.
    ///
    /// This lets a container deployment set the listener without modifying
    /// the YAML config file. A `STATUSVIZ_PORT` value that does not parse
    /// as a port is ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("STATUSVIZ_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("STATUSVIZ_PORT")
            && let Ok(port) = val.parse::<u16>()
        {
            self.port = port;
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StaticFilesConfig {
    /// Directory served under `/static` (the visualizer front-end).
    #[serde(default = "default_static_dir")]
    pub dir: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn,
    /// error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Initial palette configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PaletteConfig {
    /// Status-code to color mapping seeded into the registry at startup.
    ///
    /// Values are normalized (trimmed, lowercased) the same way runtime
    /// configuration updates are.
    #[serde(default = "default_palette_seed")]
    pub seed: BTreeMap<u16, String>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            seed: default_palette_seed(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_palette_seed() -> BTreeMap<u16, String> {
    StatusColorRegistry::default_seed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = VisualizerConfig::default();
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.static_files.dir, PathBuf::from("static"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.palette.seed.len(), 4);
        assert_eq!(config.palette.seed.get(&200).map(String::as_str), Some("green"));
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
http:
  host: "127.0.0.1"
  port: 9000

static_files:
  dir: "assets"

logging:
  level: "debug"

palette:
  seed:
    200: "lime"
    418: "hotpink"
"#;

        let config = VisualizerConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_else(VisualizerConfig::default);

        assert_eq!(config.http.host, "127.0.0.1");
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.static_files.dir, PathBuf::from("assets"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.palette.seed.len(), 2);
        assert_eq!(config.palette.seed.get(&418).map(String::as_str), Some("hotpink"));
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "http:\n  port: 9090\n";
        let config = VisualizerConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.ok().unwrap_or_else(VisualizerConfig::default);

        // Port is overridden
        assert_eq!(config.http.port, 9090);
        // Everything else uses defaults
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.palette.seed.len(), 4);
    }

    #[test]
    fn parse_rejects_malformed_yaml() {
        let yaml = "http: [not, a, mapping";
        assert!(VisualizerConfig::parse(yaml).is_err());
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("statusviz.yaml");
        if path.exists() {
            let config = VisualizerConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
