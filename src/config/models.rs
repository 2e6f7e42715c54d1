//! Configuration data structures.
//!
//! These types map directly to TOML (also JSON / YAML) configuration files. Every section
//! has defaults, so an empty file, or no file at all, yields a runnable server.
use serde::{Deserialize, Serialize};

fn default_listen_addr() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_shutdown_timeout_secs() -> u64 {
    30
}

/// Log output format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `showcase_api=debug,tower_http=info`.
    /// `RUST_LOG` wins when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Values echoed by `/api/v1/hello` and `/api/v1/stats`.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub framework: String,
    pub framework_version: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            framework: "Axum".to_string(),
            framework_version: "0.8".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub showcase: ShowcaseConfig,
    /// How long to wait for open connections to drain after a shutdown signal.
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
}

impl ServerConfig {
    /// Create a new server configuration builder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            logging: LoggingConfig::default(),
            showcase: ShowcaseConfig::default(),
            shutdown_timeout_secs: default_shutdown_timeout_secs(),
        }
    }
}

/// Builder for ServerConfig, mostly used by tests and embedders.
#[derive(Default)]
pub struct ServerConfigBuilder {
    config: ServerConfig,
}

impl ServerConfigBuilder {
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    pub fn framework(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.config.showcase = ShowcaseConfig {
            framework: name.into(),
            framework_version: version.into(),
        };
        self
    }

    pub fn shutdown_timeout_secs(mut self, secs: u64) -> Self {
        self.config.shutdown_timeout_secs = secs;
        self
    }

    pub fn build(self) -> ServerConfig {
        self.config
    }
}
