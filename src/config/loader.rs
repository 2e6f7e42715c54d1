use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use eyre::{Context, Result};

use crate::config::models::ServerConfig;

/// Prefix for environment overrides, e.g. `SHOWCASE__LISTEN_ADDR` or
/// `SHOWCASE__LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "SHOWCASE";

/// Load configuration from a file using the config crate
/// Supports multiple formats: YAML, JSON, TOML, INI
pub async fn load_config(config_path: &str) -> Result<ServerConfig> {
    load_config_sync(config_path)
}

/// Load configuration synchronously
pub fn load_config_sync(config_path: &str) -> Result<ServerConfig> {
    build_config(Some(Path::new(config_path)))
}

/// Like [`load_config`], but a missing file falls back to built-in defaults
/// (environment overrides still apply).
pub async fn load_or_default(config_path: &str) -> Result<ServerConfig> {
    let path = Path::new(config_path);
    if path.exists() {
        build_config(Some(path))
    } else {
        tracing::info!(
            "Configuration file {} not found, using defaults",
            path.display()
        );
        build_config(None)
    }
}

fn build_config(config_path: Option<&Path>) -> Result<ServerConfig> {
    let mut builder = Config::builder();

    if let Some(config_path) = config_path {
        // Determine file format based on extension
        let format = match config_path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            Some("json") => FileFormat::Json,
            Some("ini") => FileFormat::Ini,
            _ => FileFormat::Toml,
        };

        builder = builder.add_source(File::new(
            config_path
                .to_str()
                .ok_or_else(|| eyre::eyre!("Invalid UTF-8 path: {}", config_path.display()))?,
            format,
        ));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()
        .with_context(|| match config_path {
            Some(path) => format!("Failed to build config from {}", path.display()),
            None => "Failed to build config from environment".to_string(),
        })?;

    let server_config: ServerConfig = settings
        .try_deserialize()
        .wrap_err("Failed to deserialize server configuration")?;

    Ok(server_config)
}
