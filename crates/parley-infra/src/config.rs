//! Configuration loader for Parley.
//!
//! Reads a TOML file into [`AppConfig`]. Unlike purely-optional settings
//! files, a missing or unparseable config is a startup error: deployments
//! are expected to provide one, and silently running with defaults would
//! hide a misconfigured credential or endpoint.

use std::path::Path;

use parley_types::config::AppConfig;
use parley_types::error::ConfigError;

/// Load configuration from `path`.
pub async fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| ConfigError::Read(format!("{}: {err}", path.display())))?;

    toml::from_str(&content).map_err(|err| ConfigError::Parse(format!("{}: {err}", path.display())))
}
