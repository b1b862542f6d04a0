//! Loading a [`SiteConfig`] from disk.

use docsite_core::{SiteConfig, SiteError};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration rejected: {0}")]
    Invalid(String),
}

impl From<SiteError> for ConfigError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::Json(e) => ConfigError::Json(e),
            other => ConfigError::Invalid(other.to_string()),
        }
    }
}

/// Reads and validates a JSON site configuration.
pub fn load_config(path: impl AsRef<Path>) -> Result<SiteConfig, ConfigError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let config = SiteConfig::from_json(&json)?;
    log::info!(
        "loaded site configuration from {} ({} navigation entries)",
        path.display(),
        config.nav_bar.entries.len()
    );
    Ok(config)
}
