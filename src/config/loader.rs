//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{AdvisorError, Result};

/// Environment variable prefix, e.g. `ADVISOR__SCORING__W_TREND=35`
pub const ENV_PREFIX: &str = "ADVISOR";

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with ADVISOR__)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    // Pick up a local .env before reading the environment
    dotenvy::dotenv().ok();

    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        } else {
            tracing::debug!(path, "Config file not found, using defaults");
        }
    }

    builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| AdvisorError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| AdvisorError::Configuration(e.to_string()))
}

/// Load configuration from an in-memory TOML document, ignoring the environment
pub fn load_from_str(toml: &str) -> Result<AppConfig> {
    let config = Config::builder()
        .add_source(File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    Ok(config.try_deserialize()?)
}
