//! Error types for the application
//!
//! The scoring engine itself never fails. These errors only come from the
//! boundary layers: loading configuration, reading scenario files and
//! parsing user-supplied names.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using our AdvisorError
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Main error type for the advisor boundary
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Scenario file could not be read
    #[error("Failed to read input file {path}: {source}")]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Trend name not one of up / sideways / down
    #[error("Invalid trend: {0} (expected up, sideways or down)")]
    InvalidTrend(String),

    /// Preset name not in the built-in catalog
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

impl From<config::ConfigError> for AdvisorError {
    fn from(err: config::ConfigError) -> Self {
        AdvisorError::Configuration(err.to_string())
    }
}
