//! Error types for teagap-core

use teagap_io::IoError;
use teagap_stats::StatsError;
use thiserror::Error;

/// Result type alias for teagap operations
pub type Result<T> = std::result::Result<T, TeagapError>;

/// Main error type for teagap operations
#[derive(Error, Debug)]
pub enum TeagapError {
    /// A source table could not be loaded
    #[error("Failed to load table: {0}")]
    Load(#[from] IoError),

    /// The regression could not be estimated
    #[error("Regression failed: {0}")]
    Regression(#[from] StatsError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Report output failed
    #[error("Report output failed: {0}")]
    Report(#[from] csv::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required value is empty
    #[error("Missing value: {0}")]
    Missing(String),

    /// Values that contradict each other
    #[error("Conflicting values: {0}")]
    Conflict(String),

    /// TOML could not be parsed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML could not be written
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON could not be parsed or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
