//! Error types for config loading.

use thiserror::Error;

/// Errors returned while loading config.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading a config file failed.
    #[error("failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing a config file failed.
    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] json5::Error),
    /// Generic validation failure.
    #[error("invalid config: {0}")]
    Invalid(String),
}
