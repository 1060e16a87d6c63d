//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Log level filter must not be empty")]
    EmptyLogLevel,

    #[error("Default score {0} is outside 0..=10")]
    InvalidDefaultScore(u8),

    #[error("max_sessions must be greater than zero")]
    InvalidMaxSessions,

    #[error("Action tables path must not be empty when set")]
    EmptyActionTablesPath,
}
