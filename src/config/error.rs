//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Default total max select must be positive")]
    InvalidDefaultTotal,

    #[error("Configured text must not be empty: {0}")]
    EmptyText(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid transport base URL")]
    InvalidBaseUrl,

    #[error("Invalid log level filter: {0}")]
    InvalidLogLevel(String),
}
