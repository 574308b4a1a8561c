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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Period out of range: {0}")]
    InvalidPeriod(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(&'static str),

    #[error("Invalid sign-in URL: {0}")]
    InvalidUrl(&'static str),

    #[error("Template prefix cannot be empty")]
    EmptyTemplatePrefix,

    #[error("Unknown log level '{0}'")]
    InvalidLogLevel(String),
}
