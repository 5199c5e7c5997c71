//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Required environment variable {0} is not set")]
    MissingEnvVar(&'static str),

    #[error("Failed to read client configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse client configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Deployment account must not be empty")]
    EmptyAccount,

    #[error("Deployment region must not be empty")]
    EmptyRegion,

    #[error("Deployment stage must not be empty")]
    EmptyStage,

    #[error("API endpoint must be an http(s) URL")]
    InvalidApiEndpoint,
}
