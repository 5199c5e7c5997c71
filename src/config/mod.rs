//! Application configuration module
//!
//! Two sources feed configuration:
//!
//! - Server knobs are read from environment variables with the
//!   `MESSAGE_BOARD` prefix and `__` as the nesting separator, using the
//!   `config` and `dotenvy` crates.
//! - The deployment context is read once from the fixed `AWS_ACCOUNT`,
//!   `AWS_REGION`, and `AWS_STAGE` variables (an external contract shared
//!   with the deployment tooling) and threaded explicitly from there.
//!
//! # Example
//!
//! ```no_run
//! use message_board::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod client;
mod deployment;
mod error;
mod server;

pub use client::ClientConfig;
pub use deployment::{
    resource_name, stack_name, stage_from_env, DeploymentContext, DEFAULT_STAGE,
};
pub use error::{ConfigError, ValidationError};
pub use server::ServerConfig;

use serde::Deserialize;


/// Root application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts)
    pub server: ServerConfig,

    /// Deployment context (account, region, stage)
    pub deployment: DeploymentContext,
}

/// Environment-sourced sections of [`AppConfig`].
#[derive(Debug, Clone, Deserialize)]
struct Sections {
    #[serde(default)]
    server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads server settings from `MESSAGE_BOARD__SERVER__*` variables
    /// 3. Resolves the deployment context from `AWS_ACCOUNT`, `AWS_REGION`,
    ///    and `AWS_STAGE` (stage defaults to "dev")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `AWS_ACCOUNT` or `AWS_REGION` is missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let sections: Sections = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MESSAGE_BOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(Self {
            server: sections.server,
            deployment: DeploymentContext::from_env()?,
        })
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.deployment.validate()?;
        Ok(())
    }
}
