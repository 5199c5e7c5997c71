//! Client runtime configuration
//!
//! The website cannot know the API endpoint at build time: the deployment
//! writes a `config.json` next to the static assets once the API URL exists.
//! This module reads that document.

use serde::Deserialize;
use std::path::Path;

use super::error::{ConfigError, ValidationError};

/// Runtime configuration for the message API client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the message API.
    #[serde(rename = "apiEndpoint")]
    pub api_endpoint: String,
}

impl ClientConfig {
    /// Parses a configuration document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration document from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Validate client configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.api_endpoint.starts_with("https://")
            && !self.api_endpoint.starts_with("http://")
        {
            return Err(ValidationError::InvalidApiEndpoint);
        }
        Ok(())
    }
}
