//! HTTP message API client.
//!
//! Implements the [`MessageApi`] port over the message service's REST
//! routes. The endpoint comes from the deploy-time client configuration;
//! the message body is posted as a JSON string, which the server unwraps.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

use crate::config::ClientConfig;
use crate::domain::{MessageCount, MessageRecord};
use crate::ports::{ApiError, MessageApi};

/// Configuration for the HTTP message API client.
#[derive(Debug, Clone)]
pub struct MessageApiConfig {
    /// Base URL of the message API (e.g., `https://api.example.com/prod`).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl MessageApiConfig {
    /// Creates a configuration with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(5),
        }
    }

    /// Builds a configuration from the deploy-time client config document.
    pub fn from_client_config(config: &ClientConfig) -> Self {
        Self::new(config.api_endpoint.clone())
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Message API implementation over HTTP.
pub struct HttpMessageApi {
    config: MessageApiConfig,
    client: Client,
}

impl HttpMessageApi {
    /// Creates a new client with the given configuration.
    pub fn new(config: MessageApiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the messages collection URL.
    fn messages_url(&self) -> String {
        format!("{}/messages", self.config.base_url.trim_end_matches('/'))
    }

    /// Builds the URL for a single message.
    fn message_url(&self, message_id: &str) -> String {
        format!("{}/{}", self.messages_url(), message_id)
    }

    /// Maps transport-level failures to typed errors.
    fn map_request_error(&self, error: reqwest::Error) -> ApiError {
        if error.is_timeout() {
            ApiError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if error.is_connect() {
            ApiError::network(format!("Connection failed: {}", error))
        } else {
            ApiError::network(error.to_string())
        }
    }

    /// Turns non-success statuses into typed errors.
    async fn expect_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ApiError::status(status.as_u16(), body))
    }
}

#[async_trait]
impl MessageApi for HttpMessageApi {
    async fn create_message(&self, message: &str) -> Result<MessageRecord, ApiError> {
        let response = self
            .client
            .post(self.messages_url())
            .json(&message)
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        Self::expect_success(response)
            .await?
            .json::<MessageRecord>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    async fn get_message(&self, message_id: &str) -> Result<MessageRecord, ApiError> {
        let response = self
            .client
            .get(self.message_url(message_id))
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(message_id.to_string()));
        }

        Self::expect_success(response)
            .await?
            .json::<MessageRecord>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))
    }

    async fn get_message_count(&self) -> Result<u64, ApiError> {
        let response = self
            .client
            .get(self.messages_url())
            .send()
            .await
            .map_err(|e| self.map_request_error(e))?;

        let count = Self::expect_success(response)
            .await?
            .json::<MessageCount>()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(count.message_count)
    }
}
