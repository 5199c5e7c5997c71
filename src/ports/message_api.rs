//! Message API port - interface to the remote message service.
//!
//! UI handlers talk to the message API through this trait so they can be
//! exercised against mocks; the production implementation is the reqwest
//! client in `adapters::client`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::MessageRecord;

/// Port for the remote message API.
#[async_trait]
pub trait MessageApi: Send + Sync {
    /// Creates a message and returns the stored record with its generated id.
    async fn create_message(&self, message: &str) -> Result<MessageRecord, ApiError>;

    /// Fetches a message by id.
    async fn get_message(&self, message_id: &str) -> Result<MessageRecord, ApiError>;

    /// Returns the total number of stored messages.
    async fn get_message_count(&self) -> Result<u64, ApiError>;
}

/// Errors from remote message API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("message {0} not found")]
    NotFound(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(reason: impl Into<String>) -> Self {
        Self::Network(reason.into())
    }

    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode(reason.into())
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }
}
