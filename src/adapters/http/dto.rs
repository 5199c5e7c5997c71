//! HTTP DTOs for message endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::{MessageCount, MessageRecord};

/// A message resource as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub message: String,
}

impl From<MessageRecord> for MessageResponse {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: record.id,
            message: record.message,
        }
    }
}

/// The message count as returned by `GET /messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCountResponse {
    #[serde(rename = "messageCount")]
    pub message_count: u64,
}

impl From<MessageCount> for MessageCountResponse {
    fn from(count: MessageCount) -> Self {
        Self {
            message_count: count.message_count,
        }
    }
}

/// Error payload for non-success responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_response_carries_record_fields() {
        let response = MessageResponse::from(MessageRecord::new("id-1", "hello"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], "id-1");
        assert_eq!(json["message"], "hello");
    }

    #[test]
    fn count_response_uses_camel_case_wire_name() {
        let response = MessageCountResponse::from(MessageCount::new(4));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"messageCount":4}"#);
    }
}
