//! Message value types and normalization rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A stored message: an opaque body under a generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Generated unique message id.
    pub id: String,
    /// Message body, stored as-is after normalization.
    pub message: String,
}

impl MessageRecord {
    /// Creates a new record.
    pub fn new(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
        }
    }
}

/// Total number of stored messages.
///
/// Serializes as `{ "messageCount": n }`, the wire name the API contract
/// uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageCount {
    #[serde(rename = "messageCount")]
    pub message_count: u64,
}

impl MessageCount {
    pub fn new(message_count: u64) -> Self {
        Self { message_count }
    }
}

/// Strips one symmetric pair of surrounding double quotes from a raw
/// message body.
///
/// Clients that post the body as a JSON string arrive quoted; clients that
/// want a literal quote on both ends double them up.
pub fn normalize_message(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        raw[1..raw.len() - 1].to_string()
    } else {
        raw.to_string()
    }
}

/// Errors from message operations.
#[derive(Debug, Error)]
pub enum MessageError {
    #[error("message {0} not found")]
    NotFound(String),

    #[error("message store failure: {0}")]
    Backend(String),
}

impl MessageError {
    pub fn not_found(message_id: impl Into<String>) -> Self {
        Self::NotFound(message_id.into())
    }

    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_round_trips_through_json() {
        let record = MessageRecord::new("id-1", "hello");
        let json = serde_json::to_string(&record).unwrap();
        let back: MessageRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn count_uses_camel_case_wire_name() {
        let json = serde_json::to_string(&MessageCount::new(4)).unwrap();
        assert_eq!(json, r#"{"messageCount":4}"#);
    }

    #[test]
    fn normalize_strips_one_quote_pair() {
        assert_eq!(normalize_message("\"hello\""), "hello");
    }

    #[test]
    fn normalize_keeps_doubled_quotes() {
        // A client that wants literal quotes doubles them up.
        assert_eq!(normalize_message("\"\"hello\"\""), "\"hello\"");
    }

    #[test]
    fn normalize_leaves_bare_messages_alone() {
        assert_eq!(normalize_message("hello"), "hello");
    }

    #[test]
    fn normalize_leaves_single_sided_quotes_alone() {
        assert_eq!(normalize_message("\"hello"), "\"hello");
        assert_eq!(normalize_message("hello\""), "hello\"");
    }

    #[test]
    fn normalize_handles_short_inputs() {
        assert_eq!(normalize_message(""), "");
        assert_eq!(normalize_message("\""), "\"");
        assert_eq!(normalize_message("\"\""), "");
    }
}
