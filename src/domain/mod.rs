//! Domain types for the message board.

mod message;

pub use message::{normalize_message, MessageCount, MessageError, MessageRecord};
