//! Ports - trait seams between the application core and its adapters.

mod document;
mod message_api;
mod message_store;

pub use document::Document;
pub use message_api::{ApiError, MessageApi};
pub use message_store::{IdGenerator, MessageStore};
