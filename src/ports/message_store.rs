//! Message store port - persistence seam for the message service.

use async_trait::async_trait;

use crate::domain::{MessageError, MessageRecord};

/// Port for message persistence.
///
/// The deployed system backs this with a managed key-value table; tests and
/// local runs use the in-memory adapter.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Stores a record under its id, replacing any existing record.
    async fn put(&self, record: MessageRecord) -> Result<(), MessageError>;

    /// Looks up a record by id.
    async fn get(&self, message_id: &str) -> Result<Option<MessageRecord>, MessageError>;

    /// Returns the number of stored records.
    async fn count(&self) -> Result<u64, MessageError>;
}

/// Port for minting message ids.
///
/// Injected rather than called directly so tests can pin ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}
