//! CountMessagesHandler - query handler for the total message count.

use std::sync::Arc;

use crate::domain::{MessageCount, MessageError};
use crate::ports::MessageStore;

/// Handler for counting stored messages.
pub struct CountMessagesHandler {
    store: Arc<dyn MessageStore>,
}

impl CountMessagesHandler {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<MessageCount, MessageError> {
        Ok(MessageCount::new(self.store.count().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryMessageStore;
    use crate::domain::MessageRecord;

    #[tokio::test]
    async fn counts_stored_messages() {
        let store = Arc::new(InMemoryMessageStore::new("MessageTable-test"));
        for i in 0..4 {
            store
                .put(MessageRecord::new(format!("id-{i}"), "body"))
                .await
                .unwrap();
        }
        let handler = CountMessagesHandler::new(store);

        let count = handler.handle().await.unwrap();
        assert_eq!(count.message_count, 4);
    }

    #[tokio::test]
    async fn empty_store_counts_zero() {
        let store = Arc::new(InMemoryMessageStore::new("MessageTable-test"));
        let handler = CountMessagesHandler::new(store);

        let count = handler.handle().await.unwrap();
        assert_eq!(count.message_count, 0);
    }
}
