//! FetchMessageHandler - query handler for retrieving a message by id.

use std::sync::Arc;

use crate::domain::{MessageError, MessageRecord};
use crate::ports::MessageStore;

/// Query to fetch a message by id.
#[derive(Debug, Clone)]
pub struct FetchMessageQuery {
    pub message_id: String,
}

/// Handler for retrieving stored messages.
pub struct FetchMessageHandler {
    store: Arc<dyn MessageStore>,
}

impl FetchMessageHandler {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: FetchMessageQuery) -> Result<MessageRecord, MessageError> {
        self.store
            .get(&query.message_id)
            .await?
            .ok_or_else(|| MessageError::not_found(query.message_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryMessageStore;

    #[tokio::test]
    async fn returns_stored_record() {
        let store = Arc::new(InMemoryMessageStore::new("MessageTable-test"));
        store
            .put(MessageRecord::new("testMessageId", "testMessageMessage"))
            .await
            .unwrap();
        let handler = FetchMessageHandler::new(store);

        let record = handler
            .handle(FetchMessageQuery {
                message_id: "testMessageId".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(record.message, "testMessageMessage");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = Arc::new(InMemoryMessageStore::new("MessageTable-test"));
        let handler = FetchMessageHandler::new(store);

        let result = handler
            .handle(FetchMessageQuery {
                message_id: "noSuchId".to_string(),
            })
            .await;

        assert!(matches!(result, Err(MessageError::NotFound(_))));
    }
}
