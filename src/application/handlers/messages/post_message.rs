//! PostMessageHandler - command handler for storing a new message.

use std::sync::Arc;

use crate::domain::{normalize_message, MessageError, MessageRecord};
use crate::ports::{IdGenerator, MessageStore};

/// Command to store a new message. Carries the raw request body.
#[derive(Debug, Clone)]
pub struct PostMessageCommand {
    pub message: String,
}

/// Handler for storing new messages.
pub struct PostMessageHandler {
    store: Arc<dyn MessageStore>,
    ids: Arc<dyn IdGenerator>,
}

impl PostMessageHandler {
    pub fn new(store: Arc<dyn MessageStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub async fn handle(&self, command: PostMessageCommand) -> Result<MessageRecord, MessageError> {
        let record = MessageRecord::new(self.ids.generate(), normalize_message(&command.message));
        self.store.put(record.clone()).await?;

        tracing::debug!(message_id = %record.id, "message stored");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::store::InMemoryMessageStore;

    struct FixedIdGenerator;

    impl IdGenerator for FixedIdGenerator {
        fn generate(&self) -> String {
            "testMessageId".to_string()
        }
    }

    fn handler_over(store: Arc<InMemoryMessageStore>) -> PostMessageHandler {
        PostMessageHandler::new(store, Arc::new(FixedIdGenerator))
    }

    #[tokio::test]
    async fn stores_message_under_generated_id() {
        let store = Arc::new(InMemoryMessageStore::new("MessageTable-test"));
        let handler = handler_over(store.clone());

        let record = handler
            .handle(PostMessageCommand {
                message: "hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(record.id, "testMessageId");
        assert_eq!(record.message, "hello");
        assert_eq!(
            store.get("testMessageId").await.unwrap(),
            Some(record)
        );
    }

    #[tokio::test]
    async fn normalizes_quoted_bodies() {
        let store = Arc::new(InMemoryMessageStore::new("MessageTable-test"));
        let handler = handler_over(store);

        let record = handler
            .handle(PostMessageCommand {
                message: "\"hello\"".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(record.message, "hello");
    }

    #[tokio::test]
    async fn empty_messages_are_stored_as_is() {
        let store = Arc::new(InMemoryMessageStore::new("MessageTable-test"));
        let handler = handler_over(store.clone());

        let record = handler
            .handle(PostMessageCommand {
                message: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(record.message, "");
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
