//! GetMessageCountHandler - shows the total number of stored messages.

use std::sync::Arc;

use crate::ports::{ApiError, Document, MessageApi};

/// Handler bound to the "get message count" UI action.
///
/// Takes no input: fetches the count and writes it, formatted as a decimal
/// string, into the output element. A missing output element makes the
/// handler a silent no-op.
pub struct GetMessageCountHandler {
    api: Arc<dyn MessageApi>,
}

impl GetMessageCountHandler {
    pub fn new(api: Arc<dyn MessageApi>) -> Self {
        Self { api }
    }

    pub async fn handle(&self, page: &dyn Document, output_id: &str) -> Result<(), ApiError> {
        if !page.contains(output_id) {
            tracing::debug!(output_id, "output element not found, skipping");
            return Ok(());
        }

        let count = self.api.get_message_count().await?;
        page.set_text(output_id, &count.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document::InMemoryDocument;
    use crate::domain::MessageRecord;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockMessageApi {
        count: u64,
        calls: AtomicUsize,
    }

    impl MockMessageApi {
        fn returning(count: u64) -> Self {
            Self {
                count,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl MessageApi for MockMessageApi {
        async fn create_message(&self, _message: &str) -> Result<MessageRecord, ApiError> {
            unreachable!("count handler never creates")
        }

        async fn get_message(&self, _message_id: &str) -> Result<MessageRecord, ApiError> {
            unreachable!("count handler never fetches")
        }

        async fn get_message_count(&self) -> Result<u64, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.count)
        }
    }

    #[tokio::test]
    async fn writes_formatted_count_to_output_element() {
        let api = Arc::new(MockMessageApi::returning(4));
        let handler = GetMessageCountHandler::new(api.clone());
        let page = InMemoryDocument::new().with_element("testOutputElementId");

        let result = handler.handle(&page, "testOutputElementId").await;

        assert!(result.is_ok());
        assert_eq!(page.text_of("testOutputElementId").as_deref(), Some("4"));
        assert_eq!(api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_output_element_is_a_silent_no_op() {
        let api = Arc::new(MockMessageApi::returning(4));
        let handler = GetMessageCountHandler::new(api.clone());
        let page = InMemoryDocument::new();

        let result = handler.handle(&page, "noSuchElementId").await;

        assert!(result.is_ok());
        assert_eq!(api.calls.load(Ordering::SeqCst), 0);
    }
}
