//! GetMessageHandler - fetches the message whose id is in the input element
//! and shows its body.

use std::sync::Arc;

use crate::ports::{ApiError, Document, MessageApi};

/// Handler bound to the "get message" UI action.
///
/// Reads a message id from the input element, fetches the record, and
/// writes the message body into the output element. Missing elements make
/// the handler a silent no-op.
pub struct GetMessageHandler {
    api: Arc<dyn MessageApi>,
}

impl GetMessageHandler {
    pub fn new(api: Arc<dyn MessageApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        page: &dyn Document,
        input_id: &str,
        output_id: &str,
    ) -> Result<(), ApiError> {
        let Some(message_id) = page.input_value(input_id) else {
            tracing::debug!(input_id, "input element not found, skipping");
            return Ok(());
        };
        if !page.contains(output_id) {
            tracing::debug!(output_id, "output element not found, skipping");
            return Ok(());
        }

        let record = self.api.get_message(&message_id).await?;
        page.set_text(output_id, &record.message);
        Ok(())
    }
}
