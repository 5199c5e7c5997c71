//! CreateMessageHandler - posts the input element's text as a new message
//! and shows the generated id.

use std::sync::Arc;

use crate::ports::{ApiError, Document, MessageApi};

/// Handler bound to the "create message" UI action.
///
/// Reads the input element's value, creates the message remotely, and
/// writes the generated id into the output element. If either element is
/// missing the handler completes without effect and without calling the
/// API.
pub struct CreateMessageHandler {
    api: Arc<dyn MessageApi>,
}

impl CreateMessageHandler {
    pub fn new(api: Arc<dyn MessageApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        page: &dyn Document,
        input_id: &str,
        output_id: &str,
    ) -> Result<(), ApiError> {
        // Resolve both elements before the remote call so a missing output
        // never leaves an orphaned message behind a dropped write.
        let Some(message) = page.input_value(input_id) else {
            tracing::debug!(input_id, "input element not found, skipping");
            return Ok(());
        };
        if !page.contains(output_id) {
            tracing::debug!(output_id, "output element not found, skipping");
            return Ok(());
        }

        let record = self.api.create_message(&message).await?;
        page.set_text(output_id, &record.id);
        Ok(())
    }
}
