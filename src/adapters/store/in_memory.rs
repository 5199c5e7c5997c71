//! In-memory message store.
//!
//! Stand-in for the managed key-value table the deployed system uses. The
//! store carries the deployment-derived table name so logs and diagnostics
//! show the same identifier the provisioned resource would have.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::{MessageError, MessageRecord};
use crate::ports::MessageStore;

/// Message store backed by a process-local map.
pub struct InMemoryMessageStore {
    table_name: String,
    records: RwLock<HashMap<String, MessageRecord>>,
}

impl InMemoryMessageStore {
    /// Creates an empty store under the given table name.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            records: RwLock::new(HashMap::new()),
        }
    }

    /// The deployment-derived table name this store stands in for.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn put(&self, record: MessageRecord) -> Result<(), MessageError> {
        self.records
            .write()
            .await
            .insert(record.id.clone(), record);
        Ok(())
    }

    async fn get(&self, message_id: &str) -> Result<Option<MessageRecord>, MessageError> {
        Ok(self.records.read().await.get(message_id).cloned())
    }

    async fn count(&self) -> Result<u64, MessageError> {
        Ok(self.records.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_returns_the_record() {
        let store = InMemoryMessageStore::new("MessageTable-acct-rgn-dev");
        let record = MessageRecord::new("id-1", "hello");

        store.put(record.clone()).await.unwrap();

        assert_eq!(store.get("id-1").await.unwrap(), Some(record));
        assert_eq!(store.table_name(), "MessageTable-acct-rgn-dev");
    }

    #[tokio::test]
    async fn get_of_unknown_id_is_none() {
        let store = InMemoryMessageStore::new("MessageTable-test");
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_replaces_existing_record() {
        let store = InMemoryMessageStore::new("MessageTable-test");
        store.put(MessageRecord::new("id-1", "first")).await.unwrap();
        store.put(MessageRecord::new("id-1", "second")).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(
            store.get("id-1").await.unwrap().unwrap().message,
            "second"
        );
    }
}
