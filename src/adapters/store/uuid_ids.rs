//! UUID-backed id generation.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Mints v4 UUIDs as message ids.
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
