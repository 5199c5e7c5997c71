//! Message store adapters.

mod in_memory;
mod uuid_ids;

pub use in_memory::InMemoryMessageStore;
pub use uuid_ids::UuidIdGenerator;
