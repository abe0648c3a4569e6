//! Record store abstraction and in-memory implementation.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryRecordStore;
pub use r#trait::RecordStore;
