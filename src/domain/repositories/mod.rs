//! Storage trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::storage`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod kv_store;

pub use kv_store::{KeyValueStore, StorageError, StorageResult};

#[cfg(test)]
pub use kv_store::MockKeyValueStore;
