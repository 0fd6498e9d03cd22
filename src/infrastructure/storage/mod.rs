//! Key-value storage backends for the registry blob.
//!
//! Provides three [`KeyValueStore`](crate::domain::repositories::KeyValueStore)
//! implementations:
//! - [`MemoryStore`] - Process-local map for tests and throwaway runs
//! - [`FileStore`] - One file per key, atomically replaced on write
//! - [`RedisStore`] - Redis strings under a namespace prefix

mod file_store;
mod memory_store;
mod redis_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;
