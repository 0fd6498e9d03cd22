//! Storage trait for the key-value medium the registry persists into.

use async_trait::async_trait;

/// Errors raised by a key-value store backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage connection error: {0}")]
    Connection(String),

    #[error("Storage operation error: {0}")]
    Operation(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A string-to-string key-value store.
///
/// Plays the part `localStorage` plays in a browser: the registry keeps one
/// entry in it and rewrites that entry wholesale after every mutation.
/// Implementations must be thread-safe.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::MemoryStore`] - Process-local map
/// - [`crate::infrastructure::storage::FileStore`] - One file per key in a directory
/// - [`crate::infrastructure::storage::RedisStore`] - Redis strings under a key prefix
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` if the key exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be read.
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be written.
    async fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Removes `key`. Returns `Ok(true)` if it existed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be written.
    async fn remove(&self, key: &str) -> StorageResult<bool>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
