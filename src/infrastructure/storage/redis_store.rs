//! Redis-backed key-value store.

use crate::domain::repositories::{KeyValueStore, StorageError, StorageResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, error, info};

/// Redis store keeping each key as a plain string.
///
/// Uses `ConnectionManager` for connection reuse and reconnects. Unlike a
/// cache, failures are propagated: the registry must not believe a write
/// succeeded when it did not.
pub struct RedisStore {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `key_prefix` - Namespace prepended to every key (e.g., `"darkshort:"`)
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> StorageResult<Self> {
        info!("Connecting to Redis storage");

        let client = Client::open(redis_url).map_err(|e| {
            StorageError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            StorageError::Connection(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StorageError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: key_prefix.into(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(&full_key).await.map_err(|e| {
            error!("Redis GET error for {}: {}", full_key, e);
            StorageError::Operation(e.to_string())
        })
    }

    async fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(&full_key, value).await.map_err(|e| {
            error!("Redis SET error for {}: {}", full_key, e);
            StorageError::Operation(e.to_string())
        })?;

        debug!("Redis SET: {} ({} bytes)", full_key, value.len());
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<bool> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        let deleted = conn.del::<_, i32>(&full_key).await.map_err(|e| {
            error!("Redis DEL error for {}: {}", full_key, e);
            StorageError::Operation(e.to_string())
        })?;

        Ok(deleted > 0)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
