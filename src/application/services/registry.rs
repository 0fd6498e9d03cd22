//! Short-code registry: creation, lookup and click counting of short links.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::domain::entities::Record;
use crate::domain::repositories::{KeyValueStore, StorageError};
use crate::domain::snapshot;
use crate::utils::code_generator::{generate_code, non_empty_code};

/// Attempts at drawing a free generated code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Errors raised by registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Short code '{0}' is already taken")]
    CodeTaken(String),

    #[error("No free short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    #[error("Stored registry is corrupt: {0}")]
    CorruptState(#[source] serde_json::Error),

    #[error("Failed to encode registry: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Owns the ordered sequence of [`Record`]s and its persistence.
///
/// The whole sequence is stored as one blob under `storage_key` and rewritten
/// after every mutation. It is loaded lazily on first use and kept in memory
/// for [`create`](Self::create); [`resolve`](Self::resolve) and
/// [`list`](Self::list) always re-read the store.
///
/// Every operation holds an async mutex for its full read-modify-write, so
/// operations on one registry never interleave. Separate processes sharing a
/// store are not coordinated: the last writer wins.
pub struct Registry {
    store: Arc<dyn KeyValueStore>,
    storage_key: String,
    origin: String,
    records: Mutex<Option<Vec<Record>>>,
}

impl Registry {
    /// Creates a registry persisting into `store` under `storage_key`.
    ///
    /// `origin` is the public origin short URLs are built from, for example
    /// `https://s.example.com`.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
        origin: impl Into<String>,
    ) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            origin: origin.into().trim_end_matches('/').to_string(),
            records: Mutex::new(None),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Creates a short link and persists the registry.
    ///
    /// `original` is stored verbatim; callers validate it beforehand. A
    /// non-empty `custom_code` is used as is, otherwise a random 6-character
    /// base-36 code is drawn. The record expires `minutes` after now.
    ///
    /// Returns a snapshot of the created record.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::CodeTaken`] if `custom_code` is already in use
    /// - [`RegistryError::CodeSpaceExhausted`] if no free code was drawn
    /// - [`RegistryError::Storage`] if the store cannot be read or written
    pub async fn create(
        &self,
        original: String,
        minutes: i64,
        custom_code: Option<String>,
    ) -> Result<Record, RegistryError> {
        let mut cached = self.records.lock().await;
        if cached.is_none() {
            *cached = Some(self.load().await?);
        }
        let records = cached.get_or_insert_with(Vec::new);

        let code = match non_empty_code(custom_code) {
            Some(code) => {
                if records.iter().any(|r| r.code == code) {
                    return Err(RegistryError::CodeTaken(code));
                }
                code
            }
            None => generate_unique_code(records)?,
        };

        let record = Record::new(original, code, &self.origin, minutes, Utc::now());
        records.push(record.clone());

        if let Err(e) = self.persist(records).await {
            records.pop();
            return Err(e);
        }

        info!("Created short link {} -> {}", record.code, record.original);
        Ok(record)
    }

    /// Resolves `code` to its original URL and counts the click.
    ///
    /// Reads the registry fresh from the store, takes the first record with a
    /// matching code, increments its `clicks` and persists the whole sequence.
    /// Expiry is not checked.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on a match
    /// - `Ok(None)` if no record has this code; nothing is written
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if the store cannot be read or written.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>, RegistryError> {
        let mut cached = self.records.lock().await;
        let mut records = self.load().await?;

        let Some(record) = records.iter_mut().find(|r| r.code == code) else {
            debug!("No short link for code {}", code);
            return Ok(None);
        };

        record.clicks = record.clicks.saturating_add(1);
        let original = record.original.clone();
        debug!("Resolved {} -> {} ({} clicks)", code, original, record.clicks);

        self.persist(&records).await?;
        *cached = Some(records);

        Ok(Some(original))
    }

    /// Returns every record in insertion order, read fresh from the store.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Storage`] if the store cannot be read.
    pub async fn list(&self) -> Result<Vec<Record>, RegistryError> {
        let _guard = self.records.lock().await;
        self.load().await
    }

    /// Reads the stored blob without corruption recovery.
    ///
    /// Returns the number of records, or [`RegistryError::CorruptState`] when
    /// the blob does not decode.
    pub async fn check(&self) -> Result<usize, RegistryError> {
        let _guard = self.records.lock().await;
        self.load_strict().await.map(|records| records.len())
    }

    /// Loads the sequence, treating an undecodable blob as empty.
    ///
    /// The empty sequence replaces the corrupt blob on the next write.
    async fn load(&self) -> Result<Vec<Record>, RegistryError> {
        match self.load_strict().await {
            Err(RegistryError::CorruptState(e)) => {
                warn!(
                    "Stored registry under '{}' is corrupt, starting empty: {}",
                    self.storage_key, e
                );
                Ok(Vec::new())
            }
            other => other,
        }
    }

    async fn load_strict(&self) -> Result<Vec<Record>, RegistryError> {
        let Some(blob) = self.store.get(&self.storage_key).await? else {
            return Ok(Vec::new());
        };

        snapshot::decode(&blob).map_err(RegistryError::CorruptState)
    }

    async fn persist(&self, records: &[Record]) -> Result<(), RegistryError> {
        let blob = snapshot::encode(records).map_err(RegistryError::Encode)?;
        self.store.set(&self.storage_key, &blob).await?;
        Ok(())
    }
}

/// Draws generated codes until one is not in use.
fn generate_unique_code(records: &[Record]) -> Result<String, RegistryError> {
    for _ in 0..MAX_CODE_ATTEMPTS {
        let code = generate_code();

        if !records.iter().any(|r| r.code == code) {
            return Ok(code);
        }
    }

    Err(RegistryError::CodeSpaceExhausted {
        attempts: MAX_CODE_ATTEMPTS,
    })
}
