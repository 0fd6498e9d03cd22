#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use darkshort::application::services::Registry;
use darkshort::domain::entities::Record;
use darkshort::domain::repositories::KeyValueStore;
use darkshort::infrastructure::storage::MemoryStore;
use darkshort::routes::build_router;
use darkshort::state::AppState;

pub const STORAGE_KEY: &str = "dark_urls";
pub const ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_MINUTES: i64 = 30;

pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    let registry = Registry::new(store, STORAGE_KEY, ORIGIN);
    AppState::new(Arc::new(registry), DEFAULT_MINUTES)
}

/// Full application over a fresh in-memory store. The store is returned so
/// tests can inspect or seed the persisted blob.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = TestServer::new(build_router(create_test_state(store.clone()))).unwrap();
    (server, store)
}

/// Application whose store already holds `blob` under the registry key.
pub fn create_seeded_server(blob: &str) -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_entries([(STORAGE_KEY, blob)]));
    let server = TestServer::new(build_router(create_test_state(store.clone()))).unwrap();
    (server, store)
}

pub async fn stored_records(store: &MemoryStore) -> Vec<Record> {
    let blob = store.get(STORAGE_KEY).await.unwrap().unwrap();
    serde_json::from_str(&blob).unwrap()
}

pub fn test_record(id: i64, code: &str, original: &str, clicks: u64) -> Record {
    Record {
        id,
        original: original.to_string(),
        short: format!("{ORIGIN}/#/{code}"),
        code: code.to_string(),
        expiry: chrono::DateTime::from_timestamp_millis(id + 30 * 60 * 1000).unwrap(),
        clicks,
    }
}

pub fn seed_blob(records: &[Record]) -> String {
    serde_json::to_string(records).unwrap()
}
