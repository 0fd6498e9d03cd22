//! HTTP server initialization and runtime setup.
//!
//! Opens the configured storage backend, builds the registry and runs the
//! Axum server until a shutdown signal arrives.

use crate::application::services::Registry;
use crate::config::{Config, StorageBackend};
use crate::domain::repositories::KeyValueStore;
use crate::infrastructure::storage::{FileStore, MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Namespace for keys written to Redis.
const REDIS_KEY_PREFIX: &str = "darkshort:";

/// Opens the storage backend selected by the configuration.
///
/// # Errors
///
/// Returns an error if the file directory cannot be created or Redis is
/// unreachable.
pub async fn connect_storage(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => Arc::new(MemoryStore::new()),
        StorageBackend::File => Arc::new(
            FileStore::open(&config.storage_dir)
                .await
                .context("Failed to open file storage")?,
        ),
        StorageBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("Redis storage selected but no Redis URL configured")?;
            Arc::new(
                RedisStore::connect(redis_url, REDIS_KEY_PREFIX)
                    .await
                    .context("Failed to open Redis storage")?,
            )
        }
    };

    tracing::info!("Storage backend: {}", store.backend_name());
    Ok(store)
}

/// Builds the registry over `store` using the configured key and origin.
pub fn build_registry(config: &Config, store: Arc<dyn KeyValueStore>) -> Registry {
    Registry::new(store, &config.storage_key, &config.public_origin)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (memory, file or Redis)
/// - Registry
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Storage cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_storage(&config).await?;
    let registry = Arc::new(build_registry(&config, store));

    match registry.check().await {
        Ok(count) => tracing::info!("Registry holds {} links", count),
        Err(e) => tracing::warn!("Registry will start empty: {}", e),
    }

    let state = AppState::new(registry, config.default_expiry_minutes);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
