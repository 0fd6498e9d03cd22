//! # DarkShort
//!
//! A small URL shortener whose entire state is one JSON blob in a key-value
//! store, the way a browser app keeps its data in `localStorage`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`Record`](domain::entities::Record) model,
//!   the blob codec and the storage trait
//! - **Application Layer** ([`application`]) - The [`Registry`](application::services::Registry):
//!   create, resolve and list
//! - **Infrastructure Layer** ([`infrastructure`]) - Memory, file and Redis stores
//! - **API Layer** ([`api`]) - JSON endpoints, redirect and health
//! - **Web Layer** ([`web`]) - Create form and statistics pages
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_BACKEND=file STORAGE_DIR=./data
//! export PUBLIC_ORIGIN=http://localhost:3000
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{Registry, RegistryError};
    pub use crate::domain::entities::Record;
    pub use crate::domain::repositories::{KeyValueStore, StorageError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::storage::{FileStore, MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
