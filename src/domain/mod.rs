//! Domain layer: the short-link record model and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Storage trait implemented by the infrastructure layer
//! - [`snapshot`] - Text encoding of the persisted registry blob
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business operations live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod snapshot;
