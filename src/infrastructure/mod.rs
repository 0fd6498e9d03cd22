//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`storage`] - Key-value backends (memory, file, Redis)

pub mod storage;
