//! Application layer services implementing business logic.
//!
//! Services consume the storage trait from the domain layer and provide the
//! API that HTTP handlers and the admin CLI call into.
//!
//! # Available Services
//!
//! - [`services::registry::Registry`] - Short link creation, resolution and listing

pub mod services;
