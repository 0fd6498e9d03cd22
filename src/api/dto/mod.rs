//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Records are returned with their domain shape.

pub mod health;
pub mod shorten;
