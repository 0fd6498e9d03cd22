//! Core domain entities.
//!
//! - [`Record`] - A short link: target URL, code, expiry and click counter

pub mod record;

pub use record::{Record, short_url};
