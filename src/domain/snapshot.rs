//! Serialization contract for the persisted registry blob.
//!
//! The whole registry lives under one storage key as a UTF-8 JSON array of
//! [`Record`] objects, in insertion order. The layout matches what the browser
//! build of the shortener kept in `localStorage`, so blobs exported from it
//! load unchanged.

use crate::domain::entities::Record;

/// Encodes the full record sequence into the stored text form.
pub fn encode(records: &[Record]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}

/// Decodes a stored blob back into the record sequence.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when the blob is not a JSON
/// array of well-formed records. The registry treats that as corrupt state.
pub fn decode(blob: &str) -> Result<Vec<Record>, serde_json::Error> {
    serde_json::from_str(blob)
}
