//! Record entity representing one short link in the registry.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A short link with its target, expiry and click counter.
///
/// Records are stored as one JSON array under a single key, so every field is
/// serialized. `expiry` travels as an RFC 3339 string and is parsed back into
/// a timestamp on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Creation time in milliseconds since the Unix epoch. Not unique.
    pub id: i64,
    pub original: String,
    pub short: String,
    pub code: String,
    pub expiry: DateTime<Utc>,
    pub clicks: u64,
}

impl Record {
    /// Builds a fresh record created at `now` that expires `minutes` later.
    ///
    /// The expiry saturates at the bounds of [`DateTime<Utc>`] instead of
    /// overflowing for absurd minute counts.
    pub fn new(
        original: String,
        code: String,
        origin: &str,
        minutes: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: now.timestamp_millis(),
            short: short_url(origin, &code),
            original,
            code,
            expiry: expiry_after(now, minutes),
            clicks: 0,
        }
    }

    /// Creation time recovered from the millisecond `id`.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.id)
    }

    /// Returns true once the expiry has passed.
    ///
    /// Informational only: resolving a link never consults it.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expiry
    }

    /// Human-readable expiry for pages and CLI output.
    pub fn expiry_label(&self) -> String {
        self.expiry.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }
}

/// Builds the shareable short URL, `<origin>/#/<code>`.
pub fn short_url(origin: &str, code: &str) -> String {
    format!("{}/#/{}", origin.trim_end_matches('/'), code)
}

fn expiry_after(now: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    TimeDelta::try_minutes(minutes)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(if minutes >= 0 {
            DateTime::<Utc>::MAX_UTC
        } else {
            DateTime::<Utc>::MIN_UTC
        })
}
