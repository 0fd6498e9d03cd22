//! DTOs for the link shortening endpoint.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation. Empty means "generate one".
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").unwrap());

/// Request to shorten one URL.
///
/// The created [`Record`](crate::domain::entities::Record) is returned as is.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (absolute HTTP/HTTPS).
    pub url: String,

    /// Link lifetime in minutes; the configured default when omitted.
    #[validate(range(min = 1, message = "Expiry must be at least one minute"))]
    pub minutes: Option<i64>,

    /// Optional custom short code. Empty is treated as absent.
    #[validate(length(max = 64))]
    #[validate(regex(path = *CUSTOM_CODE_REGEX))]
    pub custom_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ShortenRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_minimal_request_is_valid() {
        let request = parse(json!({ "url": "https://example.com" }));
        assert!(request.validate().is_ok());
        assert_eq!(request.minutes, None);
        assert_eq!(request.custom_code, None);
    }

    #[test]
    fn test_empty_custom_code_is_valid() {
        let request = parse(json!({ "url": "https://example.com", "custom_code": "" }));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_minutes() {
        let request = parse(json!({ "url": "https://example.com", "minutes": 0 }));
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_custom_code() {
        let request = parse(json!({ "url": "https://example.com", "custom_code": "a/b" }));
        assert!(request.validate().is_err());

        let request = parse(json!({ "url": "https://example.com", "custom_code": "x".repeat(65) }));
        assert!(request.validate().is_err());
    }
}
