//! Validation of URLs submitted for shortening.

use url::Url;

/// Reasons a submitted URL is refused.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Checks that `input` is an absolute HTTP(S) URL and returns its parsed
/// serialization, which is what gets stored.
///
/// Parsing drops embedded tabs and newlines, trims surrounding control
/// characters and spaces, and percent-encodes the rest, so the result is
/// always usable as a `Location` header. Relative references, `javascript:`,
/// `data:`, `file:` and other schemes are refused.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for strings that do not parse
/// as an absolute URL and [`UrlValidationError::UnsupportedProtocol`] for
/// non-HTTP(S) schemes.
pub fn validate_url(input: &str) -> Result<String, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url.to_string()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?q=1#frag").is_ok());
        assert!(validate_url("http://localhost:3000/test").is_ok());
        assert!(validate_url("http://192.168.1.1:8080/api").is_ok());
    }

    #[test]
    fn test_returns_parsed_form() {
        assert_eq!(validate_url("https://example.com").unwrap(), "https://example.com/");
        assert_eq!(
            validate_url("https://example.com/a b?q=1").unwrap(),
            "https://example.com/a%20b?q=1"
        );
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(
            validate_url("https://example.com/a\nb").unwrap(),
            "https://example.com/ab"
        );
        assert_eq!(
            validate_url("https://example.com/\u{1}").unwrap(),
            "https://example.com/"
        );
        assert_eq!(
            validate_url("  https://example.com/x\t ").unwrap(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            validate_url("not a valid url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_url(""),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_other_protocols() {
        for input in [
            "javascript:alert('xss')",
            "data:text/plain,Hello",
            "file:///etc/passwd",
            "ftp://example.com/file.txt",
            "mailto:test@example.com",
        ] {
            assert!(
                matches!(
                    validate_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "{input} should be refused"
            );
        }
    }
}
