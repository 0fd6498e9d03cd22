//! Short code generation and validation utilities.
//!
//! Generated codes are drawn from the base-36 alphabet (`0-9a-z`). The draw is
//! not cryptographically secure; the registry handles collisions itself.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Length of generated codes.
pub const CODE_LENGTH: usize = 6;

/// Upper bound on custom code length.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Reserved codes that cannot be used as short links.
///
/// These collide with routes served next to `/{code}`.
pub const RESERVED_CODES: &[&str] = &["api", "health", "stats", "static"];

/// Generates a random 6-character base-36 code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Drops an empty custom code so the caller falls back to a generated one.
pub fn non_empty_code(custom_code: Option<String>) -> Option<String> {
    custom_code.filter(|code| !code.is_empty())
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, hyphens, underscores
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 1-64 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !code
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens and underscores",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
