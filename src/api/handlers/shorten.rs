//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::ShortenRequest;
use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::{non_empty_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "minutes": 30,            // optional
///   "custom_code": "my-link"  // optional
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the record:
///
/// ```json
/// {
///   "id": 1760702400000,
///   "original": "https://example.com/",
///   "short": "http://localhost:3000/#/k3x9qa",
///   "code": "k3x9qa",
///   "expiry": "2025-10-17T12:30:00Z",
///   "clicks": 0
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the URL, minutes or custom code are invalid
/// - 409 Conflict if the custom code is already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<Record>), AppError> {
    payload.validate()?;
    let url = validate_url(&payload.url)?;

    let custom_code = non_empty_code(payload.custom_code);
    if let Some(code) = &custom_code {
        validate_custom_code(code)?;
    }

    let minutes = payload.minutes.unwrap_or(state.default_expiry_minutes);

    let record = state
        .registry
        .create(url, minutes, custom_code)
        .await?;

    Ok((StatusCode::CREATED, Json(record)))
}
