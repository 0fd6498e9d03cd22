//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolving counts a click. Expired links still redirect.
///
/// # Responses
///
/// - `307 Temporary Redirect` to the original URL
/// - `303 See Other` to `/` when the code is unknown
///
/// # Errors
///
/// Returns 500 if the storage backend fails.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    match state.registry.resolve(&code).await? {
        Some(original) => Ok(Redirect::temporary(&original).into_response()),
        None => {
            debug!("Unknown code {}, sending home", code);
            Ok(Redirect::to("/").into_response())
        }
    }
}
