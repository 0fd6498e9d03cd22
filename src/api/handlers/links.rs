//! Handler for listing every short link.

use axum::{Json, extract::State};

use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;

/// Returns all records in creation order.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// No filtering and no pagination: the registry is one small blob.
pub async fn links_handler(State(state): State<AppState>) -> Result<Json<Vec<Record>>, AppError> {
    Ok(Json(state.registry.list().await?))
}
