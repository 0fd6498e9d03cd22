//! Link statistics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the statistics page.
///
/// Renders `templates/stats.html`: one row per link with its short URL,
/// target, click count and expiry, or "No links yet."
#[derive(Template, WebTemplate)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub records: Vec<Record>,
}

/// Renders the statistics page.
///
/// # Endpoint
///
/// `GET /stats`
///
/// Reads the registry fresh on every visit.
pub async fn stats_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let records = state.registry.list().await?;
    Ok(StatsTemplate { records })
}
