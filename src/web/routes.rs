//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{create_handler, home_handler, stats_handler};
use axum::{Router, routing::get};

/// Browser-facing pages.
///
/// # Endpoints
///
/// - `GET  /`      - Create form
/// - `POST /`      - Create form submission
/// - `GET  /stats` - Every link with its click count
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler).post(create_handler))
        .route("/stats", get(stats_handler))
}
