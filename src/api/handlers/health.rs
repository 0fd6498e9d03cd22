//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Storage**: Backend reachability
/// 2. **Registry**: The stored blob decodes
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok", "message": "file backend reachable" },
///     "registry": { "status": "ok", "message": "3 links" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage_check = check_storage(&state).await;
    let registry_check = check_registry(&state).await;

    let all_healthy = storage_check.is_ok() && registry_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage: storage_check,
            registry: registry_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_storage(state: &AppState) -> CheckStatus {
    let store = state.registry.store();
    let backend = store.backend_name();

    if store.health_check().await {
        CheckStatus::ok(format!("{backend} backend reachable"))
    } else {
        CheckStatus::error(format!("{backend} backend unreachable"))
    }
}

/// Checks that the stored blob decodes; corruption is reported, not repaired.
async fn check_registry(state: &AppState) -> CheckStatus {
    match state.registry.check().await {
        Ok(count) => CheckStatus::ok(format!("{count} links")),
        Err(e) => CheckStatus::error(e.to_string()),
    }
}
