use std::sync::Arc;

use crate::application::services::Registry;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    /// Minutes pre-filled in the create form and used when the API omits them.
    pub default_expiry_minutes: i64,
}

impl AppState {
    pub fn new(registry: Arc<Registry>, default_expiry_minutes: i64) -> Self {
        Self {
            registry,
            default_expiry_minutes,
        }
    }
}
