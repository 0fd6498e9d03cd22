//! Create-link page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::error;

use crate::domain::entities::Record;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::{non_empty_code, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Template for the home page.
///
/// Renders `templates/index.html` with:
/// - Link creation form (URL, optional custom code, minutes)
/// - Inline error message
/// - The created short link and its expiry
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub url: String,
    pub custom: String,
    pub minutes: String,
    pub result: Option<Record>,
    pub error: Option<String>,
}

impl IndexTemplate {
    fn blank(default_minutes: i64) -> Self {
        Self {
            url: String::new(),
            custom: String::new(),
            minutes: default_minutes.to_string(),
            result: None,
            error: None,
        }
    }
}

/// Submitted create form. Every field arrives as text.
#[derive(Debug, Deserialize)]
pub struct CreateForm {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub custom: String,
    #[serde(default)]
    pub minutes: String,
}

/// Renders the empty create form.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate::blank(state.default_expiry_minutes)
}

/// Handles create form submission.
///
/// # Endpoint
///
/// `POST /`
///
/// On success the page shows the short URL and its expiry, with the form
/// cleared. On failure the form is re-rendered with the submitted values and
/// an inline message; the status reflects the failure.
pub async fn create_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateForm>,
) -> impl IntoResponse {
    let mut page = IndexTemplate {
        url: form.url.clone(),
        custom: form.custom.clone(),
        minutes: form.minutes.clone(),
        result: None,
        error: None,
    };

    match create_from_form(&state, form).await {
        Ok(record) => {
            let mut page = IndexTemplate::blank(state.default_expiry_minutes);
            page.result = Some(record);
            (StatusCode::OK, page)
        }
        Err(err) => {
            let status = match &err {
                AppError::Validation { .. } => StatusCode::BAD_REQUEST,
                AppError::Conflict { .. } => StatusCode::CONFLICT,
                AppError::NotFound { .. } => StatusCode::NOT_FOUND,
                AppError::Internal { .. } => {
                    error!("Failed to create link from form: {:?}", err);
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            page.error = Some(err.to_string());
            (status, page)
        }
    }
}

/// Validates the form in the order the page reports problems: URL first,
/// then custom code, then minutes.
async fn create_from_form(state: &AppState, form: CreateForm) -> Result<Record, AppError> {
    let url = validate_url(&form.url)?;

    let custom_code = non_empty_code(Some(form.custom));
    if let Some(code) = &custom_code {
        validate_custom_code(code)?;
    }

    let minutes = parse_minutes(&form.minutes, state.default_expiry_minutes)?;

    Ok(state.registry.create(url, minutes, custom_code).await?)
}

/// Parses the minutes field; blank means the default.
fn parse_minutes(raw: &str, default: i64) -> Result<i64, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }

    match raw.parse::<i64>() {
        Ok(minutes) if minutes >= 1 => Ok(minutes),
        _ => Err(AppError::bad_request(
            "Expiry must be a whole number of minutes, at least 1",
            serde_json::json!({ "minutes": raw }),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minutes() {
        assert_eq!(parse_minutes("", 30).unwrap(), 30);
        assert_eq!(parse_minutes(" 45 ", 30).unwrap(), 45);
        assert!(parse_minutes("0", 30).is_err());
        assert!(parse_minutes("-5", 30).is_err());
        assert!(parse_minutes("soon", 30).is_err());
    }
}
