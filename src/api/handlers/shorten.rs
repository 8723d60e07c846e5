//! Handler for the JSON shortening endpoint.

use axum::{
    Form, Json,
    extract::{State, rejection::FormRejection},
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenForm, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api`
///
/// # Request Body
///
/// Form-encoded:
///
/// ```text
/// long_url=https://example.com/page&expires_in=3600
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "http://127.0.0.1:8888/2a55966625" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `long_url` is missing or `expires_in` is not a
/// non-negative integer.
/// Returns 503 Service Unavailable if no free code could be found.
pub async fn api_shorten_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let short_url = shorten_form(&state, form).await?;
    Ok(Json(ShortenResponse { short_url }))
}

/// Validates a submitted form and runs the shortener on it.
///
/// Shared by the JSON endpoint and the HTML form page.
pub(crate) async fn shorten_form(
    state: &AppState,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<String, AppError> {
    let Form(form) = form.map_err(|rejection| {
        AppError::bad_request(
            "Invalid form body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    form.validate()?;

    let long_url = form.long_url.as_deref().unwrap_or_default();
    state
        .shortener
        .shorten(long_url, form.expires_in.as_deref())
        .await
}
