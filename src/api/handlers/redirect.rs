//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Response Codes
///
/// - **302 Found**: `Location` carries the long URL
/// - **404 Not Found**: unknown or malformed code
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.redirect.resolve(&code).await?;
    debug!(code = %code, long_url = %long_url, "Redirecting");

    let location = HeaderValue::from_bytes(long_url.as_bytes()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid Location header",
            json!({ "code": code }),
        )
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]))
}
