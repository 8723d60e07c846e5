//! API route configuration.

use crate::api::handlers::api_shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /api` - Shorten a form-encoded `long_url`, answer with JSON
pub fn routes() -> Router<AppState> {
    Router::new().route("/api", post(api_shorten_handler))
}
