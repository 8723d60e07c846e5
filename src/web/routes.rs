//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, index_submit_handler};
use axum::{Router, routing::get};

/// Public page routes.
///
/// # Endpoints
///
/// - `GET /` - Shortening form
/// - `POST /` - Form submission, renders the short URL
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(index_handler).post(index_submit_handler))
}
