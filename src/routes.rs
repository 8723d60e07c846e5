//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`        - Shortening form page
//! - `POST /`        - Form submission, renders the short URL
//! - `POST /api`     - Form submission, answers `{"short_url": ...}`
//! - `GET  /health`  - Store health check
//! - `GET  /{code}`  - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slashes are trimmed before routing

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes and middleware without path normalization.
///
/// Trailing slashes only behave as documented when the router is wrapped by
/// [`app_router`]; tests that exercise a single route can use this directly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .merge(api::routes::routes())
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
