//! Shortening form page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
};

use crate::api::dto::shorten::ShortenForm;
use crate::api::handlers::shorten::shorten_form;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the form page.
///
/// Renders `templates/index.html`; `short_url` is set after a successful
/// submission.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub short_url: Option<String>,
}

/// Renders the empty form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> IndexTemplate {
    IndexTemplate { short_url: None }
}

/// Shortens the submitted URL and renders the page with the result.
///
/// # Endpoint
///
/// `POST /`
///
/// # Errors
///
/// Same as [`crate::api::handlers::api_shorten_handler`], rendered as JSON.
pub async fn index_submit_handler(
    State(state): State<AppState>,
    form: Result<Form<ShortenForm>, FormRejection>,
) -> Result<IndexTemplate, AppError> {
    let short_url = shorten_form(&state, form).await?;

    Ok(IndexTemplate {
        short_url: Some(short_url),
    })
}
