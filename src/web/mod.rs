//! Browser-facing form page.
//!
//! Rendered server-side with Askama templates from `templates/`.

pub mod handlers;
pub mod routes;
