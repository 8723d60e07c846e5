//! Application layer services implementing the shortening policy.
//!
//! Services consume the domain traits ([`crate::domain::repositories::UrlStore`],
//! [`crate::domain::generator::CodeGenerator`]) and expose a small API to the
//! HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Create-or-reuse with bounded collision retry
//! - [`services::redirect_service::RedirectService`] - Code to long URL resolution

pub mod services;
