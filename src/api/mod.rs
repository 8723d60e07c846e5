//! JSON API layer.
//!
//! # Modules
//!
//! - [`dto`] - Request and response types
//! - [`handlers`] - Shorten, redirect and health handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - `/api` route table

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
