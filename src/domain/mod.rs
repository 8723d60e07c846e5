//! Domain layer: entities, store and generator contracts, expiry handling.
//!
//! # Architecture
//!
//! - [`entities`] - URL descriptor, record and short code types
//! - [`repositories`] - Store trait implemented by the infrastructure layer
//! - [`generator`] - Code generation trait
//! - [`expiry_sweeper`] - Background purge of expired records
//!
//! The domain layer has no dependency on HTTP or on a concrete database.
//! Shortening and redirect policy live in [`crate::application::services`].

pub mod entities;
pub mod expiry_sweeper;
pub mod generator;
pub mod repositories;
