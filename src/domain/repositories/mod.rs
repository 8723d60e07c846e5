//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! - [`UrlStore`] - URL record persistence with code uniqueness and expiry

pub mod url_store;

pub use url_store::{StoreCounts, UrlStore};

#[cfg(test)]
pub use url_store::MockUrlStore;
