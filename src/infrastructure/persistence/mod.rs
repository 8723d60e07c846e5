//! URL store implementations.
//!
//! - [`PgUrlStore`] - PostgreSQL via SQLx; schema in `migrations/`
//! - [`MemoryUrlStore`] - in-process map for database-less runs and tests

pub mod memory_url_store;
pub mod pg_url_store;

pub use memory_url_store::MemoryUrlStore;
pub use pg_url_store::PgUrlStore;
