//! Infrastructure layer for external integrations.
//!
//! Concrete implementations of the domain contracts.
//!
//! # Modules
//!
//! - [`hashing`] - Bounded worker pool and the BLAKE2b code generator
//! - [`persistence`] - PostgreSQL and in-memory URL stores

pub mod hashing;
pub mod persistence;
