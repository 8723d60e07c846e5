//! Off-request hashing for short code generation.
//!
//! - [`HashWorkerPool`] - fixed-size gate in front of tokio's blocking threads
//! - [`PooledCodeGenerator`] - BLAKE2b [`crate::domain::generator::CodeGenerator`]

mod pooled_generator;
mod worker_pool;

pub use pooled_generator::PooledCodeGenerator;
pub use worker_pool::HashWorkerPool;
