//! Code generation interface.

use crate::domain::entities::ShortCode;
use crate::error::AppError;
use async_trait::async_trait;

/// Produces short codes for long URLs.
///
/// With `randomize` off the same URL must always produce the same code, which
/// is what makes permanent links reusable. With `randomize` on every call may
/// produce a different code; callers only ask for that after a collision.
///
/// Hashing is CPU-bound, so implementations are expected to run it off the
/// request path (see [`crate::infrastructure::hashing::PooledCodeGenerator`]).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeGenerator: Send + Sync {
    /// Generates the code for `long_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the hashing worker fails.
    async fn generate(&self, long_url: &str, randomize: bool) -> Result<ShortCode, AppError>;
}
