//! Store trait for shortened URL records.

use crate::domain::entities::{ShortCode, UrlDescriptor, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Record counts reported by [`UrlStore::count`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCounts {
    pub total: u64,
    pub timed: u64,
}

/// Persistence interface for URL records.
///
/// Implementations own code uniqueness: two concurrent inserts of the same
/// `short_part` must result in exactly one success, without any coordination
/// from the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlStore`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryUrlStore`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlStore: Send + Sync {
    /// Finds a permanent record whose fields all equal the descriptor's.
    ///
    /// Timed records are never returned. When several records match (possible
    /// after concurrent creation), any one of them may be returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find(&self, descriptor: &UrlDescriptor) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its exact short code.
    ///
    /// No expiry check is made; expired records disappear through
    /// [`UrlStore::purge_expired`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &ShortCode) -> Result<Option<UrlRecord>, AppError>;

    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a live record already holds the same
    /// `short_part` (duplicate code).
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, record: &UrlRecord) -> Result<(), AppError>;

    /// Deletes every record whose `expires_time` is at or before `now`.
    ///
    /// Returns the number of deleted records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<StoreCounts, AppError>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
