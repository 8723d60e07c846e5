//! URL descriptor and stored URL record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::short_code::ShortCode;

/// Canonical attribute set derived from a long URL.
///
/// Serves both as the analytics record of a shortened URL and as the
/// deduplication key for permanent links. Produced by
/// [`crate::utils::url_normalizer::describe_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlDescriptor {
    pub long_url: String,
    pub url_len: usize,
    pub domain: String,
    pub domain_level: usize,
    pub base_domain: String,
    pub params_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<String>,
    pub path_level: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl UrlDescriptor {
    /// Exact-match predicate used by the reuse lookup.
    ///
    /// Every descriptor field must be equal, optional fields included (both
    /// absent or both present with the same value). Timed records never match.
    pub fn matches(&self, record: &UrlRecord) -> bool {
        record.expires_time.is_none() && &record.descriptor == self
    }
}

/// A stored mapping from a short code to a described long URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlRecord {
    #[serde(flatten)]
    pub descriptor: UrlDescriptor,
    pub short_part: ShortCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_time: Option<DateTime<Utc>>,
}

impl UrlRecord {
    pub fn new(
        descriptor: UrlDescriptor,
        short_part: ShortCode,
        expires_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            descriptor,
            short_part,
            expires_time,
        }
    }

    /// First two characters of the short code.
    pub fn short_part_block(&self) -> &str {
        self.short_part.block()
    }

    pub fn long_url(&self) -> &str {
        &self.descriptor.long_url
    }

    pub fn is_permanent(&self) -> bool {
        self.expires_time.is_none()
    }

    /// Returns true once the expiry instant has been reached.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_time.is_some_and(|t| t <= now)
    }
}
