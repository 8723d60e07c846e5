//! Create-or-reuse shortening policy.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::entities::{ShortCode, UrlDescriptor, UrlRecord};
use crate::domain::generator::CodeGenerator;
use crate::domain::repositories::UrlStore;
use crate::error::AppError;
use crate::utils::url_normalizer::describe_url;

/// Default cap on code generation attempts per shorten call.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Parses the optional `expires_in` argument (seconds).
///
/// Blank input means no expiry. Anything that is not a non-negative integer
/// is rejected.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for non-integer, negative or out of range
/// values.
pub fn parse_expires_in(raw: Option<&str>) -> Result<Option<Duration>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    let invalid = || {
        AppError::bad_request(
            "Invalid argument expires_in",
            json!({ "expires_in": raw, "reason": "Expected a non-negative number of seconds" }),
        )
    };

    let seconds: i64 = raw.parse().map_err(|_| invalid())?;
    if seconds < 0 {
        return Err(invalid());
    }

    Duration::try_seconds(seconds).map(Some).ok_or_else(invalid)
}

/// Service turning long URLs into absolute short URLs.
///
/// Permanent links are deduplicated: shortening the same URL twice without an
/// expiry returns the same code. Timed links always get a fresh record.
///
/// # Code Generation
///
/// The first attempt uses the deterministic hash of the URL. Every attempt
/// after a duplicate code uses the randomized hash. After `max_attempts`
/// collisions the call fails with [`AppError::Exhausted`].
pub struct ShortenerService<S: UrlStore + ?Sized, G: CodeGenerator + ?Sized> {
    store: Arc<S>,
    generator: Arc<G>,
    short_domain: String,
    max_attempts: usize,
}

impl<S: UrlStore + ?Sized, G: CodeGenerator + ?Sized> ShortenerService<S, G> {
    /// Creates a new shortener.
    ///
    /// `short_domain` is the base the code is appended to, e.g.
    /// `https://s.example.com`. `max_attempts` is clamped to at least one.
    pub fn new(
        store: Arc<S>,
        generator: Arc<G>,
        short_domain: impl Into<String>,
        max_attempts: usize,
    ) -> Self {
        Self {
            store,
            generator,
            short_domain: short_domain.into(),
            max_attempts: max_attempts.max(1),
        }
    }

    /// Shortens `long_url` and returns the absolute short URL.
    ///
    /// `expires_in` is the raw expiry argument in seconds, see
    /// [`parse_expires_in`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `expires_in` is invalid or the URL
    /// is empty once surrounding `/` are trimmed.
    ///
    /// Returns [`AppError::Exhausted`] if no free code was found within the
    /// attempt cap.
    ///
    /// Returns [`AppError::Internal`] on store or hashing failures.
    pub async fn shorten(
        &self,
        long_url: &str,
        expires_in: Option<&str>,
    ) -> Result<String, AppError> {
        let ttl = parse_expires_in(expires_in)?;
        let descriptor = describe_url(long_url);
        if descriptor.long_url.is_empty() {
            return Err(AppError::bad_request(
                "Invalid or missing argument long_url",
                json!({ "reason": "URL is empty" }),
            ));
        }

        let code = match ttl {
            Some(ttl) => {
                let expires_time = Utc::now().checked_add_signed(ttl).ok_or_else(|| {
                    AppError::bad_request(
                        "Invalid argument expires_in",
                        json!({ "reason": "Expiry is out of range" }),
                    )
                })?;
                self.create(descriptor, Some(expires_time)).await?
            }
            None => self.find_or_create(descriptor).await?,
        };

        Ok(code.to_url(&self.short_domain))
    }

    async fn find_or_create(&self, descriptor: UrlDescriptor) -> Result<ShortCode, AppError> {
        if let Some(existing) = self.store.find(&descriptor).await? {
            debug!(
                code = %existing.short_part,
                long_url = %existing.long_url(),
                "Reusing permanent short link"
            );
            metrics::counter!("shortener_links_reused_total").increment(1);
            return Ok(existing.short_part);
        }

        self.create(descriptor, None).await
    }

    async fn create(
        &self,
        descriptor: UrlDescriptor,
        expires_time: Option<DateTime<Utc>>,
    ) -> Result<ShortCode, AppError> {
        let kind = if expires_time.is_some() {
            "timed"
        } else {
            "permanent"
        };

        for attempt in 1..=self.max_attempts {
            let code = self
                .generator
                .generate(&descriptor.long_url, attempt > 1)
                .await?;
            let record = UrlRecord::new(descriptor.clone(), code, expires_time);

            match self.store.insert(&record).await {
                Ok(()) => {
                    debug!(
                        code = %record.short_part,
                        kind,
                        attempt,
                        "Short link created"
                    );
                    metrics::counter!("shortener_links_created_total", "kind" => kind)
                        .increment(1);
                    return Ok(record.short_part);
                }
                Err(e) if e.is_duplicate_code() => {
                    warn!(
                        code = %record.short_part,
                        attempt,
                        max_attempts = self.max_attempts,
                        "Short code collision, retrying with randomized hash"
                    );
                    metrics::counter!("shortener_code_collisions_total").increment(1);
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::exhausted(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }
}
