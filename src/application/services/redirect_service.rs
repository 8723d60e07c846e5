//! Short code resolution.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::ShortCode;
use crate::domain::repositories::UrlStore;
use crate::error::AppError;

/// Resolves short codes back to their long URLs.
pub struct RedirectService<S: UrlStore + ?Sized> {
    store: Arc<S>,
}

impl<S: UrlStore + ?Sized> RedirectService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the long URL stored under `code`.
    ///
    /// Surrounding `/` are ignored. Expiry is not checked here; expired
    /// records stay resolvable until the sweeper deletes them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let code = code.trim_matches('/');

        let record = match ShortCode::parse(code) {
            Some(parsed) => self.store.find_by_code(&parsed).await?,
            None => None,
        };

        match record {
            Some(record) => {
                metrics::counter!("shortener_redirects_total", "result" => "found").increment(1);
                Ok(record.descriptor.long_url)
            }
            None => {
                metrics::counter!("shortener_redirects_total", "result" => "not_found")
                    .increment(1);
                Err(AppError::not_found(
                    "Short link not found",
                    json!({ "code": code }),
                ))
            }
        }
    }
}
