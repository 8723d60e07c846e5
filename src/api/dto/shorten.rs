//! DTOs for the shortening endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form-encoded shortening request, shared by `POST /` and `POST /api`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ShortenForm {
    /// URL to shorten. Stored with leading and trailing `/` trimmed; a value
    /// that trims to nothing is rejected by the shortener.
    #[validate(required, length(min = 1))]
    pub long_url: Option<String>,

    /// Optional lifetime in seconds. Blank means permanent.
    pub expires_in: Option<String>,
}

/// JSON answer of `POST /api`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_long_url_fails_validation() {
        let form = ShortenForm::default();
        let errors = form.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("long_url"));
    }

    #[test]
    fn test_empty_long_url_fails_validation() {
        let form = ShortenForm {
            long_url: Some(String::new()),
            expires_in: None,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_expiry_is_optional() {
        let form = ShortenForm {
            long_url: Some("http://example.com".to_string()),
            expires_in: None,
        };
        assert!(form.validate().is_ok());
    }
}
