//! Short code value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of digest bytes a short code is derived from.
pub const DIGEST_SIZE: usize = 5;

/// Length of the hex-encoded code.
pub const CODE_LENGTH: usize = DIGEST_SIZE * 2;

/// Length of the code block prefix used for store-side partitioning.
pub const BLOCK_LENGTH: usize = 2;

/// A validated short code: exactly ten lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortCode(String);

impl ShortCode {
    /// Parses a code, returning `None` if it is not ten lowercase hex characters.
    pub fn parse(code: &str) -> Option<Self> {
        let valid = code.len() == CODE_LENGTH
            && code
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        valid.then(|| Self(code.to_string()))
    }

    /// Encodes a digest as a code.
    ///
    /// The digest must be [`DIGEST_SIZE`] bytes long.
    pub fn from_digest(digest: &[u8]) -> Self {
        debug_assert_eq!(digest.len(), DIGEST_SIZE);
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the code block: the first two characters of the code.
    pub fn block(&self) -> &str {
        &self.0[..BLOCK_LENGTH]
    }

    /// Joins the code onto a short-domain base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for ShortCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ShortCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("invalid short code: {value}"))
    }
}

impl From<ShortCode> for String {
    fn from(code: ShortCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_code() {
        let code = ShortCode::parse("5c49d42879").unwrap();
        assert_eq!(code.as_str(), "5c49d42879");
        assert_eq!(code.block(), "5c");
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(ShortCode::parse("5c49d4287").is_none());
        assert!(ShortCode::parse("5c49d428790").is_none());
        assert!(ShortCode::parse("").is_none());
    }

    #[test]
    fn test_parse_rejects_non_hex_and_uppercase() {
        assert!(ShortCode::parse("5C49D42879").is_none());
        assert!(ShortCode::parse("zz49d42879").is_none());
        assert!(ShortCode::parse("health0000").is_none());
    }

    #[test]
    fn test_from_digest() {
        let code = ShortCode::from_digest(&[0x00, 0xab, 0x10, 0xff, 0x07]);
        assert_eq!(code.as_str(), "00ab10ff07");
        assert_eq!(code.block(), "00");
    }

    #[test]
    fn test_to_url() {
        let code = ShortCode::parse("2a55966625").unwrap();
        assert_eq!(
            code.to_url("http://127.0.0.1:8888"),
            "http://127.0.0.1:8888/2a55966625"
        );
        assert_eq!(code.to_url("https://s.io/"), "https://s.io/2a55966625");
    }

    #[test]
    fn test_serde_validates() {
        let ok: Result<ShortCode, _> = serde_json::from_str("\"2a55966625\"");
        assert!(ok.is_ok());

        let bad: Result<ShortCode, _> = serde_json::from_str("\"not-a-code\"");
        assert!(bad.is_err());
    }
}
