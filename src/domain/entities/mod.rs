//! Core domain entities.
//!
//! - [`UrlDescriptor`] - Canonical description of a long URL (the dedup key)
//! - [`UrlRecord`] - A descriptor bound to a short code, optionally timed
//! - [`ShortCode`] - Validated ten-character hex code

pub mod short_code;
pub mod url_record;

pub use short_code::ShortCode;
pub use url_record::{UrlDescriptor, UrlRecord};
