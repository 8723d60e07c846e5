//! Pure helpers for the shortening engine.
//!
//! - [`code_generator`] - BLAKE2b short code derivation
//! - [`url_normalizer`] - URL descriptor extraction

pub mod code_generator;
pub mod url_normalizer;
