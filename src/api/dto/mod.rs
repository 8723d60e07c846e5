//! Data Transfer Objects for API requests and responses.
//!
//! Requests arrive form-encoded and are checked with `validator`; responses
//! are serialized with Serde.

pub mod health;
pub mod shorten;
