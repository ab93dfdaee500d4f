//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token generation and validation.
//!
//! Login and token issuance live in the identity service; this API only
//! validates bearer tokens (and mints them in tests).

pub mod jwt;
