//! Closed vocabularies shared with the OAuth 2.0 and OpenID Connect protocols.

pub mod error_code;

pub use error_code::*;
