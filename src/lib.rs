//! Typed payloads and protocol vocabularies for the Authlete OAuth 2.0 / OpenID Connect API.
//!
//! The crate is transport-agnostic: it shapes what goes on the wire and leaves the HTTP call,
//! retries, and server-side validation to the caller and the remote service.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod codec;
pub mod config;
pub mod dto;
pub mod error;
pub mod obs;
pub mod types;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		str::FromStr,
	};

	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "oauth2")] pub use oauth2;
pub use time;
pub use url;
#[cfg(test)] use color_eyre as _;
