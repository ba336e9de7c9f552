//! Request and response payloads exchanged with the Authlete API.
//!
//! Payloads are plain values: building one never fails and never talks to the network. Wire
//! names are camelCase and absent optional fields mean "leave unchanged".

pub mod access_token;
pub mod property;
pub mod token_update;

pub use access_token::*;
pub use property::*;
pub use token_update::*;

// self
use crate::_prelude::*;

/// Binds a request payload to its API path and response payload.
pub trait ApiRequest
where
	Self: Serialize + DeserializeOwned,
{
	/// API path relative to the service base URL, without a leading slash.
	const PATH: &'static str;
	/// Stable label used in logs, metrics, and error messages.
	const LABEL: &'static str;
	/// Label for the response payload.
	const RESPONSE_LABEL: &'static str;

	/// Response payload returned by the endpoint.
	type Response: DeserializeOwned;

	/// Access token the request addresses, if any.
	fn access_token_ref(&self) -> Option<&AccessToken> {
		None
	}
}
