// self
use crate::{
	_prelude::*,
	dto::{AccessToken, Property, token_update::millis_to_datetime},
	error::UnknownValueError,
};

/// Next step the caller should take after a token update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenUpdateAction {
	/// The service failed internally or the request could not reach it.
	InternalServerError,
	/// The request was malformed, e.g. the access token was missing.
	BadRequest,
	/// The access token does not exist.
	NotFound,
	/// The access token was updated.
	Ok,
}
impl TokenUpdateAction {
	/// Every action, in declaration order.
	pub const ALL: [Self; 4] = [Self::InternalServerError, Self::BadRequest, Self::NotFound, Self::Ok];

	/// Returns the wire identifier.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::InternalServerError => "INTERNAL_SERVER_ERROR",
			Self::BadRequest => "BAD_REQUEST",
			Self::NotFound => "NOT_FOUND",
			Self::Ok => "OK",
		}
	}
}
impl Display for TokenUpdateAction {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for TokenUpdateAction {
	type Err = UnknownValueError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|action| action.as_str() == s)
			.ok_or_else(|| UnknownValueError::new("token update action", s))
	}
}

/// Response from the `/auth/token/update` API.
///
/// On [`TokenUpdateAction::Ok`] the token fields echo the token's state after the update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUpdateResponse {
	/// Service result code (e.g. `A135001`).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result_code: Option<String>,
	/// Human-readable result message.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result_message: Option<String>,
	/// Next step for the caller.
	pub action: TokenUpdateAction,
	/// The updated access token.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub access_token: Option<AccessToken>,
	/// Expiry in milliseconds since the Unix epoch; `0` when not reported.
	#[serde(default)]
	pub access_token_expires_at: i64,
	/// Scopes now associated with the access token.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scopes: Option<Vec<String>>,
	/// Properties now associated with the access token.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub properties: Option<Vec<Property>>,
}
impl TokenUpdateResponse {
	/// Creates a response carrying only an action.
	pub fn new(action: TokenUpdateAction) -> Self {
		Self {
			result_code: None,
			result_message: None,
			action,
			access_token: None,
			access_token_expires_at: 0,
			scopes: None,
			properties: None,
		}
	}

	/// Returns `true` when the update was applied.
	pub fn is_success(&self) -> bool {
		matches!(self.action, TokenUpdateAction::Ok)
	}

	/// Reported expiry as an instant; `None` when absent or outside the representable range.
	pub fn expires_at(&self) -> Option<OffsetDateTime> {
		if self.access_token_expires_at > 0 {
			millis_to_datetime(self.access_token_expires_at)
		} else {
			None
		}
	}
}
