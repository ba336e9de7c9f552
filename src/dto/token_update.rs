//! Payloads for the `/auth/token/update` API, which modifies an existing access token.

mod response;

pub use response::*;

// self
use crate::{
	_prelude::*,
	dto::{AccessToken, ApiRequest, Property},
};

/// Request to update the expiry, scopes, or properties of an existing access token.
///
/// Each optional part is a three-way switch at the wire boundary:
///
/// | Part | Unchanged | Replaced |
/// |---|---|---|
/// | `accessTokenExpiresAt` | `<= 0`, omitted | positive milliseconds since the Unix epoch |
/// | `scopes` | `None`, omitted | `Some(list)`, sent verbatim |
/// | `properties` | `None`, omitted | `Some(list)`, sent verbatim |
///
/// An empty list is sent as `[]` and stays distinct from `None`. Whether the service reads `[]`
/// as "clear everything" is the service's decision; this type only preserves the distinction.
///
/// Nothing is validated locally. The service drops scopes it does not support or the client may
/// not request, and reports unknown tokens through [`TokenUpdateResponse`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUpdateRequest {
	access_token: AccessToken,
	#[serde(default, skip_serializing_if = "expiry_is_unchanged")]
	access_token_expires_at: i64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	scopes: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	properties: Option<Vec<Property>>,
}
impl TokenUpdateRequest {
	/// Creates a request addressing `access_token` that changes nothing yet.
	pub fn new(access_token: impl Into<AccessToken>) -> Self {
		Self { access_token: access_token.into(), ..Default::default() }
	}

	/// Access token to update.
	pub fn access_token(&self) -> &str {
		self.access_token.expose()
	}

	/// Access token wrapper, useful for log-safe fingerprints.
	pub fn access_token_secret(&self) -> &AccessToken {
		&self.access_token
	}

	/// New expiry in milliseconds since the Unix epoch; `<= 0` leaves the expiry unchanged.
	pub fn access_token_expires_at(&self) -> i64 {
		self.access_token_expires_at
	}

	/// Replacement scope list, or `None` when scopes stay unchanged.
	pub fn scopes(&self) -> Option<&[String]> {
		self.scopes.as_deref()
	}

	/// Replacement property list, or `None` when properties stay unchanged.
	pub fn properties(&self) -> Option<&[Property]> {
		self.properties.as_deref()
	}

	/// Replaces the addressed access token.
	pub fn set_access_token(&mut self, access_token: impl Into<AccessToken>) -> &mut Self {
		self.access_token = access_token.into();

		self
	}

	/// Sets the new expiry in milliseconds; `0` or a negative value keeps the current expiry.
	pub fn set_access_token_expires_at(&mut self, expires_at: i64) -> &mut Self {
		self.access_token_expires_at = expires_at;

		self
	}

	/// Sets the new expiry from an instant, truncated to whole milliseconds.
	pub fn set_expires_at(&mut self, instant: OffsetDateTime) -> &mut Self {
		self.set_access_token_expires_at(datetime_to_millis(instant))
	}

	/// Replaces the scope set. An empty iterator sends an empty list.
	pub fn set_scopes<I, S>(&mut self, scopes: I) -> &mut Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.scopes = Some(scopes.into_iter().map(Into::into).collect());

		self
	}

	/// Leaves the scope set unchanged.
	pub fn unset_scopes(&mut self) -> &mut Self {
		self.scopes = None;

		self
	}

	/// Replaces the property set. An empty iterator sends an empty list.
	pub fn set_properties<I>(&mut self, properties: I) -> &mut Self
	where
		I: IntoIterator<Item = Property>,
	{
		self.properties = Some(properties.into_iter().collect());

		self
	}

	/// Leaves the property set unchanged.
	pub fn unset_properties(&mut self) -> &mut Self {
		self.properties = None;

		self
	}

	/// Consuming variant of [`set_access_token_expires_at`](Self::set_access_token_expires_at).
	pub fn with_access_token_expires_at(mut self, expires_at: i64) -> Self {
		self.set_access_token_expires_at(expires_at);

		self
	}

	/// Consuming variant of [`set_expires_at`](Self::set_expires_at).
	pub fn with_expires_at(mut self, instant: OffsetDateTime) -> Self {
		self.set_expires_at(instant);

		self
	}

	/// Consuming variant of [`set_scopes`](Self::set_scopes).
	pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.set_scopes(scopes);

		self
	}

	/// Consuming variant of [`set_properties`](Self::set_properties).
	pub fn with_properties<I>(mut self, properties: I) -> Self
	where
		I: IntoIterator<Item = Property>,
	{
		self.set_properties(properties);

		self
	}

	/// Returns `true` if the request asks for a new expiry.
	pub fn changes_expiry(&self) -> bool {
		!expiry_is_unchanged(&self.access_token_expires_at)
	}

	/// Returns `true` if the request replaces the scope set.
	pub fn changes_scopes(&self) -> bool {
		self.scopes.is_some()
	}

	/// Returns `true` if the request replaces the property set.
	pub fn changes_properties(&self) -> bool {
		self.properties.is_some()
	}

	/// Returns `true` if the request only addresses the token and changes nothing.
	pub fn is_noop(&self) -> bool {
		!self.changes_expiry() && !self.changes_scopes() && !self.changes_properties()
	}

	/// New expiry as an instant; `None` when unchanged or outside the representable range.
	pub fn expiry_update(&self) -> Option<OffsetDateTime> {
		if self.changes_expiry() { millis_to_datetime(self.access_token_expires_at) } else { None }
	}
}
impl ApiRequest for TokenUpdateRequest {
	type Response = TokenUpdateResponse;

	const LABEL: &'static str = "token_update";
	const PATH: &'static str = "auth/token/update";
	const RESPONSE_LABEL: &'static str = "token_update_response";

	fn access_token_ref(&self) -> Option<&AccessToken> {
		Some(&self.access_token)
	}
}

pub(crate) fn millis_to_datetime(millis: i64) -> Option<OffsetDateTime> {
	OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}

pub(crate) fn datetime_to_millis(instant: OffsetDateTime) -> i64 {
	// Every instant `time` can represent fits in i64 milliseconds.
	i64::try_from(instant.unix_timestamp_nanos().div_euclid(1_000_000)).unwrap_or(i64::MAX)
}

fn expiry_is_unchanged(expires_at: &i64) -> bool {
	*expires_at <= 0
}
