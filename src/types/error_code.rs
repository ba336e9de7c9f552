//! Values of the `error` parameter returned by OAuth 2.0 and OpenID Connect endpoints.
//!
//! Sources: RFC 6749 §4.1.2.1, §4.2.2.1 and §5.2; RFC 6750 §3.1; OpenID Connect Core 1.0
//! §3.1.2.6. Authlete accepts `request` and `request_uri`, so it never emits
//! [`ErrorCode::RequestNotSupported`] or [`ErrorCode::RequestUriNotSupported`] itself.

// self
use crate::{_prelude::*, error::UnknownValueError};

macro_rules! def_error_codes {
	($($variant:ident => $wire:literal, $doc:literal;)+) => {
		/// Standardized OAuth 2.0 / OpenID Connect error identifier.
		#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		pub enum ErrorCode {
			$(
				#[doc = $doc]
				#[serde(rename = $wire)]
				$variant,
			)+
		}
		impl ErrorCode {
			/// Every error code, in declaration order.
			pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

			/// Returns the wire identifier.
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $wire,)+
				}
			}

			/// Returns the protocol's description of the condition.
			pub const fn description(self) -> &'static str {
				match self {
					$(Self::$variant => $doc,)+
				}
			}
		}
	};
}

def_error_codes! {
	AccessDenied => "access_denied",
		"The resource owner or authorization server denied the request.";
	AccountSelectionRequired => "account_selection_required",
		"The end-user must select a session at the authorization server.";
	ConsentRequired => "consent_required",
		"The authorization server requires end-user consent.";
	InsufficientScope => "insufficient_scope",
		"The request requires higher privileges than provided by the access token.";
	InteractionRequired => "interaction_required",
		"The authorization server requires end-user interaction of some form to proceed.";
	InvalidClient => "invalid_client",
		"Client authentication failed.";
	InvalidGrant => "invalid_grant",
		"The authorization grant or refresh token is invalid, expired, revoked, mismatched, or issued to another client.";
	InvalidRequest => "invalid_request",
		"The request is missing a parameter, repeats one, includes an invalid value, or is otherwise malformed.";
	InvalidRequestUri => "invalid_request_uri",
		"The `request_uri` returns an error or contains invalid data.";
	InvalidRequestObject => "invalid_request_object",
		"The `request` parameter contains an invalid request object.";
	InvalidScope => "invalid_scope",
		"The requested scope is invalid, unknown, or malformed.";
	InvalidToken => "invalid_token",
		"The access token is expired, revoked, malformed, or otherwise invalid.";
	LoginRequired => "login_required",
		"The authorization server requires end-user authentication.";
	RegistrationNotSupported => "registration_not_supported",
		"The provider does not support the `registration` parameter.";
	RequestNotSupported => "request_not_supported",
		"The provider does not support the `request` parameter.";
	RequestUriNotSupported => "request_uri_not_supported",
		"The provider does not support the `request_uri` parameter.";
	ServerError => "server_error",
		"The authorization server encountered an unexpected condition.";
	TemporarilyUnavailable => "temporarily_unavailable",
		"The authorization server is temporarily overloaded or under maintenance.";
	UnauthorizedClient => "unauthorized_client",
		"The client is not authorized to use this method to obtain a code or token.";
	UnsupportedGrantType => "unsupported_grant_type",
		"The authorization grant type is not supported by the authorization server.";
	UnsupportedResponseType => "unsupported_response_type",
		"The authorization server does not support obtaining a code or token using this method.";
}

impl Display for ErrorCode {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ErrorCode {
	type Err = UnknownValueError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.iter()
			.copied()
			.find(|code| code.as_str() == s)
			.ok_or_else(|| UnknownValueError::new("error code", s))
	}
}
impl AsRef<str> for ErrorCode {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

#[cfg(feature = "oauth2")]
mod oauth2_interop {
	// crates.io
	use oauth2::basic::BasicErrorResponseType;
	// self
	use super::*;

	impl TryFrom<&BasicErrorResponseType> for ErrorCode {
		type Error = UnknownValueError;

		fn try_from(value: &BasicErrorResponseType) -> Result<Self, Self::Error> {
			match value {
				BasicErrorResponseType::InvalidClient => Ok(Self::InvalidClient),
				BasicErrorResponseType::InvalidGrant => Ok(Self::InvalidGrant),
				BasicErrorResponseType::InvalidRequest => Ok(Self::InvalidRequest),
				BasicErrorResponseType::InvalidScope => Ok(Self::InvalidScope),
				BasicErrorResponseType::UnauthorizedClient => Ok(Self::UnauthorizedClient),
				BasicErrorResponseType::UnsupportedGrantType => Ok(Self::UnsupportedGrantType),
				BasicErrorResponseType::Extension(other) => other.parse(),
			}
		}
	}
	impl From<ErrorCode> for BasicErrorResponseType {
		fn from(value: ErrorCode) -> Self {
			match value {
				ErrorCode::InvalidClient => Self::InvalidClient,
				ErrorCode::InvalidGrant => Self::InvalidGrant,
				ErrorCode::InvalidRequest => Self::InvalidRequest,
				ErrorCode::InvalidScope => Self::InvalidScope,
				ErrorCode::UnauthorizedClient => Self::UnauthorizedClient,
				ErrorCode::UnsupportedGrantType => Self::UnsupportedGrantType,
				other => Self::Extension(other.as_str().to_owned()),
			}
		}
	}

	#[cfg(test)]
	mod tests {
		// self
		use super::*;

		#[test]
		fn basic_error_types_map_both_ways() {
			for code in ErrorCode::ALL.iter().copied() {
				let basic = BasicErrorResponseType::from(code);

				assert_eq!(ErrorCode::try_from(&basic), Ok(code));
			}

			let unknown = BasicErrorResponseType::Extension("slow_down".into());

			assert!(ErrorCode::try_from(&unknown).is_err());
		}
	}
}
