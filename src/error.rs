//! Crate-level error types shared by the codec, configuration, and vocabulary helpers.
//!
//! Payload types never fail on their own; validation of token existence, scope legality, and
//! property legality belongs to the remote service and is reported through response payloads.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Payload could not be encoded or decoded.
	#[error(transparent)]
	Codec(#[from] CodecError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// A wire string does not belong to a closed vocabulary.
	#[error(transparent)]
	UnknownValue(#[from] UnknownValueError),
}

/// JSON encoding and decoding failures.
#[derive(Debug, ThisError)]
pub enum CodecError {
	/// Payload could not be serialized.
	#[error("Failed to encode the {payload} payload.")]
	Encode {
		/// Payload label.
		payload: &'static str,
		/// Underlying serializer failure.
		#[source]
		source: serde_json::Error,
	},
	/// Payload could not be parsed; the source names the offending field path.
	#[error("Failed to decode the {payload} payload at `{path}`.", path = .source.path())]
	Decode {
		/// Payload label.
		payload: &'static str,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Body continues after a complete payload.
	#[error("The {payload} payload is followed by trailing characters.")]
	TrailingCharacters {
		/// Payload label.
		payload: &'static str,
		/// Underlying parser failure.
		#[source]
		source: serde_json::Error,
	},
}

/// Configuration and validation failures raised while resolving API endpoints.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base URL cannot carry a path (e.g. `mailto:` or `data:` URLs).
	#[error("Base URL cannot be used as an API root: {url}.")]
	CannotBeABase {
		/// Offending URL.
		url: String,
	},
	/// Base URL must use HTTPS.
	#[error("Base URL must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Offending URL.
		url: String,
	},
	/// Endpoint URL could not be joined onto the base URL.
	#[error("Endpoint `{path}` cannot be resolved against the base URL.")]
	InvalidEndpoint {
		/// Relative API path.
		path: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
}

/// Raised when parsing a string that is not part of a closed vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown {kind} value: {value}.")]
pub struct UnknownValueError {
	/// Vocabulary name (e.g. `error code`).
	pub kind: &'static str,
	/// Rejected input.
	pub value: String,
}
impl UnknownValueError {
	/// Creates an error for the given vocabulary and input.
	pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
		Self { kind, value: value.into() }
	}
}
