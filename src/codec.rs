//! JSON encoding boundary between payload types and the service wire format.
//!
//! Decoding goes through `serde_path_to_error`, so a malformed body reports the field path that
//! failed (e.g. `properties[0].key`). Unknown fields are ignored, letting newer service versions
//! add fields without breaking older clients.

// self
use crate::{
	_prelude::*,
	dto::ApiRequest,
	error::CodecError,
	obs::{self, CodecOp, CodecOutcome},
};

/// Serializes any payload, labelling failures with `payload`.
pub fn encode<T>(payload: &'static str, value: &T) -> Result<String>
where
	T: ?Sized + Serialize,
{
	let encoded = serde_json::to_string(value).map_err(|source| CodecError::Encode { payload, source });

	observe(payload, CodecOp::Encode, encoded.is_ok());

	Ok(encoded?)
}

/// Parses any payload, labelling failures with `payload`.
pub fn decode<T>(payload: &'static str, body: &str) -> Result<T>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_str(body);
	let decoded = serde_path_to_error::deserialize(&mut de)
		.map_err(|source| CodecError::Decode { payload, source })
		.and_then(|value| {
			de.end().map_err(|source| CodecError::TrailingCharacters { payload, source })?;

			Ok(value)
		});

	observe(payload, CodecOp::Decode, decoded.is_ok());

	Ok(decoded?)
}

/// Serializes a request body for its endpoint.
pub fn encode_request<R>(request: &R) -> Result<String>
where
	R: ApiRequest,
{
	if let Some(token) = request.access_token_ref() {
		obs::trace_token_reference(R::LABEL, || token.fingerprint());
	}

	encode(R::LABEL, request)
}

/// Parses a request body, e.g. one captured by a proxy or test double.
pub fn decode_request<R>(body: &str) -> Result<R>
where
	R: ApiRequest,
{
	decode(R::LABEL, body)
}

/// Parses the response body returned by the endpoint `R` targets.
pub fn decode_response<R>(body: &str) -> Result<R::Response>
where
	R: ApiRequest,
{
	decode(R::RESPONSE_LABEL, body)
}

fn observe(payload: &'static str, op: CodecOp, ok: bool) {
	let outcome = if ok { CodecOutcome::Success } else { CodecOutcome::Failure };

	obs::observe_codec(payload, op, outcome);
}
