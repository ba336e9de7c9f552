// crates.io
use color_eyre::Result;
use serde::Deserialize;
// self
use authlete_common::{codec, error::Error, types::ErrorCode};

#[derive(Debug, Deserialize)]
struct ErrorResponse {
	error: ErrorCode,
	error_description: Option<String>,
}

#[test]
fn error_response_bodies_decode_into_codes() -> Result<()> {
	let body = r#"{"error":"invalid_token","error_description":"The access token expired."}"#;
	let response = codec::decode::<ErrorResponse>("error_response", body)?;

	assert_eq!(response.error, ErrorCode::InvalidToken);
	assert_eq!(response.error_description.as_deref(), Some("The access token expired."));

	Ok(())
}

#[test]
fn oidc_codes_are_part_of_the_vocabulary() -> Result<()> {
	for (wire, code) in [
		("login_required", ErrorCode::LoginRequired),
		("consent_required", ErrorCode::ConsentRequired),
		("account_selection_required", ErrorCode::AccountSelectionRequired),
		("interaction_required", ErrorCode::InteractionRequired),
		("invalid_request_object", ErrorCode::InvalidRequestObject),
	] {
		assert_eq!(wire.parse::<ErrorCode>()?, code);
	}

	Ok(())
}

#[test]
fn unknown_codes_fail_with_field_path() {
	let err = codec::decode::<ErrorResponse>("error_response", r#"{"error":"slow_down"}"#)
		.expect_err("Codes outside the vocabulary must be rejected.");

	assert!(matches!(err, Error::Codec(_)));
	assert_eq!(err.to_string(), "Failed to decode the error_response payload at `error`.");
}

#[test]
fn unknown_code_converts_into_crate_error() {
	let err: Error = "slow_down".parse::<ErrorCode>().expect_err("Unknown code.").into();

	assert_eq!(err.to_string(), "Unknown error code value: slow_down.");
}
