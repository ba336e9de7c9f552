// crates.io
use color_eyre::Result;
use serde_json::{Value, json};
// self
use authlete_common::{
	codec,
	config::ServiceConfig,
	dto::{ApiRequest, Property, TokenUpdateAction, TokenUpdateRequest},
};

const ACCESS_TOKEN: &str = "tok-123";
const EXPIRES_AT: i64 = 1_700_000_000_000;

fn full_request() -> TokenUpdateRequest {
	TokenUpdateRequest::new(ACCESS_TOKEN)
		.with_access_token_expires_at(EXPIRES_AT)
		.with_scopes(["read", "write"])
		.with_properties([Property::new("k1", "v1")])
}

fn encode_value(request: &TokenUpdateRequest) -> Result<Value> {
	Ok(serde_json::from_str(&codec::encode_request(request)?)?)
}

#[test]
fn access_token_only_changes_nothing() -> Result<()> {
	let request = TokenUpdateRequest::new("tok-abc");

	assert!(request.is_noop());
	assert_eq!(encode_value(&request)?, json!({ "accessToken": "tok-abc" }));

	Ok(())
}

#[test]
fn full_request_round_trips() -> Result<()> {
	let request = full_request();
	let body = codec::encode_request(&request)?;

	assert_eq!(
		serde_json::from_str::<Value>(&body)?,
		json!({
			"accessToken": "tok-123",
			"accessTokenExpiresAt": 1_700_000_000_000_i64,
			"scopes": ["read", "write"],
			"properties": [{ "key": "k1", "value": "v1" }]
		})
	);

	let decoded = codec::decode_request::<TokenUpdateRequest>(&body)?;

	assert_eq!(decoded, request);
	assert_eq!(decoded.access_token(), ACCESS_TOKEN);
	assert_eq!(decoded.access_token_expires_at(), EXPIRES_AT);
	assert_eq!(decoded.scopes(), Some(&["read".to_owned(), "write".to_owned()][..]));
	assert_eq!(decoded.properties(), Some(&[Property::new("k1", "v1")][..]));

	Ok(())
}

#[test]
fn non_positive_expiry_is_indistinguishable_from_unset() -> Result<()> {
	let unset = encode_value(&TokenUpdateRequest::new("tok"))?;

	for sentinel in [0, -1, -EXPIRES_AT] {
		let request = TokenUpdateRequest::new("tok").with_access_token_expires_at(sentinel);

		assert_eq!(encode_value(&request)?, unset);
	}

	let positive = TokenUpdateRequest::new("tok").with_access_token_expires_at(EXPIRES_AT);

	assert_ne!(encode_value(&positive)?, unset);

	Ok(())
}

#[test]
fn empty_lists_stay_distinct_from_unset() -> Result<()> {
	let unset = TokenUpdateRequest::new("tok");
	let cleared = TokenUpdateRequest::new("tok")
		.with_scopes(Vec::<String>::new())
		.with_properties(Vec::<Property>::new());

	assert_eq!(encode_value(&unset)?, json!({ "accessToken": "tok" }));
	assert_eq!(
		encode_value(&cleared)?,
		json!({ "accessToken": "tok", "scopes": [], "properties": [] })
	);

	let decoded = codec::decode_request::<TokenUpdateRequest>(&codec::encode_request(&cleared)?)?;

	assert_eq!(decoded.scopes(), Some(&[][..]));
	assert_eq!(decoded.properties(), Some(&[][..]));
	assert!(decoded.changes_scopes());
	assert!(!decoded.is_noop());

	Ok(())
}

#[test]
fn explicit_null_reads_as_unchanged() -> Result<()> {
	let decoded = codec::decode_request::<TokenUpdateRequest>(
		r#"{"accessToken":"tok","scopes":null,"properties":null,"accessTokenExpiresAt":0}"#,
	)?;

	assert!(decoded.is_noop());

	Ok(())
}

#[test]
fn unknown_fields_are_ignored() -> Result<()> {
	let decoded = codec::decode_request::<TokenUpdateRequest>(
		r#"{"accessToken":"tok","accessTokenPersistent":true}"#,
	)?;

	assert_eq!(decoded, TokenUpdateRequest::new("tok"));

	Ok(())
}

#[test]
fn in_place_setters_return_the_same_instance() {
	let mut request = TokenUpdateRequest::default();
	let origin: *const TokenUpdateRequest = &request;
	let chained = request
		.set_access_token("tok-abc")
		.set_access_token_expires_at(EXPIRES_AT)
		.set_scopes(["read"])
		.set_properties([Property::hidden("k", "v")]);

	assert!(std::ptr::eq(origin, chained));
	assert_eq!(request.access_token(), "tok-abc");
	assert_eq!(request.access_token_expires_at(), EXPIRES_AT);
	assert_eq!(request.scopes().map(<[String]>::len), Some(1));
	assert_eq!(request.properties().map(|p| p[0].is_hidden()), Some(true));
}

#[test]
fn scope_order_and_duplicates_are_preserved() -> Result<()> {
	let request = TokenUpdateRequest::new("tok").with_scopes(["write", "read", "write"]);

	assert_eq!(encode_value(&request)?["scopes"], json!(["write", "read", "write"]));

	Ok(())
}

#[test]
fn empty_access_token_is_left_to_the_service() -> Result<()> {
	let request = TokenUpdateRequest::default();

	assert!(request.access_token().is_empty());
	assert_eq!(encode_value(&request)?, json!({ "accessToken": "" }));

	Ok(())
}

#[test]
fn request_resolves_endpoint_and_response() -> Result<()> {
	let url = ServiceConfig::default().endpoint_url::<TokenUpdateRequest>()?;

	assert_eq!(url.path(), "/api/auth/token/update");

	let response = codec::decode_response::<TokenUpdateRequest>(
		r#"{"resultCode":"A135001","resultMessage":"ok","action":"OK","accessToken":"tok-123","accessTokenExpiresAt":1700000000000,"scopes":["read","write"]}"#,
	)?;

	assert_eq!(response.action, TokenUpdateAction::Ok);
	assert!(response.is_success());
	assert_eq!(response.access_token_expires_at, EXPIRES_AT);
	assert_eq!(TokenUpdateRequest::PATH, "auth/token/update");

	Ok(())
}
