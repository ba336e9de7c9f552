// self
use crate::obs::{CodecOp, CodecOutcome};

/// Emits a debug event describing a codec call (when enabled).
pub fn trace_codec_outcome(payload: &'static str, op: CodecOp, outcome: CodecOutcome) {
	#[cfg(feature = "tracing")]
	{
		match outcome {
			CodecOutcome::Success => tracing::debug!(
				target: "authlete_common.codec",
				payload,
				op = op.as_str(),
				outcome = outcome.as_str()
			),
			CodecOutcome::Failure => tracing::warn!(
				target: "authlete_common.codec",
				payload,
				op = op.as_str(),
				outcome = outcome.as_str()
			),
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (payload, op, outcome);
	}
}

/// Emits a debug event identifying the access token a request addresses (when enabled).
///
/// Only the fingerprint is recorded; the token itself never reaches the subscriber.
pub fn trace_token_reference(payload: &'static str, fingerprint: impl FnOnce() -> String) {
	#[cfg(feature = "tracing")]
	{
		if tracing::enabled!(target: "authlete_common.codec", tracing::Level::DEBUG) {
			tracing::debug!(
				target: "authlete_common.codec",
				payload,
				token_fingerprint = %fingerprint()
			);
		}
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (payload, fingerprint);
	}
}
