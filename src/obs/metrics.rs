// self
use crate::obs::{CodecOp, CodecOutcome};

/// Records a codec outcome via the global metrics recorder (when enabled).
pub fn record_codec_outcome(payload: &'static str, op: CodecOp, outcome: CodecOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"authlete_common_codec_total",
			"payload" => payload,
			"op" => op.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (payload, op, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_codec_outcome_without_recorder() {
		record_codec_outcome("token_update", CodecOp::Decode, CodecOutcome::Failure);
	}
}
