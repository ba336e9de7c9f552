//! Optional observability hooks for payload encoding and decoding.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit `authlete_common.codec` debug events with the `payload`, `op`, and
//!   `outcome` fields.
//! - Enable `metrics` to increment the `authlete_common_codec_total` counter, labeled by
//!   `payload` + `op` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Direction of a codec call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodecOp {
	/// Payload serialized for transmission.
	Encode,
	/// Payload parsed from a service body.
	Decode,
}
impl CodecOp {
	/// Returns a stable label suitable for event or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CodecOp::Encode => "encode",
			CodecOp::Decode => "decode",
		}
	}
}
impl Display for CodecOp {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each codec call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodecOutcome {
	/// The payload was encoded or decoded.
	Success,
	/// The codec returned an error to the caller.
	Failure,
}
impl CodecOutcome {
	/// Returns a stable label suitable for event or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CodecOutcome::Success => "success",
			CodecOutcome::Failure => "failure",
		}
	}
}
impl Display for CodecOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records a codec call through every enabled backend.
pub fn observe_codec(payload: &'static str, op: CodecOp, outcome: CodecOutcome) {
	trace_codec_outcome(payload, op, outcome);
	record_codec_outcome(payload, op, outcome);
}
