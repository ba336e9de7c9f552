//! Arbitrary key/value metadata attached to tokens by the service operator.

// self
use crate::_prelude::*;

/// Key/value pair associated with an access token.
///
/// Hidden properties are stored by the service but not exposed to the client application.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
	key: String,
	value: String,
	#[serde(default, skip_serializing_if = "is_false")]
	hidden: bool,
}
impl Property {
	/// Creates a visible property.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self { key: key.into(), value: value.into(), hidden: false }
	}

	/// Creates a hidden property.
	pub fn hidden(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self::new(key, value).with_hidden(true)
	}

	/// Overrides the hidden flag.
	pub fn with_hidden(mut self, hidden: bool) -> Self {
		self.hidden = hidden;

		self
	}

	/// Property name.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Property value.
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Whether the property is hidden from client applications.
	pub fn is_hidden(&self) -> bool {
		self.hidden
	}
}
impl Debug for Property {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let value: &dyn Debug = if self.hidden { &"<hidden>" } else { &self.value };

		f.debug_struct("Property")
			.field("key", &self.key)
			.field("value", value)
			.field("hidden", &self.hidden)
			.finish()
	}
}

fn is_false(flag: &bool) -> bool {
	!*flag
}
