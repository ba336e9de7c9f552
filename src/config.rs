//! Service endpoint configuration.

// self
use crate::{_prelude::*, dto::ApiRequest, error::ConfigError};

/// Default API root of the hosted service.
pub const DEFAULT_BASE_URL: &str = "https://api.authlete.com/api/";

/// Where payloads are sent; deserializable from application configuration files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
	/// API root that relative request paths are joined onto.
	pub base_url: Url,
}
impl ServiceConfig {
	/// Creates a configuration rooted at `base_url`.
	pub fn new(base_url: Url) -> Result<Self, ConfigError> {
		let config = Self { base_url };

		config.validate()?;

		Ok(config)
	}

	/// Checks that the base URL is an HTTPS URL that can carry a path.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.base_url.cannot_be_a_base() {
			return Err(ConfigError::CannotBeABase { url: self.base_url.to_string() });
		}
		if self.base_url.scheme() != "https" {
			return Err(ConfigError::InsecureEndpoint { url: self.base_url.to_string() });
		}

		Ok(())
	}

	/// Resolves the absolute URL of the endpoint that `R` targets.
	///
	/// A base URL without a trailing slash is treated as a directory, so `.../api` and
	/// `.../api/` resolve identically.
	pub fn endpoint_url<R>(&self) -> Result<Url, ConfigError>
	where
		R: ApiRequest,
	{
		self.validate()?;

		let mut base = self.base_url.clone();

		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());

			base.set_path(&path);
		}

		base.join(R::PATH).map_err(|source| ConfigError::InvalidEndpoint { path: R::PATH, source })
	}
}
impl Default for ServiceConfig {
	fn default() -> Self {
		// `DEFAULT_BASE_URL` is a valid absolute URL.
		Self { base_url: Url::parse(DEFAULT_BASE_URL).unwrap_or_else(|_| unreachable!()) }
	}
}
