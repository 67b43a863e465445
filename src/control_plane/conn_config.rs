use serde::{Deserialize, Serialize};

/// Connection options for the AWS control plane.
///
/// Unset values fall back to the standard AWS environment and profile resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
	pub region: Option<String>,
	pub profile: Option<String>,
	/// Override of the API Gateway endpoint (e.g. a local emulator).
	pub endpoint_url: Option<String>,
}

/// Chainable Setters
impl ConnectionConfig {
	#[must_use]
	pub fn with_region(mut self, region: impl Into<String>) -> Self {
		self.region = Some(region.into());
		self
	}

	#[must_use]
	pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
		self.profile = Some(profile.into());
		self
	}

	#[must_use]
	pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
		self.endpoint_url = Some(endpoint_url.into());
		self
	}
}
