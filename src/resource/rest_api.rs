use crate::Result;
use crate::control_plane::{ControlPlane, CreateRestApiRequest, PatchOperation, replace_operations};
use crate::params::RestApiSpec;
use crate::resource::{ResourceKind, ResourceSpec, RestApiResource};

impl RestApiSpec {
	/// The `CreateRestApi` payload. The configured id doubles as the name.
	#[must_use]
	pub fn create_request(&self) -> CreateRestApiRequest {
		CreateRestApiRequest {
			name: self.id.clone(),
			description: self.description().map(ToString::to_string),
		}
	}
}

impl ResourceSpec for RestApiSpec {
	type Resource = RestApiResource;

	const KIND: ResourceKind = ResourceKind::RestApi;

	fn key(&self) -> String {
		self.id.clone()
	}

	async fn fetch<C: ControlPlane>(&self, control_plane: &C) -> Result<RestApiResource> {
		control_plane.get_rest_api(&self.id).await
	}

	async fn create<C: ControlPlane>(&self, control_plane: &C) -> Result<RestApiResource> {
		control_plane.create_rest_api(&self.create_request()).await
	}

	fn patch_operations(&self) -> Vec<PatchOperation> {
		replace_operations([("description", self.description())])
	}

	async fn patch<C: ControlPlane>(
		&self,
		control_plane: &C,
		patch_operations: &[PatchOperation],
	) -> Result<RestApiResource> {
		control_plane.update_rest_api(&self.id, patch_operations).await
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rest_api_create_request_omits_empty_description() {
		let req = RestApiSpec::new("api").with_description("").create_request();
		assert_eq!(
			req,
			CreateRestApiRequest {
				name: "api".to_string(),
				description: None
			}
		);
	}

	#[test]
	fn test_rest_api_patch_operations() {
		assert!(RestApiSpec::new("api").patch_operations().is_empty());
		assert_eq!(
			RestApiSpec::new("api").with_description("d").patch_operations(),
			vec![PatchOperation::replace("description", "d")]
		);
	}
}

// endregion: --- Tests
