use crate::Result;
use crate::control_plane::{ControlPlane, CreateModelRequest, PatchOperation, replace_operations};
use crate::params::ModelSpec;
use crate::resource::{ModelResource, ResourceKind, ResourceSpec};

impl ModelSpec {
	/// The `CreateModel` payload.
	///
	/// `description` falls back to an empty string; `schema` is only attached when set.
	#[must_use]
	pub fn create_request(&self) -> CreateModelRequest {
		CreateModelRequest {
			rest_api_id: self.rest_api_id.clone(),
			name: self.name.clone(),
			content_type: self.content_type.clone(),
			description: self.description().unwrap_or_default().to_string(),
			schema: self.schema().map(ToString::to_string),
		}
	}
}

impl ResourceSpec for ModelSpec {
	type Resource = ModelResource;

	const KIND: ResourceKind = ResourceKind::Model;

	fn key(&self) -> String {
		format!("{}/{}", self.rest_api_id, self.name)
	}

	async fn fetch<C: ControlPlane>(&self, control_plane: &C) -> Result<ModelResource> {
		control_plane.get_model(&self.rest_api_id, &self.name, true).await
	}

	async fn create<C: ControlPlane>(&self, control_plane: &C) -> Result<ModelResource> {
		control_plane.create_model(&self.create_request()).await
	}

	fn patch_operations(&self) -> Vec<PatchOperation> {
		replace_operations([("description", self.description()), ("schema", self.schema())])
	}

	async fn patch<C: ControlPlane>(&self, control_plane: &C, patch_operations: &[PatchOperation]) -> Result<ModelResource> {
		control_plane
			.update_model(&self.rest_api_id, &self.name, patch_operations)
			.await
	}
}

// region:    --- Tests


// endregion: --- Tests
