use crate::Result;
use crate::control_plane::PatchOperation;
use crate::resource::{ModelResource, RestApiResource};
use serde::Serialize;

/// The keyed calls issued against the API Gateway control plane.
///
/// Every failure must come back as `Error::ControlPlane` with its `FaultKind` already
/// classified, so the reconcilers can tell "not found" apart from any other fault.
// NOTE: ControlPlane is only consumed through generics (never `dyn`), so async fn is fine here.
#[allow(async_fn_in_trait)]
pub trait ControlPlane {
	// -- Rest Api
	async fn get_rest_api(&self, rest_api_id: &str) -> Result<RestApiResource>;

	async fn create_rest_api(&self, request: &CreateRestApiRequest) -> Result<RestApiResource>;

	async fn update_rest_api(&self, rest_api_id: &str, patch_operations: &[PatchOperation]) -> Result<RestApiResource>;

	// -- Model
	async fn get_model(&self, rest_api_id: &str, model_name: &str, flatten: bool) -> Result<ModelResource>;

	async fn create_model(&self, request: &CreateModelRequest) -> Result<ModelResource>;

	async fn update_model(
		&self,
		rest_api_id: &str,
		model_name: &str,
		patch_operations: &[PatchOperation],
	) -> Result<ModelResource>;
}

// region:    --- Requests

/// Payload of a `CreateRestApi` call.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateRestApiRequest {
	pub name: String,
	pub description: Option<String>,
}

/// Payload of a `CreateModel` call.
///
/// `description` is always sent (empty when not configured), `schema` only when set.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateModelRequest {
	pub rest_api_id: String,
	pub name: String,
	pub content_type: String,
	pub description: String,
	pub schema: Option<String>,
}

// endregion: --- Requests
