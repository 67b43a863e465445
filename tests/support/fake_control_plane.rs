use apigw::Result;
use apigw::control_plane::{
	ControlPlane, ControlPlaneError, CreateModelRequest, CreateRestApiRequest, FaultKind, PatchOperation,
};
use apigw::resource::{ModelResource, RestApiResource};
use std::collections::HashMap;
use std::sync::Mutex;

/// A control-plane call, as recorded by `FakeControlPlane`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	GetRestApi {
		rest_api_id: String,
	},
	CreateRestApi(CreateRestApiRequest),
	UpdateRestApi {
		rest_api_id: String,
		patch_operations: Vec<PatchOperation>,
	},
	GetModel {
		rest_api_id: String,
		model_name: String,
		flatten: bool,
	},
	CreateModel(CreateModelRequest),
	UpdateModel {
		rest_api_id: String,
		model_name: String,
		patch_operations: Vec<PatchOperation>,
	},
}

impl Call {
	pub const fn is_mutating(&self) -> bool {
		!matches!(self, Self::GetRestApi { .. } | Self::GetModel { .. })
	}
}

/// In-memory control plane that records every call.
///
/// Resources live in maps keyed like the real service (REST API id, and
/// `(rest_api_id, model name)`). Faults can be injected per operation, optionally
/// restricted to one resource key.
#[derive(Debug, Default)]
pub struct FakeControlPlane {
	rest_apis: Mutex<HashMap<String, RestApiResource>>,
	models: Mutex<HashMap<(String, String), ModelResource>>,
	faults: Mutex<Vec<(&'static str, Option<String>, FaultKind)>>,
	calls: Mutex<Vec<Call>>,
}

/// Seeding
impl FakeControlPlane {
	pub fn with_rest_api(self, rest_api: RestApiResource) -> Self {
		let id = rest_api.id.clone().unwrap_or_default();
		self.rest_apis.lock().unwrap().insert(id, rest_api);
		self
	}

	pub fn with_model(self, rest_api_id: &str, model: ModelResource) -> Self {
		let name = model.name.clone().unwrap_or_default();
		self.models.lock().unwrap().insert((rest_api_id.to_string(), name), model);
		self
	}

	/// Fail every call of `operation` (e.g. `"GetModel"`) with `kind`.
	pub fn with_fault(self, operation: &'static str, kind: FaultKind) -> Self {
		self.faults.lock().unwrap().push((operation, None, kind));
		self
	}

	/// Fail calls of `operation` for the resource `key` only (REST API id or model name).
	pub fn with_fault_for(self, operation: &'static str, key: &str, kind: FaultKind) -> Self {
		self.faults.lock().unwrap().push((operation, Some(key.to_string()), kind));
		self
	}
}

/// Inspection
impl FakeControlPlane {
	pub fn calls(&self) -> Vec<Call> {
		self.calls.lock().unwrap().clone()
	}

	pub fn mutating_calls(&self) -> Vec<Call> {
		self.calls().into_iter().filter(Call::is_mutating).collect()
	}

	pub fn model(&self, rest_api_id: &str, name: &str) -> Option<ModelResource> {
		self.models
			.lock()
			.unwrap()
			.get(&(rest_api_id.to_string(), name.to_string()))
			.cloned()
	}

	pub fn rest_api(&self, id: &str) -> Option<RestApiResource> {
		self.rest_apis.lock().unwrap().get(id).cloned()
	}
}

// region:    --- Support

impl FakeControlPlane {
	fn record(&self, call: Call) {
		self.calls.lock().unwrap().push(call);
	}

	fn check_fault(&self, operation: &'static str, key: &str) -> Result<()> {
		let faults = self.faults.lock().unwrap();
		let fault = faults
			.iter()
			.find(|(op, fault_key, _)| *op == operation && fault_key.as_deref().is_none_or(|k| k == key));
		match fault {
			Some((_, _, kind)) => Err(ControlPlaneError::new(*kind, operation, format!("injected {kind} fault")).into()),
			None => Ok(()),
		}
	}

	fn not_found(operation: &'static str) -> apigw::Error {
		ControlPlaneError::new(FaultKind::NotFound, operation, "Invalid resource identifier specified")
			.with_code("NotFoundException")
			.into()
	}
}

fn apply_patch(patch_operations: &[PatchOperation], mut set: impl FnMut(&str, String)) {
	for patch in patch_operations {
		set(patch.path.trim_start_matches('/'), patch.value.clone());
	}
}

// endregion: --- Support

impl ControlPlane for FakeControlPlane {
	async fn get_rest_api(&self, rest_api_id: &str) -> Result<RestApiResource> {
		self.record(Call::GetRestApi {
			rest_api_id: rest_api_id.to_string(),
		});
		self.check_fault("GetRestApi", rest_api_id)?;
		self.rest_api(rest_api_id).ok_or_else(|| Self::not_found("GetRestApi"))
	}

	async fn create_rest_api(&self, request: &CreateRestApiRequest) -> Result<RestApiResource> {
		self.record(Call::CreateRestApi(request.clone()));
		self.check_fault("CreateRestApi", &request.name)?;
		let rest_api = RestApiResource {
			id: Some(request.name.clone()),
			name: Some(request.name.clone()),
			description: request.description.clone(),
			version: None,
		};
		self.rest_apis.lock().unwrap().insert(request.name.clone(), rest_api.clone());
		Ok(rest_api)
	}

	async fn update_rest_api(&self, rest_api_id: &str, patch_operations: &[PatchOperation]) -> Result<RestApiResource> {
		self.record(Call::UpdateRestApi {
			rest_api_id: rest_api_id.to_string(),
			patch_operations: patch_operations.to_vec(),
		});
		self.check_fault("UpdateRestApi", rest_api_id)?;
		let mut rest_apis = self.rest_apis.lock().unwrap();
		let rest_api = rest_apis.get_mut(rest_api_id).ok_or_else(|| Self::not_found("UpdateRestApi"))?;
		apply_patch(patch_operations, |attribute, value| {
			if attribute == "description" {
				rest_api.description = Some(value);
			}
		});
		Ok(rest_api.clone())
	}

	async fn get_model(&self, rest_api_id: &str, model_name: &str, flatten: bool) -> Result<ModelResource> {
		self.record(Call::GetModel {
			rest_api_id: rest_api_id.to_string(),
			model_name: model_name.to_string(),
			flatten,
		});
		self.check_fault("GetModel", model_name)?;
		self.model(rest_api_id, model_name).ok_or_else(|| Self::not_found("GetModel"))
	}

	async fn create_model(&self, request: &CreateModelRequest) -> Result<ModelResource> {
		self.record(Call::CreateModel(request.clone()));
		self.check_fault("CreateModel", &request.name)?;
		let model = ModelResource {
			id: Some(format!("id-{}", request.name)),
			name: Some(request.name.clone()),
			description: Some(request.description.clone()),
			schema: request.schema.clone(),
			content_type: Some(request.content_type.clone()),
		};
		self.models
			.lock()
			.unwrap()
			.insert((request.rest_api_id.clone(), request.name.clone()), model.clone());
		Ok(model)
	}

	async fn update_model(
		&self,
		rest_api_id: &str,
		model_name: &str,
		patch_operations: &[PatchOperation],
	) -> Result<ModelResource> {
		self.record(Call::UpdateModel {
			rest_api_id: rest_api_id.to_string(),
			model_name: model_name.to_string(),
			patch_operations: patch_operations.to_vec(),
		});
		self.check_fault("UpdateModel", model_name)?;
		let mut models = self.models.lock().unwrap();
		let model = models
			.get_mut(&(rest_api_id.to_string(), model_name.to_string()))
			.ok_or_else(|| Self::not_found("UpdateModel"))?;
		apply_patch(patch_operations, |attribute, value| match attribute {
			"description" => model.description = Some(value),
			"schema" => model.schema = Some(value),
			_ => {}
		});
		Ok(model.clone())
	}
}
