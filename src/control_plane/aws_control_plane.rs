use crate::control_plane::{
	ConnectionConfig, ControlPlane, ControlPlaneError, CreateModelRequest, CreateRestApiRequest, FaultKind, PatchOp,
	PatchOperation,
};
use crate::resource::{ModelResource, RestApiResource};
use crate::{Error, Result};
use aws_config::BehaviorVersion;
use aws_sdk_apigateway::Client;
use aws_sdk_apigateway::config::Region;
use aws_sdk_apigateway::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_apigateway::types::{Op, PatchOperation as SdkPatchOperation};
use std::fmt::Debug;
use tracing::debug;

// region:    --- Output Mapping

// The SDK has one output type per operation, all with the same getters.
macro_rules! rest_api_resource {
	($res:expr) => {
		RestApiResource {
			id: $res.id().map(ToString::to_string),
			name: $res.name().map(ToString::to_string),
			description: $res.description().map(ToString::to_string),
			version: $res.version().map(ToString::to_string),
		}
	};
}

macro_rules! model_resource {
	($res:expr) => {
		ModelResource {
			id: $res.id().map(ToString::to_string),
			name: $res.name().map(ToString::to_string),
			description: $res.description().map(ToString::to_string),
			schema: $res.schema().map(ToString::to_string),
			content_type: $res.content_type().map(ToString::to_string),
		}
	};
}

// endregion: --- Output Mapping

/// `ControlPlane` backed by the AWS SDK API Gateway client.
///
/// Construction is the only place the SDK availability is checked: once built,
/// the handle is ready for calls.
#[derive(Debug, Clone)]
pub struct AwsControlPlane {
	client: Client,
}

/// Constructors
impl AwsControlPlane {
	/// Resolve the AWS configuration and build the client.
	///
	/// Fails with `Error::ClientUnavailable` when no region can be resolved,
	/// since every API Gateway call is regional.
	pub async fn connect(config: ConnectionConfig) -> Result<Self> {
		let ConnectionConfig {
			region,
			profile,
			endpoint_url,
		} = config;

		let mut loader = aws_config::defaults(BehaviorVersion::latest());
		if let Some(profile) = profile {
			loader = loader.profile_name(profile);
		}
		if let Some(region) = region {
			loader = loader.region(Region::new(region));
		}
		if let Some(endpoint_url) = endpoint_url {
			loader = loader.endpoint_url(endpoint_url);
		}
		let sdk_config = loader.load().await;

		let Some(region) = sdk_config.region() else {
			return Err(Error::ClientUnavailable {
				cause: "no AWS region configured (set the `region` param, AWS_REGION, or a profile region)".to_string(),
			});
		};
		debug!(%region, "apigateway client configured");

		Ok(Self::from_client(Client::new(&sdk_config)))
	}

	/// Wrap an already configured SDK client.
	#[must_use]
	pub const fn from_client(client: Client) -> Self {
		Self { client }
	}
}

impl ControlPlane for AwsControlPlane {
	async fn get_rest_api(&self, rest_api_id: &str) -> Result<RestApiResource> {
		debug!(rest_api_id, "GetRestApi");
		let res = self
			.client
			.get_rest_api()
			.rest_api_id(rest_api_id)
			.send()
			.await
			.map_err(|err| classify("GetRestApi", err))?;
		Ok(rest_api_resource!(res))
	}

	async fn create_rest_api(&self, request: &CreateRestApiRequest) -> Result<RestApiResource> {
		debug!(name = %request.name, "CreateRestApi");
		let res = self
			.client
			.create_rest_api()
			.name(&request.name)
			.set_description(request.description.clone())
			.send()
			.await
			.map_err(|err| classify("CreateRestApi", err))?;
		Ok(rest_api_resource!(res))
	}

	async fn update_rest_api(&self, rest_api_id: &str, patch_operations: &[PatchOperation]) -> Result<RestApiResource> {
		debug!(rest_api_id, patches = patch_operations.len(), "UpdateRestApi");
		let res = self
			.client
			.update_rest_api()
			.rest_api_id(rest_api_id)
			.set_patch_operations(Some(to_sdk_patch_operations(patch_operations)))
			.send()
			.await
			.map_err(|err| classify("UpdateRestApi", err))?;
		Ok(rest_api_resource!(res))
	}

	async fn get_model(&self, rest_api_id: &str, model_name: &str, flatten: bool) -> Result<ModelResource> {
		debug!(rest_api_id, model_name, "GetModel");
		let res = self
			.client
			.get_model()
			.rest_api_id(rest_api_id)
			.model_name(model_name)
			.flatten(flatten)
			.send()
			.await
			.map_err(|err| classify("GetModel", err))?;
		Ok(model_resource!(res))
	}

	async fn create_model(&self, request: &CreateModelRequest) -> Result<ModelResource> {
		debug!(rest_api_id = %request.rest_api_id, name = %request.name, "CreateModel");
		let res = self
			.client
			.create_model()
			.rest_api_id(&request.rest_api_id)
			.name(&request.name)
			.content_type(&request.content_type)
			.description(&request.description)
			.set_schema(request.schema.clone())
			.send()
			.await
			.map_err(|err| classify("CreateModel", err))?;
		Ok(model_resource!(res))
	}

	async fn update_model(
		&self,
		rest_api_id: &str,
		model_name: &str,
		patch_operations: &[PatchOperation],
	) -> Result<ModelResource> {
		debug!(rest_api_id, model_name, patches = patch_operations.len(), "UpdateModel");
		let res = self
			.client
			.update_model()
			.rest_api_id(rest_api_id)
			.model_name(model_name)
			.set_patch_operations(Some(to_sdk_patch_operations(patch_operations)))
			.send()
			.await
			.map_err(|err| classify("UpdateModel", err))?;
		Ok(model_resource!(res))
	}
}

// region:    --- Support

fn to_sdk_patch_operations(patch_operations: &[PatchOperation]) -> Vec<SdkPatchOperation> {
	patch_operations
		.iter()
		.map(|patch| {
			let op = match patch.op {
				PatchOp::Replace => Op::Replace,
			};
			SdkPatchOperation::builder()
				.op(op)
				.path(&patch.path)
				.value(&patch.value)
				.build()
		})
		.collect()
}

/// Turn an SDK error into a classified `Error::ControlPlane`.
fn classify<E, R>(operation: &'static str, err: SdkError<E, R>) -> Error
where
	E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
	R: Debug,
{
	let code = err.as_service_error().and_then(ProvideErrorMetadata::code).map(ToString::to_string);
	let kind = match &err {
		SdkError::ServiceError(_) => code.as_deref().map_or(FaultKind::Service, FaultKind::from_error_code),
		SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) | SdkError::ResponseError(_) => FaultKind::Transport,
		SdkError::ConstructionFailure(_) => FaultKind::BadRequest,
		_ => FaultKind::Service,
	};
	let message = err
		.as_service_error()
		.and_then(ProvideErrorMetadata::message)
		.map_or_else(|| DisplayErrorContext(&err).to_string(), ToString::to_string);

	let mut cp_err = ControlPlaneError::new(kind, operation, message);
	if let Some(code) = code {
		cp_err = cp_err.with_code(code);
	}
	cp_err.into()
}

// endregion: --- Support
