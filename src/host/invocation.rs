use crate::Result;
use crate::control_plane::{AwsControlPlane, ConnectionConfig, ControlPlane};
use crate::host::{ModuleKind, ModuleResult};
use crate::params::{ModelBatchSpec, ModelSpec, ModuleParams, RestApiSpec};
use crate::reconciler::Reconciler;
use serde_json::Value;
use tracing::error;

/// One validated module invocation, ready to run.
#[derive(Debug, Clone)]
pub enum ModuleInvocation {
	RestApi(ModuleParams<RestApiSpec>),
	Model(ModuleParams<ModelSpec>),
	Models(ModuleParams<ModelBatchSpec>),
}

/// Constructors
impl ModuleInvocation {
	/// Validate the raw params of `kind`. No network call happens here.
	pub fn from_params(kind: ModuleKind, params: &Value) -> Result<Self> {
		let invocation = match kind {
			ModuleKind::RestApi => Self::RestApi(ModuleParams::from_value(params)?),
			ModuleKind::Model => Self::Model(ModuleParams::from_value(params)?),
			ModuleKind::Models => Self::Models(ModuleParams::from_value(params)?),
		};
		Ok(invocation)
	}
}

/// Getters
impl ModuleInvocation {
	#[must_use]
	pub const fn kind(&self) -> ModuleKind {
		match self {
			Self::RestApi(_) => ModuleKind::RestApi,
			Self::Model(_) => ModuleKind::Model,
			Self::Models(_) => ModuleKind::Models,
		}
	}

	#[must_use]
	pub const fn connection(&self) -> &ConnectionConfig {
		match self {
			Self::RestApi(params) => &params.connection,
			Self::Model(params) => &params.connection,
			Self::Models(params) => &params.connection,
		}
	}

	#[must_use]
	pub const fn check_mode(&self) -> bool {
		match self {
			Self::RestApi(params) => params.check_mode,
			Self::Model(params) => params.check_mode,
			Self::Models(params) => params.check_mode,
		}
	}
}

impl ModuleInvocation {
	/// Reconcile against `control_plane` and build the module result.
	///
	/// A single-resource failure is an `Err`. A batch always returns a result,
	/// marked failed when any entry failed.
	pub async fn run<C: ControlPlane>(&self, control_plane: &C) -> Result<ModuleResult> {
		let reconciler = Reconciler::new(control_plane).with_check_mode(self.check_mode());
		let key = self.kind().result_key();

		match self {
			Self::RestApi(params) => {
				let outcome = reconciler.reconcile(&params.spec).await?;
				ModuleResult::success(outcome.changed, key, &outcome.resource)
			}
			Self::Model(params) => {
				let outcome = reconciler.reconcile(&params.spec).await?;
				ModuleResult::success(outcome.changed, key, &outcome.resource)
			}
			Self::Models(params) => {
				let outcome = reconciler.reconcile_models(&params.spec).await;
				let res = ModuleResult::success(outcome.changed, key, &outcome.models)?;
				if outcome.failed() {
					let failed = outcome.failed_names().join(", ");
					Ok(res.with_failure(format!("failed to reconcile models: {failed}")))
				} else {
					Ok(res)
				}
			}
		}
	}
}

/// Full module run against AWS: validate, connect, reconcile.
///
/// Never returns an error: every failure becomes a failed `ModuleResult`.
pub async fn execute(kind: ModuleKind, params: &Value) -> ModuleResult {
	match try_execute(kind, params).await {
		Ok(res) => res,
		Err(err) => {
			error!(module = %kind, %err, "module failed");
			ModuleResult::failure(err.to_string())
		}
	}
}

async fn try_execute(kind: ModuleKind, params: &Value) -> Result<ModuleResult> {
	let invocation = ModuleInvocation::from_params(kind, params)?;
	let control_plane = AwsControlPlane::connect(invocation.connection().clone()).await?;
	invocation.run(&control_plane).await
}
