use crate::control_plane::ControlPlane;
use crate::params::ModelBatchSpec;
use crate::reconciler::Reconciler;
use crate::resource::ModelResource;
use serde::Serialize;
use tracing::warn;

/// Per-model report of a batch reconciliation.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct ModelBatchEntry {
	pub name: String,
	pub changed: bool,
	pub model: Option<ModelResource>,
	/// The failure of this entry, when it failed.
	pub error: Option<String>,
}

impl ModelBatchEntry {
	#[must_use]
	pub const fn failed(&self) -> bool {
		self.error.is_some()
	}
}

/// Aggregated result of a `ModelBatchSpec` reconciliation.
#[derive(Debug, Clone, Serialize)]
pub struct ModelBatchOutcome {
	/// `true` when at least one entry changed.
	pub changed: bool,
	/// One entry per declared model, in declared order.
	pub models: Vec<ModelBatchEntry>,
}

impl ModelBatchOutcome {
	#[must_use]
	pub fn failed(&self) -> bool {
		self.models.iter().any(ModelBatchEntry::failed)
	}

	/// Names of the failed entries, in declared order.
	#[must_use]
	pub fn failed_names(&self) -> Vec<&str> {
		self.models.iter().filter(|m| m.failed()).map(|m| m.name.as_str()).collect()
	}
}

impl<C: ControlPlane> Reconciler<'_, C> {
	/// Reconcile every model of the batch, one after the other, in declared order.
	///
	/// A failing model is recorded in its entry and does not stop the following ones.
	/// Model names are expected to be unique (see `ModelBatchSpec::validate`).
	pub async fn reconcile_models(&self, batch: &ModelBatchSpec) -> ModelBatchOutcome {
		let mut models = Vec::with_capacity(batch.models.len());

		for spec in batch.model_specs() {
			let entry = match self.reconcile(&spec).await {
				Ok(outcome) => ModelBatchEntry {
					name: spec.name,
					changed: outcome.changed,
					model: outcome.resource,
					error: None,
				},
				Err(err) => {
					warn!(rest_api_id = %spec.rest_api_id, model = %spec.name, %err, "model reconciliation failed");
					ModelBatchEntry {
						name: spec.name,
						changed: false,
						model: None,
						error: Some(err.to_string()),
					}
				}
			};
			models.push(entry);
		}

		ModelBatchOutcome {
			changed: models.iter().any(|m| m.changed),
			models,
		}
	}
}
