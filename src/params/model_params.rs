use crate::params::{ArgField, ArgumentSpec, ModuleSpec};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// A single model is `rest_api_id` followed by the fields of one batch entry.
// The two lists must stay equal past that first field.

const MODEL_FIELDS: &[ArgField] = &[
	ArgField::required("name"),
	ArgField::required("content_type"),
	ArgField::optional("schema"),
	ArgField::optional("description"),
];

const SINGLE_MODEL_FIELDS: &[ArgField] = &[
	ArgField::required("rest_api_id"),
	ArgField::required("name"),
	ArgField::required("content_type"),
	ArgField::optional("schema"),
	ArgField::optional("description"),
];

// region:    --- ModelSpec

/// Desired state of one Model, keyed by `(rest_api_id, name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
	pub rest_api_id: String,
	pub name: String,
	/// e.g. `application/json`
	pub content_type: String,
	pub schema: Option<String>,
	pub description: Option<String>,
}

/// Constructors
impl ModelSpec {
	pub fn new(rest_api_id: impl Into<String>, name: impl Into<String>, content_type: impl Into<String>) -> Self {
		Self {
			rest_api_id: rest_api_id.into(),
			name: name.into(),
			content_type: content_type.into(),
			schema: None,
			description: None,
		}
	}
}

/// Chainable Setters
impl ModelSpec {
	#[must_use]
	pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
		self.schema = Some(schema.into());
		self
	}

	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

/// Getters
impl ModelSpec {
	/// The schema when set and non-empty.
	#[must_use]
	pub fn schema(&self) -> Option<&str> {
		self.schema.as_deref().filter(|v| !v.is_empty())
	}

	/// The description when set and non-empty.
	#[must_use]
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref().filter(|v| !v.is_empty())
	}
}

impl ModuleSpec for ModelSpec {
	const ARGUMENT_SPEC: ArgumentSpec = ArgumentSpec {
		fields: SINGLE_MODEL_FIELDS,
	};
}

// endregion: --- ModelSpec

// region:    --- ModelBatchSpec

/// One entry of a `ModelBatchSpec`. The REST API id comes from the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
	pub name: String,
	pub content_type: String,
	pub schema: Option<String>,
	pub description: Option<String>,
}

/// Desired state of several Models of the same REST API, reconciled in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelBatchSpec {
	pub rest_api_id: String,
	#[serde(default)]
	pub models: Vec<ModelEntry>,
}

impl ModelBatchSpec {
	pub fn new(rest_api_id: impl Into<String>) -> Self {
		Self {
			rest_api_id: rest_api_id.into(),
			models: Vec::new(),
		}
	}

	#[must_use]
	pub fn append_model(mut self, model: ModelSpec) -> Self {
		self.models.push(ModelEntry {
			name: model.name,
			content_type: model.content_type,
			schema: model.schema,
			description: model.description,
		});
		self
	}

	/// The per-model specs, in declared order.
	#[must_use]
	pub fn model_specs(&self) -> Vec<ModelSpec> {
		self.models
			.iter()
			.map(|entry| ModelSpec {
				rest_api_id: self.rest_api_id.clone(),
				name: entry.name.clone(),
				content_type: entry.content_type.clone(),
				schema: entry.schema.clone(),
				description: entry.description.clone(),
			})
			.collect()
	}
}

impl ModuleSpec for ModelBatchSpec {
	const ARGUMENT_SPEC: ArgumentSpec = ArgumentSpec {
		fields: &[ArgField::required("rest_api_id"), ArgField::list_of("models", MODEL_FIELDS)],
	};

	/// Model names are the batch identity: a name may appear only once.
	fn validate(&self) -> Result<()> {
		let mut names = HashSet::new();
		for (idx, entry) in self.models.iter().enumerate() {
			if !names.insert(entry.name.as_str()) {
				return Err(Error::ParamInvalidValue {
					param: format!("models[{idx}].name"),
					cause: format!("duplicate model name '{}'", entry.name),
				});
			}
		}
		Ok(())
	}
}

// endregion: --- ModelBatchSpec
