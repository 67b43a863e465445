use crate::params::{ArgField, ArgumentSpec, ModuleSpec};
use serde::{Deserialize, Serialize};

/// Desired state of one REST API, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestApiSpec {
	/// The target REST API identifier (params alias: `name`).
	/// Also used as the name when the REST API has to be created.
	pub id: String,
	pub description: Option<String>,
}

/// Constructors
impl RestApiSpec {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			description: None,
		}
	}
}

/// Chainable Setters
impl RestApiSpec {
	#[must_use]
	pub fn with_description(mut self, description: impl Into<String>) -> Self {
		self.description = Some(description.into());
		self
	}
}

/// Getters
impl RestApiSpec {
	/// The description when set and non-empty.
	#[must_use]
	pub fn description(&self) -> Option<&str> {
		self.description.as_deref().filter(|v| !v.is_empty())
	}
}

impl ModuleSpec for RestApiSpec {
	const ARGUMENT_SPEC: ArgumentSpec = ArgumentSpec {
		fields: &[
			ArgField::required("id").with_aliases(&["name"]),
			ArgField::optional("description"),
		],
	};
}
