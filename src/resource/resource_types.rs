use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
	#[display("rest_api")]
	RestApi,
	#[display("model")]
	Model,
}

/// Server-reported state of a REST API.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestApiResource {
	pub id: Option<String>,
	pub name: Option<String>,
	pub description: Option<String>,
	pub version: Option<String>,
}

/// Server-reported state of a Model.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelResource {
	pub id: Option<String>,
	pub name: Option<String>,
	pub description: Option<String>,
	pub schema: Option<String>,
	pub content_type: Option<String>,
}
