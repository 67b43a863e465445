use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The modules this crate provides to the automation host.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum ModuleKind {
	/// `apigw_rest_api`
	#[display("apigw_rest_api")]
	#[value(name = "rest-api", alias = "apigw_rest_api")]
	RestApi,
	/// `apigw_model`
	#[display("apigw_model")]
	#[value(name = "model", alias = "apigw_model")]
	Model,
	/// `apigw_models`, the multi-model variant
	#[display("apigw_models")]
	#[value(name = "models", alias = "apigw_models")]
	Models,
}

impl ModuleKind {
	/// Key of the resource representation in the module result.
	#[must_use]
	pub const fn result_key(&self) -> &'static str {
		match self {
			Self::RestApi => "rest_api",
			Self::Model => "model",
			Self::Models => "models",
		}
	}
}
