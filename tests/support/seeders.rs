use crate::support::{CONTENT_TYPE_PDF, MODEL_NAME, REST_API_ID};
use apigw::params::ModelSpec;
use apigw::resource::{ModelResource, RestApiResource};

/// The model spec used by most model tests: required fields plus a description.
pub fn seed_model_spec() -> ModelSpec {
	ModelSpec::new(REST_API_ID, MODEL_NAME, CONTENT_TYPE_PDF).with_description("description")
}

pub fn seed_model_resource(name: &str, content_type: &str) -> ModelResource {
	ModelResource {
		id: Some(format!("id-{name}")),
		name: Some(name.to_string()),
		description: Some(String::new()),
		schema: None,
		content_type: Some(content_type.to_string()),
	}
}

pub fn seed_rest_api_resource(id: &str) -> RestApiResource {
	RestApiResource {
		id: Some(id.to_string()),
		name: Some(id.to_string()),
		description: None,
		version: None,
	}
}
