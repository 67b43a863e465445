mod support;

use crate::support::{CONTENT_TYPE_JSON, Call, FakeControlPlane, REST_API_ID, Result, seed_model_resource};
use apigw::control_plane::FaultKind;
use apigw::params::{ModelBatchSpec, ModelSpec};
use apigw::reconciler::Reconciler;

fn batch_spec() -> ModelBatchSpec {
	ModelBatchSpec::new(REST_API_ID)
		.append_model(ModelSpec::new(REST_API_ID, "Pet", CONTENT_TYPE_JSON).with_schema(r#"{"type":"object"}"#))
		.append_model(ModelSpec::new(REST_API_ID, "Error", CONTENT_TYPE_JSON))
		.append_model(ModelSpec::new(REST_API_ID, "Owner", CONTENT_TYPE_JSON).with_description("owner"))
}

#[tokio::test]
async fn test_batch_reconciles_in_declared_order() -> Result<()> {
	// "Error" exists and has nothing to patch, the others are created
	let control_plane = FakeControlPlane::default().with_model(REST_API_ID, seed_model_resource("Error", CONTENT_TYPE_JSON));

	let outcome = Reconciler::new(&control_plane).reconcile_models(&batch_spec()).await;

	assert!(outcome.changed);
	assert!(!outcome.failed());
	let names: Vec<&str> = outcome.models.iter().map(|m| m.name.as_str()).collect();
	assert_eq!(names, ["Pet", "Error", "Owner"]);
	let changed: Vec<bool> = outcome.models.iter().map(|m| m.changed).collect();
	assert_eq!(changed, [true, false, true]);

	let read_order: Vec<String> = control_plane
		.calls()
		.into_iter()
		.filter_map(|c| match c {
			Call::GetModel { model_name, .. } => Some(model_name),
			_ => None,
		})
		.collect();
	assert_eq!(read_order, ["Pet", "Error", "Owner"]);
	Ok(())
}

#[tokio::test]
async fn test_batch_failure_does_not_stop_later_models() -> Result<()> {
	let control_plane = FakeControlPlane::default().with_fault_for("CreateModel", "Error", FaultKind::BadRequest);

	let outcome = Reconciler::new(&control_plane).reconcile_models(&batch_spec()).await;

	assert!(outcome.failed());
	assert!(outcome.changed);
	assert_eq!(outcome.failed_names(), ["Error"]);
	assert!(outcome.models[1].error.is_some());
	assert!(!outcome.models[1].changed);
	assert!(control_plane.model(REST_API_ID, "Owner").is_some());
	Ok(())
}

#[tokio::test]
async fn test_batch_empty_makes_no_calls() -> Result<()> {
	let control_plane = FakeControlPlane::default();

	let outcome = Reconciler::new(&control_plane)
		.reconcile_models(&ModelBatchSpec::new(REST_API_ID))
		.await;

	assert!(!outcome.changed);
	assert!(outcome.models.is_empty());
	assert!(control_plane.calls().is_empty());
	Ok(())
}
