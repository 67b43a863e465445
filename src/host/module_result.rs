use crate::Result;
use serde::Serialize;
use serde_json::{Value, json};
use value_ext::JsonValueExt;

/// The JSON object a module prints for the automation host.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleResult {
	pub changed: bool,
	pub failed: bool,
	pub msg: Option<String>,
	/// The resource representation, under its result key (e.g. `model`).
	pub data: Option<(&'static str, Value)>,
}

/// Constructors
impl ModuleResult {
	pub fn success(changed: bool, key: &'static str, resource: &impl Serialize) -> Result<Self> {
		Ok(Self {
			changed,
			failed: false,
			msg: None,
			data: Some((key, serde_json::to_value(resource)?)),
		})
	}

	pub fn failure(msg: impl Into<String>) -> Self {
		Self {
			changed: false,
			failed: true,
			msg: Some(msg.into()),
			data: None,
		}
	}
}

/// Chainable Setters
impl ModuleResult {
	#[must_use]
	pub fn with_failure(mut self, msg: impl Into<String>) -> Self {
		self.failed = true;
		self.msg = Some(msg.into());
		self
	}
}

impl ModuleResult {
	/// Render as the host's result object: `changed`, then `failed`/`msg` when failed,
	/// then the resource under its key.
	pub fn to_json(&self) -> Result<Value> {
		let mut res = json!({ "changed": self.changed });
		if self.failed {
			res.x_insert("failed", true)?;
		}
		if let Some(msg) = &self.msg {
			res.x_insert("msg", msg)?;
		}
		if let Some((key, value)) = &self.data {
			res.x_insert(key, value)?;
		}
		Ok(res)
	}
}

// region:    --- Tests

#[cfg(test)]
mod tests {
	use super::*;
	use crate::resource::ModelResource;

	#[test]
	fn test_module_result_success_json() {
		let model = ModelResource {
			name: Some("Pet".to_string()),
			..Default::default()
		};
		let res = ModuleResult::success(true, "model", &Some(model)).unwrap();
		assert_eq!(res.to_json().unwrap(), json!({"changed": true, "model": {"name": "Pet"}}));
	}

	#[test]
	fn test_module_result_failure_json() {
		let res = ModuleResult::failure("boom");
		assert_eq!(
			res.to_json().unwrap(),
			json!({"changed": false, "failed": true, "msg": "boom"})
		);
	}

	#[test]
	fn test_module_result_unchanged_null_resource() {
		let res = ModuleResult::success(false, "rest_api", &Option::<ModelResource>::None).unwrap();
		assert_eq!(res.to_json().unwrap(), json!({"changed": false, "rest_api": null}));
	}
}

// endregion: --- Tests
