use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
	#[display("replace")]
	Replace,
}

/// A single edit instruction of an update call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchOperation {
	pub op: PatchOp,
	/// `/<attribute>`, e.g. `/description`
	pub path: String,
	pub value: String,
}

impl PatchOperation {
	pub fn replace(attribute: &str, value: impl Into<String>) -> Self {
		Self {
			op: PatchOp::Replace,
			path: format!("/{attribute}"),
			value: value.into(),
		}
	}
}

/// Build the ordered replace operations for the present attributes.
///
/// `attributes` is `(name, desired value)` in declaration order. Absent and empty
/// values are skipped; a repeated attribute name keeps its first occurrence only.
pub fn replace_operations<'a>(attributes: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) -> Vec<PatchOperation> {
	let mut ops: Vec<PatchOperation> = Vec::new();
	for (attribute, value) in attributes {
		let Some(value) = value.filter(|v| !v.is_empty()) else {
			continue;
		};
		let op = PatchOperation::replace(attribute, value);
		if ops.iter().any(|existing| existing.path == op.path) {
			continue;
		}
		ops.push(op);
	}
	ops
}

// region:    --- Tests


// endregion: --- Tests
