use crate::Result;
use crate::control_plane::ConnectionConfig;
use crate::params::ArgumentSpec;
use serde::de::DeserializeOwned;
use serde_json::Value;
use value_ext::JsonValueExt;

/// Host key carrying the check-mode flag.
pub const CHECK_MODE_PARAM: &str = "_ansible_check_mode";

/// A desired-state spec that can be built from module params.
pub trait ModuleSpec: DeserializeOwned {
	const ARGUMENT_SPEC: ArgumentSpec;

	/// Checks across fields or entries that `ARGUMENT_SPEC` cannot express.
	fn validate(&self) -> Result<()> {
		Ok(())
	}
}

/// Validated params of one module invocation.
#[derive(Debug, Clone)]
pub struct ModuleParams<S> {
	pub spec: S,
	pub connection: ConnectionConfig,
	pub check_mode: bool,
}

impl<S: ModuleSpec> ModuleParams<S> {
	/// Validate the raw params against `S::ARGUMENT_SPEC` and build the typed spec.
	///
	/// Fails with a params error before any control-plane call is made.
	pub fn from_value(params: &Value) -> Result<Self> {
		let validated = Value::Object(S::ARGUMENT_SPEC.validate(params)?);

		let spec: S = serde_json::from_value(validated.clone())?;
		spec.validate()?;
		let connection: ConnectionConfig = serde_json::from_value(validated)?;
		let check_mode = params.x_get::<bool>(CHECK_MODE_PARAM).unwrap_or(false);

		Ok(Self {
			spec,
			connection,
			check_mode,
		})
	}
}

// region:    --- Tests


// endregion: --- Tests
