use crate::control_plane::{ControlPlaneError, FaultKind};
use derive_more::{Display, From};
use value_ext::JsonValueExtError;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Display, From)]
#[display("{self:?}")]
pub enum Error {
	// -- Module Params
	ParamsNotAnObject,
	ParamMissing {
		param: String,
	},
	ParamNotString {
		param: String,
	},
	ParamUnknown {
		param: String,
	},
	ParamInvalidValue {
		param: String,
		cause: String,
	},
	ArgsFileRead {
		path: String,
		cause: String,
	},

	// -- Control Plane
	#[from]
	ControlPlane(ControlPlaneError),
	ClientUnavailable {
		cause: String,
	},

	// -- Externals
	#[from]
	JsonValueExt(JsonValueExtError),
	#[from]
	SerdeJson(serde_json::Error),
}

/// Classification helpers
impl Error {
	/// The control-plane fault kind, when this error came from the control plane.
	#[must_use]
	pub const fn fault_kind(&self) -> Option<FaultKind> {
		match self {
			Self::ControlPlane(err) => Some(err.kind),
			_ => None,
		}
	}

	/// `true` only for a control-plane "not found" fault.
	#[must_use]
	pub const fn is_not_found(&self) -> bool {
		matches!(self.fault_kind(), Some(FaultKind::NotFound))
	}

	/// `true` for errors raised while validating module params, before any network call.
	#[must_use]
	pub const fn is_config_error(&self) -> bool {
		matches!(
			self,
			Self::ParamsNotAnObject
				| Self::ParamMissing { .. }
				| Self::ParamNotString { .. }
				| Self::ParamUnknown { .. }
				| Self::ParamInvalidValue { .. }
				| Self::ArgsFileRead { .. }
		)
	}
}

// region:    --- Error Boilerplate

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

// region:    --- Tests


// endregion: --- Tests
