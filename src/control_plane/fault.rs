use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Closed classification of control-plane failures.
///
/// The AWS boundary maps every SDK error into one of these kinds, so the reconcilers
/// switch on the kind and never inspect error text.
#[derive(Debug, Clone, Copy, Display, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FaultKind {
	/// The keyed resource does not exist. The only kind recovered locally.
	NotFound,
	Conflict,
	BadRequest,
	Unauthorized,
	TooManyRequests,
	LimitExceeded,
	/// Dispatch, timeout, or response-parsing failure before a service answer.
	Transport,
	/// Any other service-side failure.
	Service,
}

impl FaultKind {
	/// Map an API Gateway error code (e.g. `NotFoundException`) to a kind.
	///
	/// Any code containing `NotFoundException` is `NotFound`. Unknown codes are `Service`.
	#[must_use]
	pub fn from_error_code(code: &str) -> Self {
		if code.contains("NotFoundException") {
			return Self::NotFound;
		}
		match code {
			"ConflictException" => Self::Conflict,
			"BadRequestException" | "ValidationException" => Self::BadRequest,
			"UnauthorizedException" | "AccessDeniedException" | "UnrecognizedClientException" => Self::Unauthorized,
			"TooManyRequestsException" | "ThrottlingException" => Self::TooManyRequests,
			"LimitExceededException" => Self::LimitExceeded,
			_ => Self::Service,
		}
	}
}

/// A failed control-plane call, already classified.
#[derive(Debug, Clone, Display, PartialEq, Eq)]
#[display("{operation} failed ({kind}): {message}")]
pub struct ControlPlaneError {
	pub kind: FaultKind,
	/// The API operation name, e.g. `GetModel`.
	pub operation: &'static str,
	/// The raw service error code, when the service returned one.
	pub code: Option<String>,
	pub message: String,
}

/// Constructors
impl ControlPlaneError {
	pub fn new(kind: FaultKind, operation: &'static str, message: impl Into<String>) -> Self {
		Self {
			kind,
			operation,
			code: None,
			message: message.into(),
		}
	}

	#[must_use]
	pub fn with_code(mut self, code: impl Into<String>) -> Self {
		self.code = Some(code.into());
		self
	}
}

// region:    --- Tests


// endregion: --- Tests
