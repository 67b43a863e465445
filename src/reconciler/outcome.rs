use serde::{Deserialize, Serialize};

/// The result of one reconciliation: whether anything changed, and the resource
/// representation returned by the control plane (none when no call was made).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<R> {
	pub changed: bool,
	pub resource: Option<R>,
}

/// Constructors
impl<R> Outcome<R> {
	pub const fn changed(resource: R) -> Self {
		Self {
			changed: true,
			resource: Some(resource),
		}
	}

	pub const fn unchanged() -> Self {
		Self {
			changed: false,
			resource: None,
		}
	}

	/// A change that was computed but not applied (check mode).
	pub const fn pending(changed: bool) -> Self {
		Self {
			changed,
			resource: None,
		}
	}
}
