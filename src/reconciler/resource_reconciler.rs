use crate::Result;
use crate::control_plane::ControlPlane;
use crate::reconciler::Outcome;
use crate::resource::ResourceSpec;
use tracing::{debug, info};

/// Drives desired specs to the live state through a `ControlPlane`.
///
/// Every call reads fresh live state; nothing is cached between calls.
#[derive(Debug)]
pub struct Reconciler<'a, C> {
	control_plane: &'a C,
	check_mode: bool,
}

/// Constructors
impl<'a, C: ControlPlane> Reconciler<'a, C> {
	pub const fn new(control_plane: &'a C) -> Self {
		Self {
			control_plane,
			check_mode: false,
		}
	}

	/// In check mode, existence is still read but no create/update call is issued.
	#[must_use]
	pub const fn with_check_mode(mut self, check_mode: bool) -> Self {
		self.check_mode = check_mode;
		self
	}
}

/// Getters
impl<C> Reconciler<'_, C> {
	#[must_use]
	pub const fn check_mode(&self) -> bool {
		self.check_mode
	}
}

impl<C: ControlPlane> Reconciler<'_, C> {
	/// `true` when the keyed read succeeds, `false` when it fails with a "not found" fault.
	///
	/// Every other fault is returned as is.
	pub async fn exists<S: ResourceSpec>(&self, spec: &S) -> Result<bool> {
		match spec.fetch(self.control_plane).await {
			Ok(_) => Ok(true),
			Err(err) if err.is_not_found() => {
				debug!(kind = %S::KIND, key = %spec.key(), "resource not found");
				Ok(false)
			}
			Err(err) => Err(err),
		}
	}

	/// Create the resource. Callers have already established that it does not exist.
	pub async fn create<S: ResourceSpec>(&self, spec: &S) -> Result<Outcome<S::Resource>> {
		if self.check_mode {
			info!(kind = %S::KIND, key = %spec.key(), "would create (check mode)");
			return Ok(Outcome::pending(true));
		}

		info!(kind = %S::KIND, key = %spec.key(), "creating");
		let resource = spec.create(self.control_plane).await?;
		Ok(Outcome::changed(resource))
	}

	/// Replace every present patchable attribute in one update call.
	///
	/// No attribute present means no call and an unchanged outcome.
	pub async fn update<S: ResourceSpec>(&self, spec: &S) -> Result<Outcome<S::Resource>> {
		let patch_operations = spec.patch_operations();
		if patch_operations.is_empty() {
			debug!(kind = %S::KIND, key = %spec.key(), "nothing to patch");
			return Ok(Outcome::unchanged());
		}

		if self.check_mode {
			info!(kind = %S::KIND, key = %spec.key(), patches = patch_operations.len(), "would update (check mode)");
			return Ok(Outcome::pending(true));
		}

		info!(kind = %S::KIND, key = %spec.key(), patches = patch_operations.len(), "updating");
		let resource = spec.patch(self.control_plane, &patch_operations).await?;
		Ok(Outcome::changed(resource))
	}

	/// Create when absent, update when present. Exactly one of the two runs.
	pub async fn reconcile<S: ResourceSpec>(&self, spec: &S) -> Result<Outcome<S::Resource>> {
		if self.exists(spec).await? {
			self.update(spec).await
		} else {
			self.create(spec).await
		}
	}
}
