use crate::Result;
use crate::control_plane::{ControlPlane, PatchOperation};
use crate::resource::ResourceKind;
use serde::Serialize;
use std::fmt::Debug;

/// One resource kind as seen by the `Reconciler`.
///
/// Implementors hold the desired state and know the keyed calls for their kind.
/// The reconciler owns the existence/dispatch logic.
#[allow(async_fn_in_trait)]
pub trait ResourceSpec {
	type Resource: Debug + Clone + Serialize;

	const KIND: ResourceKind;

	/// Human readable key, for logs and batch reports.
	fn key(&self) -> String;

	/// Keyed read of the live resource.
	async fn fetch<C: ControlPlane>(&self, control_plane: &C) -> Result<Self::Resource>;

	/// Create the resource from the desired state.
	async fn create<C: ControlPlane>(&self, control_plane: &C) -> Result<Self::Resource>;

	/// Replace operations for every present patchable attribute, in declaration order.
	fn patch_operations(&self) -> Vec<PatchOperation>;

	/// Apply `patch_operations` (never empty) to the live resource.
	async fn patch<C: ControlPlane>(
		&self,
		control_plane: &C,
		patch_operations: &[PatchOperation],
	) -> Result<Self::Resource>;
}
