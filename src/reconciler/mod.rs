//! The create-or-update reconciliation shared by every resource kind.

// region:    --- Modules

mod batch;
mod outcome;
mod resource_reconciler;

pub use batch::*;
pub use outcome::*;
pub use resource_reconciler::*;

// endregion: --- Modules
