//! The automation-host boundary: module selection, invocation, and the JSON result.

// region:    --- Modules

mod invocation;
mod module_kind;
mod module_result;

pub use invocation::*;
pub use module_kind::*;
pub use module_result::*;

// endregion: --- Modules
