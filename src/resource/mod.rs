//! Resource kinds: live representations and the per-kind control-plane calls.

// region:    --- Modules

mod model;
mod resource_spec;
mod resource_types;
mod rest_api;

pub use resource_spec::*;
pub use resource_types::*;

// endregion: --- Modules
