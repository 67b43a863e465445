//! Module params: argument specs, validation, and the typed desired-state specs.

// region:    --- Modules

mod arg_spec;
mod model_params;
mod module_params;
mod rest_api_params;

pub use arg_spec::*;
pub use model_params::*;
pub use module_params::*;
pub use rest_api_params::*;

// endregion: --- Modules
