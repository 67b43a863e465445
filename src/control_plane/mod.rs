//! The control-plane boundary: the calls the reconcilers make against API Gateway,
//! the typed fault classification, and the AWS SDK implementation.

// region:    --- Modules

mod aws_control_plane;
mod conn_config;
mod control_plane_types;
mod fault;
mod patch;

pub use aws_control_plane::*;
pub use conn_config::*;
pub use control_plane_types::*;
pub use fault::*;
pub use patch::*;

// endregion: --- Modules
