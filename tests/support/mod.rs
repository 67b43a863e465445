//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

// region:    --- Modules

mod fake_control_plane;
mod seeders;

pub use fake_control_plane::*;
pub use seeders::*;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

// endregion: --- Modules

// region:    --- Common Constants

pub const REST_API_ID: &str = "other_rest_id";
pub const MODEL_NAME: &str = "model";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_PDF: &str = "application/pdf";

// endregion: --- Common Constants
