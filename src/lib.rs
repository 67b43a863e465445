//! `apigw` reconciles AWS API Gateway REST APIs and Models against a desired configuration.
//!
//! Each module reads the live resource from the control plane, then either creates it
//! or patches it, and reports a `(changed, resource)` [`Outcome`](reconciler::Outcome).
//!
//! ```no_run
//! # async fn run() -> apigw::Result<()> {
//! use apigw::control_plane::{AwsControlPlane, ConnectionConfig};
//! use apigw::params::ModelSpec;
//! use apigw::reconciler::Reconciler;
//!
//! let control_plane = AwsControlPlane::connect(ConnectionConfig::default().with_region("us-east-1")).await?;
//! let spec = ModelSpec::new("a1b2c3", "Pet", "application/json").with_schema(r#"{"type":"object"}"#);
//!
//! let outcome = Reconciler::new(&control_plane).reconcile(&spec).await?;
//! println!("changed: {}", outcome.changed);
//! # Ok(())
//! # }
//! ```

// region:    --- Modules

mod error;

pub use error::{Error, Result};

pub mod control_plane;
pub mod host;
pub mod params;
pub mod reconciler;
pub mod resource;

// endregion: --- Modules
