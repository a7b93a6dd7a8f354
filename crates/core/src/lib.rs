//! Domain core for the aura-deploy job tracker.
//!
//! Holds the deployment job model, deploy-spec validation, and the
//! in-memory [`registry::JobRegistry`]. Contains no HTTP or transport
//! concerns; the `aura-api` crate builds the network surface on top.

pub mod error;
pub mod job;
pub mod registry;

pub use error::CoreError;
pub use job::{DeploySpec, Job, JobStatus};
pub use registry::JobRegistry;
