//! buildprep - deployment preparation for Django projects
//!
//! Runs the two steps a deploy needs before the app can serve traffic:
//! dependency installation from a manifest, then static asset collection.
//! Steps run strictly in order; the first failure stops the build and its
//! exit code becomes the build's exit code.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{resolve_plan, BuildOptions, BuildReport, BuildUseCase};
pub use config::{Config, LoadedConfig};
pub use domain::{BuildPlan, Step, StepCommand};
pub use error::{BuildError, BuildResult};
pub use infrastructure::{JsonEventSink, SystemRunner};
