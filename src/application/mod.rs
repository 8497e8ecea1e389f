//! Application Layer
//!
//! Use cases that orchestrate the build.
//! This layer:
//! - Depends on Domain layer (plan, steps, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Runs the plan fail-fast (install, then collect)
//! - `resolve_plan` - Loads the env file and builds the `BuildPlan`

pub mod build;
pub mod plan;

pub use build::{BuildOptions, BuildReport, BuildUseCase, StepOutcome};
pub use plan::{resolve_plan, resolve_plan_with, ResolvedPlan};
