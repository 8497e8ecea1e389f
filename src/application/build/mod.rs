//! Build Module
//!
//! Runs the build plan step by step, stopping at the first failure.
//!
//! ## Structure
//!
//! - `options` - `BuildOptions`
//! - `result` - `BuildReport`, `StepOutcome`
//! - `use_case` - `BuildUseCase`
//!
//! ## Usage
//!
//! ```ignore
//! use buildprep::application::build::{BuildOptions, BuildUseCase};
//! use buildprep::infrastructure::SystemRunner;
//!
//! let use_case = BuildUseCase::new(SystemRunner::inherit());
//! let report = use_case.execute(&plan, &BuildOptions::new(project_root))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::BuildOptions;
pub use result::{BuildReport, StepOutcome};
pub use use_case::BuildUseCase;
