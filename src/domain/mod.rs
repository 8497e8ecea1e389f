//! Domain Layer
//!
//! The build steps, the plan that orders them, and the ports the
//! application layer drives. Nothing here spawns processes or writes
//! to the terminal.
//!
//! ## Structure
//!
//! - `step` - `Step` and the resolved `StepCommand`
//! - `plan` - `BuildPlan`, built from `Config`
//! - `ports/` - Interface definitions for infrastructure

pub mod plan;
pub mod ports;
pub mod step;

pub use plan::BuildPlan;
pub use step::{Step, StepCommand};
