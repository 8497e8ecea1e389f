//! Process execution
//!
//! Implements the `CommandRunner` port for real child processes.

mod system;

pub use system::{ChildOutput, SystemRunner};
