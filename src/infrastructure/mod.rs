//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - `SystemRunner` (child processes)
//! - `events/` - `JsonEventSink`
//! - `env_file` - `.env` parsing and loading
//! - `fs` - atomic file writes

pub mod env_file;
pub mod events;
pub mod fs;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use process::{ChildOutput, SystemRunner};
