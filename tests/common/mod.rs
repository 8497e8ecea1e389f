//! Common test utilities for buildprep CLI tests.
//!
//! - `TestEnv`: isolated project and home directories
//! - Fixtures: stand-in installer and `manage.py` scripts

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
