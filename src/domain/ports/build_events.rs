//! Build Event Port
//!
//! Provides an observable interface for build runs.
//! Drives terminal progress, JSON event streams, and tests.

use std::path::PathBuf;
use std::time::Duration;

use crate::domain::step::Step;

/// Event emitted during a build
#[derive(Debug, Clone, PartialEq)]
pub enum BuildEvent {
    /// Build started
    Started {
        project_root: PathBuf,
        step_count: usize,
    },

    /// A step is about to run
    StepStarted {
        index: usize,
        total: usize,
        step: Step,
        command_line: String,
    },

    /// A step finished (successfully or not)
    StepFinished {
        index: usize,
        total: usize,
        step: Step,
        success: bool,
        exit_code: Option<i32>,
        duration: Duration,
    },

    /// Build finished; `success` is false after any failure
    Completed { success: bool, duration: Duration },
}

/// Trait for receiving build events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BuildEventSink: Send + Sync {
    fn on_event(&self, event: BuildEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}
}
