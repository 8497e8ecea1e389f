//! Command Runner Port
//!
//! Runs one resolved step command to completion.

use std::io;

use crate::domain::step::StepCommand;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepExit {
    /// Exit code; `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl StepExit {
    pub fn success() -> Self {
        Self { code: Some(0) }
    }

    pub fn code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for StepExit {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Trait for running step commands
///
/// Implementations block until the child exits. An `Err` means the
/// program never started; a started program that fails is reported
/// through `StepExit`.
pub trait CommandRunner {
    fn run(&self, command: &StepCommand) -> io::Result<StepExit>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &StepCommand) -> io::Result<StepExit> {
        (**self).run(command)
    }
}
