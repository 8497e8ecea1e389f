//! Error types for buildprep
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! and downcasts back to pick the process exit code.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::step::Step;

/// Result type alias for buildprep operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Exit code used when a step was killed by a signal and reported no code.
pub const EXIT_SIGNALED: i32 = 1;
/// Exit code for a program that could not be found (shell convention).
pub const EXIT_NOT_FOUND: i32 = 127;
/// Exit code for a program that was found but could not be started.
pub const EXIT_CANNOT_EXECUTE: i32 = 126;
/// Exit code after Ctrl-C (128 + SIGINT).
pub const EXIT_INTERRUPTED: i32 = 130;
/// Exit code for invalid configuration input.
pub const EXIT_CONFIG: i32 = 2;

/// Main error type for buildprep operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// A step ran and exited unsuccessfully
    #[error("step '{step}' failed with {}", describe_code(*code))]
    StepFailed { step: Step, code: Option<i32> },

    /// A step's program could not be started
    #[error("step '{step}' could not start '{program}': {source}")]
    StepSpawn {
        step: Step,
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Ctrl-C arrived while a step was running
    #[error("interrupted during step '{step}'")]
    Interrupted { step: Step },

    /// Config file is not valid TOML or has wrong value types
    #[error("invalid config in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Malformed line in an environment file
    #[error("invalid env file {file}:{line}: {message}")]
    EnvFile {
        file: PathBuf,
        line: usize,
        message: String,
    },

    /// Required environment file is absent
    #[error("env file not found: {path}")]
    EnvFileMissing { path: PathBuf },

    /// Refusing to overwrite an existing file
    #[error("{path} already exists - use --force to overwrite")]
    AlreadyExists { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl BuildError {
    /// Process exit code this error maps to.
    ///
    /// A failed step propagates its own status so callers see what the
    /// underlying tool reported.
    pub fn exit_code(&self) -> i32 {
        match self {
            BuildError::StepFailed { code, .. } => match code {
                Some(code) if *code != 0 => *code,
                _ => EXIT_SIGNALED,
            },
            BuildError::StepSpawn { source, .. } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    EXIT_NOT_FOUND
                } else {
                    EXIT_CANNOT_EXECUTE
                }
            }
            BuildError::Interrupted { .. } => EXIT_INTERRUPTED,
            BuildError::ConfigParse { .. }
            | BuildError::EnvFile { .. }
            | BuildError::EnvFileMissing { .. } => EXIT_CONFIG,
            BuildError::AlreadyExists { .. } | BuildError::Io(_) => 1,
        }
    }

    /// The step this error belongs to, if any.
    pub fn step(&self) -> Option<Step> {
        match self {
            BuildError::StepFailed { step, .. }
            | BuildError::StepSpawn { step, .. }
            | BuildError::Interrupted { step } => Some(*step),
            _ => None,
        }
    }
}
