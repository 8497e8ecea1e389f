//! System Command Runner
//!
//! Spawns step commands with `std::process::Command` and waits for them.

use std::io;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandRunner, StepExit};
use crate::domain::step::StepCommand;

/// Where a child's standard output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildOutput {
    /// Child shares our stdout/stderr
    #[default]
    Inherit,
    /// Child stdout is sent to our stderr, keeping stdout for NDJSON
    StdoutToStderr,
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    output: ChildOutput,
}

impl SystemRunner {
    pub fn inherit() -> Self {
        Self {
            output: ChildOutput::Inherit,
        }
    }

    pub fn with_output(output: ChildOutput) -> Self {
        Self { output }
    }

    fn build(&self, command: &StepCommand) -> Command {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .current_dir(&command.cwd)
            .envs(command.env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        match self.output {
            ChildOutput::Inherit => {
                cmd.stdout(Stdio::inherit());
            }
            ChildOutput::StdoutToStderr => {
                cmd.stdout(Stdio::from(io::stderr()));
            }
        }

        cmd
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &StepCommand) -> io::Result<StepExit> {
        let status = self.build(command).status()?;
        Ok(StepExit::from(status))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::step::Step;
    use tempfile::tempdir;

    fn sh(script: &str, cwd: &std::path::Path) -> StepCommand {
        StepCommand::new(Step::Install, "sh", cwd).args(["-c", script])
    }

    #[test]
    fn reports_exit_code() {
        let dir = tempdir().unwrap();
        let exit = SystemRunner::inherit().run(&sh("exit 3", dir.path())).unwrap();
        assert_eq!(exit, StepExit::code(3));
    }

    #[test]
    fn success_is_zero() {
        let dir = tempdir().unwrap();
        let exit = SystemRunner::inherit().run(&sh("true", dir.path())).unwrap();
        assert!(exit.is_success());
    }

    #[test]
    fn missing_program_is_not_found() {
        let dir = tempdir().unwrap();
        let cmd = StepCommand::new(Step::Install, "buildprep-definitely-missing-tool", dir.path());
        let err = SystemRunner::inherit().run(&cmd).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn runs_in_cwd_with_env() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();

        let cmd = sh(r#"test -f marker && test "$BUILDPREP_TEST_VAR" = hello"#, dir.path())
            .with_env(vec![("BUILDPREP_TEST_VAR".to_string(), "hello".to_string())]);

        let exit = SystemRunner::with_output(ChildOutput::StdoutToStderr)
            .run(&cmd)
            .unwrap();
        assert!(exit.is_success());
    }
}
