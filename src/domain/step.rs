//! Build steps and their resolved command lines

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// One stage of the build, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Install dependencies from the manifest
    Install,
    /// Collect static assets into the deployment directory
    Collect,
}

impl Step {
    /// All steps, in the order they run.
    pub const ALL: [Step; 2] = [Step::Install, Step::Collect];

    /// Stable identifier used in JSON output and error messages.
    pub fn id(&self) -> &'static str {
        match self {
            Step::Install => "install",
            Step::Collect => "collect",
        }
    }

    /// Human-readable label for progress lines.
    pub fn label(&self) -> &'static str {
        match self {
            Step::Install => "Installing dependencies",
            Step::Collect => "Collecting static files",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A fully resolved invocation of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepCommand {
    pub step: Step,
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the child process
    pub cwd: PathBuf,
    /// Variables added to the child's environment
    pub env: Vec<(String, String)>,
}

impl StepCommand {
    pub fn new(step: Step, program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            step,
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_env(mut self, env: Vec<(String, String)>) -> Self {
        self.env = env;
        self
    }

    /// Render the command line for display, quoting tokens a POSIX shell
    /// would split or expand.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Quote a token for display. Tokens made only of safe characters are
/// returned unchanged; everything else is single-quoted.
pub fn shell_quote(token: &str) -> String {
    const SAFE: &[char] = &['-', '_', '.', '/', '=', ':', ',', '+', '@', '%'];

    if !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SAFE.contains(&c))
    {
        return token.to_string();
    }

    format!("'{}'", token.replace('\'', r"'\''"))
}
