//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BuildResult;

use super::loader::{self, ConfigWarning};

/// Dependency installation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Installer executable
    #[serde(default = "default_installer")]
    pub program: String,

    /// Arguments placed before the manifest path
    #[serde(default = "default_install_args")]
    pub args: Vec<String>,

    /// Dependency manifest, relative to the project root
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    /// Arguments appended after the manifest path
    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: default_installer(),
            args: default_install_args(),
            manifest: default_manifest(),
            extra_args: Vec::new(),
        }
    }
}

fn default_installer() -> String {
    "pip".to_string()
}

fn default_install_args() -> Vec<String> {
    vec!["install".to_string(), "-r".to_string()]
}

fn default_manifest() -> PathBuf {
    PathBuf::from("requirements.txt")
}

/// Static asset collection step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Interpreter used to run the management script
    #[serde(default = "default_python")]
    pub python: String,

    /// Management script, relative to the project root
    #[serde(default = "default_manage")]
    pub manage: PathBuf,

    /// Empty the destination directory before collecting
    #[serde(default)]
    pub clear: bool,

    /// Auto-confirm overwrite prompts (`--noinput`)
    #[serde(default = "default_true")]
    pub no_input: bool,

    #[serde(default)]
    pub extra_args: Vec<String>,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            python: default_python(),
            manage: default_manage(),
            clear: false,
            no_input: true,
            extra_args: Vec::new(),
        }
    }
}

fn default_python() -> String {
    "python".to_string()
}

fn default_manage() -> PathBuf {
    PathBuf::from("manage.py")
}

/// Environment file passed to both steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Path relative to the project root; loaded when present
    #[serde(default = "default_env_file")]
    pub file: Option<PathBuf>,

    /// Fail when the file is missing
    #[serde(default)]
    pub required: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            file: default_env_file(),
            required: false,
        }
    }
}

fn default_env_file() -> Option<PathBuf> {
    Some(PathBuf::from(".env"))
}

/// Color mode for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const VALID_VALUES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    pub const VALID_VALUES: &'static [&'static str] = &["quiet", "normal", "verbose", "debug"];

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Some(Self::Quiet),
            "normal" => Some(Self::Normal),
            "verbose" => Some(Self::Verbose),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    /// Raise the configured level by the number of `-v` flags.
    pub fn bumped(self, count: u8) -> Self {
        match (self, count) {
            (level, 0) => level,
            (Self::Quiet | Self::Normal, 1) => Self::Verbose,
            (Self::Verbose, 1) => Self::Debug,
            _ => Self::Debug,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    #[serde(default)]
    pub verbosity: Verbosity,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
            verbosity: Verbosity::Normal,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Full configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub install: InstallConfig,

    #[serde(default)]
    pub collect: CollectConfig,

    #[serde(default)]
    pub env: EnvConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BuildResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> BuildResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply `BUILDPREP_*` environment variable overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Commented template written by `buildprep init`
    pub fn template() -> &'static str {
        TEMPLATE
    }
}

const TEMPLATE: &str = r#"# buildprep configuration
#
# Values shown are the defaults. Remove what you don't change.

[install]
# Installer executable and the arguments placed before the manifest path.
program = "pip"
args = ["install", "-r"]
manifest = "requirements.txt"
extra_args = []

[collect]
# Runs: <python> <manage> collectstatic [--noinput] [--clear] <extra_args...>
python = "python"
manage = "manage.py"
# Empty the static root before collecting.
clear = false
no_input = true
extra_args = []

[env]
# Variables from this file are passed to both steps. Variables already set
# in the environment take precedence.
file = ".env"
required = false

[output]
color = "auto"        # auto | always | never
unicode = true
verbosity = "normal"  # quiet | normal | verbose | debug
"#;
