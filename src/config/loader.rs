//! Configuration discovery, loading and environment overrides

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, BuildResult};

use super::env_validator::{self, EnvVarValidator};
use super::types::{ColorMode, Config, Verbosity};

/// Project-level config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "buildprep.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration together with where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BuildResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| BuildError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BuildError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string().trim_end().to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a project.
///
/// An explicit path must exist. Otherwise the first of
/// `<project>/buildprep.toml` and `<config dir>/buildprep/config.toml`
/// that exists is used, falling back to defaults. Environment overrides
/// are applied last.
pub fn discover(project_root: &Path, explicit: Option<&Path>) -> BuildResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [
            Some(project_root.join(PROJECT_CONFIG_FILE)),
            user_config_path(),
        ]
        .into_iter()
        .flatten()
        .find(|p| p.is_file()),
    };

    let loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                warnings,
                source: Some(path),
            }
        }
        None => LoadedConfig::default(),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

/// User-level config file (`$XDG_CONFIG_HOME/buildprep/config.toml`)
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("buildprep").join("config.toml"))
}

fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
}

/// Apply environment variable overrides (BUILDPREP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `get_env`; warnings go to `warn`.
pub fn with_env_overrides_from<W: Write + ?Sized>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warn: &mut W,
) -> Config {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(program) = non_empty("BUILDPREP_PIP") {
        config.install.program = program.trim().to_string();
    }

    if let Some(python) = non_empty("BUILDPREP_PYTHON") {
        config.collect.python = python.trim().to_string();
    }

    if let Some(manifest) = non_empty("BUILDPREP_MANIFEST") {
        config.install.manifest = PathBuf::from(manifest.trim());
    }

    if let Some(value) = get_env("BUILDPREP_CLEAR") {
        config.collect.clear = EnvVarValidator::new(
            "BUILDPREP_CLEAR",
            env_validator::BOOL_VALUES,
        )
        .parse_with_writer(&value, env_validator::parse_bool, config.collect.clear, warn);
    }

    if let Some(value) = get_env("BUILDPREP_VERBOSITY") {
        config.output.verbosity =
            EnvVarValidator::new("BUILDPREP_VERBOSITY", Verbosity::VALID_VALUES)
                .parse_with_writer(&value, Verbosity::parse, config.output.verbosity, warn);
    }

    if let Some(value) = get_env("BUILDPREP_COLOR") {
        config.output.color = EnvVarValidator::new("BUILDPREP_COLOR", ColorMode::VALID_VALUES)
            .parse_with_writer(&value, ColorMode::parse, config.output.color, warn);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "install",
        "program",
        "args",
        "manifest",
        "extra_args",
        "collect",
        "python",
        "manage",
        "clear",
        "no_input",
        "env",
        "file",
        "required",
        "output",
        "color",
        "unicode",
        "verbosity",
    ];

    env_validator::closest(unknown, CANDIDATES).map(str::to_string)
}
