//! Configuration module for buildprep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BUILDPREP_*)
//! 3. Project config (buildprep.toml) or explicit `--config`
//! 4. User config (~/.config/buildprep/config.toml)
//! 5. Built-in defaults (lowest priority)

pub mod env_validator;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    discover, load_with_warnings, user_config_path, with_env_overrides,
    with_env_overrides_from, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    CollectConfig, ColorMode, Config, EnvConfig, InstallConfig, OutputConfig, Verbosity,
};
