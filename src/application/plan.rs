//! Plan resolution
//!
//! Reads the project's env file and turns configuration into a
//! `BuildPlan`. Variables already set in the process environment win
//! over the file, matching how the project itself loads it.

use std::path::Path;

use crate::config::Config;
use crate::domain::plan::BuildPlan;
use crate::error::BuildResult;
use crate::infrastructure::env_file;

/// A plan plus the env-file variables that went into it.
#[derive(Debug, Clone)]
pub struct ResolvedPlan {
    pub plan: BuildPlan,
    /// Names of variables taken from the env file
    pub injected: Vec<String>,
}

/// Resolve the plan using the real process environment.
pub fn resolve_plan(config: &Config, project_root: &Path) -> BuildResult<ResolvedPlan> {
    resolve_plan_with(config, project_root, |key| std::env::var_os(key).is_some())
}

/// Resolve the plan; `is_set` reports whether a variable already exists.
pub fn resolve_plan_with(
    config: &Config,
    project_root: &Path,
    is_set: impl Fn(&str) -> bool,
) -> BuildResult<ResolvedPlan> {
    let env = match config
        .env
        .file
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
    {
        Some(file) => env_file::load(&project_root.join(file), config.env.required)?,
        None => Vec::new(),
    };

    let env: Vec<(String, String)> = env.into_iter().filter(|(k, _)| !is_set(k)).collect();
    let injected = env.iter().map(|(k, _)| k.clone()).collect();

    Ok(ResolvedPlan {
        plan: BuildPlan::from_config(config, project_root, &env),
        injected,
    })
}
