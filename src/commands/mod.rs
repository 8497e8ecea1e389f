pub mod init;
pub mod plan;
pub mod run;

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use buildprep::config::{self, LoadedConfig};

use crate::cli::{Cli, ColorWhen};
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

/// Flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub project_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// UI built from the loaded config, once a command got that far
    loaded_ui: OnceCell<UiContext>,
}

impl GlobalArgs {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            verbose: cli.verbose,
            color: cli.color,
            project_dir: cli.project_dir.clone(),
            config: cli.config.clone(),
            loaded_ui: OnceCell::new(),
        }
    }

    /// UI for reporting an error: the configured one when config loaded.
    pub fn error_ui(&self) -> UiContext {
        self.loaded_ui
            .get()
            .copied()
            .unwrap_or_else(|| self.fallback_ui())
    }

    /// UI used before configuration is known, e.g. to report a config error.
    pub fn fallback_ui(&self) -> UiContext {
        UiContext::new(
            self.json,
            self.verbose,
            self.color,
            &config::Config::default(),
        )
    }
}

/// Resolve `-C` against the current directory.
pub(crate) fn project_root(dir: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let root = match dir {
        Some(dir) => cwd.join(dir),
        None => cwd,
    };

    if !root.is_dir() {
        bail!("project directory not found: {}", root.display());
    }
    Ok(root)
}

/// Discover configuration, report warnings, and build the UI context.
pub(crate) fn load(root: &Path, global: &GlobalArgs) -> Result<(LoadedConfig, UiContext)> {
    let loaded = config::discover(root, global.config.as_deref())?;
    let ui = UiContext::new(global.json, global.verbose, global.color, &loaded.config);
    print_config_warnings(&loaded.warnings, &ui);
    let _ = global.loaded_ui.set(ui);
    Ok((loaded, ui))
}
