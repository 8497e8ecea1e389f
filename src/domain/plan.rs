//! Build plan: the ordered, resolved step commands

use std::path::Path;

use crate::config::Config;

use super::step::{Step, StepCommand};

/// Argument that makes `collectstatic` auto-confirm overwrite prompts.
pub const NO_INPUT_FLAG: &str = "--noinput";
/// Argument that empties the static root before collecting.
pub const CLEAR_FLAG: &str = "--clear";

/// The commands a build runs, in order.
///
/// Install always precedes Collect; the order is fixed by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    steps: Vec<StepCommand>,
}

impl BuildPlan {
    /// Resolve the plan for `project_root`.
    ///
    /// `env` is added to both children's environment.
    pub fn from_config(config: &Config, project_root: &Path, env: &[(String, String)]) -> Self {
        let install = StepCommand::new(Step::Install, &config.install.program, project_root)
            .args(config.install.args.iter().cloned())
            .arg(config.install.manifest.to_string_lossy())
            .args(config.install.extra_args.iter().cloned())
            .with_env(env.to_vec());

        let mut collect = StepCommand::new(Step::Collect, &config.collect.python, project_root)
            .arg(config.collect.manage.to_string_lossy())
            .arg("collectstatic");
        if config.collect.no_input {
            collect = collect.arg(NO_INPUT_FLAG);
        }
        if config.collect.clear {
            collect = collect.arg(CLEAR_FLAG);
        }
        let collect = collect
            .args(config.collect.extra_args.iter().cloned())
            .with_env(env.to_vec());

        Self {
            steps: vec![install, collect],
        }
    }

    pub fn steps(&self) -> &[StepCommand] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, step: Step) -> Option<&StepCommand> {
        self.steps.iter().find(|c| c.step == step)
    }
}
