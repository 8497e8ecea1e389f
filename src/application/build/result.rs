//! Build Result

use std::time::Duration;

use crate::domain::step::Step;

/// How one step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: Step,
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

/// Result of a successful build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Steps in the order they ran
    pub outcomes: Vec<StepOutcome>,
    pub duration: Duration,
}

impl BuildReport {
    pub fn steps_run(&self) -> Vec<Step> {
        self.outcomes.iter().map(|o| o.step).collect()
    }
}
