//! Build Use Case
//!
//! Runs the plan in order:
//! 1. Install dependencies
//! 2. Collect static files
//!
//! Each step's result is checked before the next one starts. The first
//! failure ends the build and is returned as the error; no later step runs
//! and no success event is emitted.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::plan::BuildPlan;
use crate::domain::ports::{BuildEvent, BuildEventSink, CommandRunner, NoopEventSink};
use crate::domain::step::StepCommand;
use crate::error::{BuildError, BuildResult};

use super::options::BuildOptions;
use super::result::{BuildReport, StepOutcome};

/// Build use case - fail-fast sequential execution of a `BuildPlan`
pub struct BuildUseCase<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> BuildUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Execute the plan without event reporting
    pub fn execute(&self, plan: &BuildPlan, options: &BuildOptions) -> BuildResult<BuildReport> {
        self.execute_with_events(plan, options, Arc::new(NoopEventSink))
    }

    /// Execute the plan, reporting progress to `sink`
    pub fn execute_with_events(
        &self,
        plan: &BuildPlan,
        options: &BuildOptions,
        sink: Arc<dyn BuildEventSink>,
    ) -> BuildResult<BuildReport> {
        let started = Instant::now();
        let total = plan.len();

        sink.on_event(BuildEvent::Started {
            project_root: options.project_root.clone(),
            step_count: total,
        });

        let mut report = BuildReport::default();

        for (i, command) in plan.steps().iter().enumerate() {
            let index = i + 1;

            if options.interrupted.load(Ordering::SeqCst) {
                return Err(Self::fail(
                    sink.as_ref(),
                    started,
                    BuildError::Interrupted { step: command.step },
                ));
            }

            match self.run_step(command, index, total, options, sink.as_ref()) {
                Ok(outcome) => report.outcomes.push(outcome),
                Err(err) => return Err(Self::fail(sink.as_ref(), started, err)),
            }
        }

        report.duration = started.elapsed();
        sink.on_event(BuildEvent::Completed {
            success: true,
            duration: report.duration,
        });

        Ok(report)
    }

    fn run_step(
        &self,
        command: &StepCommand,
        index: usize,
        total: usize,
        options: &BuildOptions,
        sink: &dyn BuildEventSink,
    ) -> BuildResult<StepOutcome> {
        let step = command.step;

        sink.on_event(BuildEvent::StepStarted {
            index,
            total,
            step,
            command_line: command.display(),
        });

        let step_started = Instant::now();
        let result = self.runner.run(command);
        let duration = step_started.elapsed();

        let finished = |success: bool, exit_code: Option<i32>| BuildEvent::StepFinished {
            index,
            total,
            step,
            success,
            exit_code,
            duration,
        };

        let exit = match result {
            Ok(exit) => exit,
            Err(source) => {
                sink.on_event(finished(false, None));
                return Err(BuildError::StepSpawn {
                    step,
                    program: command.program.clone(),
                    source,
                });
            }
        };

        let interrupted = options.interrupted.load(Ordering::SeqCst);
        sink.on_event(finished(exit.is_success() && !interrupted, exit.code));

        if interrupted {
            return Err(BuildError::Interrupted { step });
        }
        if !exit.is_success() {
            return Err(BuildError::StepFailed {
                step,
                code: exit.code,
            });
        }

        Ok(StepOutcome {
            step,
            exit_code: exit.code,
            duration,
        })
    }

    fn fail(sink: &dyn BuildEventSink, started: Instant, err: BuildError) -> BuildError {
        sink.on_event(BuildEvent::Completed {
            success: false,
            duration: started.elapsed(),
        });
        err
    }
}
