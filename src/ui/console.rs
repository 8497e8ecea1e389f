//! Console Event Sink
//!
//! Human-readable build progress on stdout.

use std::io::{self, Write};
use std::sync::Mutex;

use buildprep::domain::ports::{BuildEvent, BuildEventSink};

use crate::ui::context::UiContext;
use crate::ui::views::build;

pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        let ui = &self.ui;
        match event {
            BuildEvent::Started { project_root, .. } => {
                self.line(build::render_start(&project_root, ui));
            }
            BuildEvent::StepStarted {
                index,
                total,
                step,
                command_line,
            } => {
                if !ui.is_quiet() {
                    self.line(build::render_step_started(
                        index,
                        total,
                        step,
                        &command_line,
                        ui,
                    ));
                }
            }
            BuildEvent::StepFinished {
                index,
                total,
                step,
                success,
                exit_code,
                duration,
            } => {
                if !ui.is_quiet() {
                    self.line(build::render_step_finished(
                        index, total, step, exit_code, success, duration, ui,
                    ));
                }
            }
            BuildEvent::Completed { success, duration } => {
                // Failures are reported by the error printer on stderr.
                if success {
                    self.line(build::render_complete(duration, ui));
                }
            }
        }
    }
}
