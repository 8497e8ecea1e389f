//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::Started {
                project_root,
                step_count,
            } => serde_json::json!({
                "event": "start",
                "command": "run",
                "version": env!("CARGO_PKG_VERSION"),
                "project_root": project_root.display().to_string(),
                "steps": step_count,
            }),

            BuildEvent::StepStarted {
                index,
                total,
                step,
                command_line,
            } => serde_json::json!({
                "event": "step_start",
                "step": step,
                "index": index,
                "total": total,
                "command_line": command_line,
            }),

            BuildEvent::StepFinished {
                index,
                total,
                step,
                success,
                exit_code,
                duration,
            } => serde_json::json!({
                "event": "step_complete",
                "step": step,
                "index": index,
                "total": total,
                "success": success,
                "exit_code": exit_code,
                "duration_ms": duration.as_millis() as u64,
            }),

            BuildEvent::Completed { success, duration } => serde_json::json!({
                "event": "complete",
                "command": "run",
                "success": success,
                "duration_ms": duration.as_millis() as u64,
            }),
        };

        self.write_event(json);
    }
}
