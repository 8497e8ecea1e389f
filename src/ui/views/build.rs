//! Text rendering for build progress

use std::path::Path;
use std::time::Duration;

use buildprep::Step;

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

pub fn format_duration(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f64())
}

fn icon(ui: &UiContext, icon: Icon) -> String {
    icon.colored(ui.color, ui.unicode)
}

pub fn render_start(project_root: &Path, ui: &UiContext) -> String {
    format!(
        "{} buildprep: preparing {}",
        icon(ui, Icon::Build),
        project_root.display()
    )
}

pub fn render_step_started(
    index: usize,
    total: usize,
    step: Step,
    command_line: &str,
    ui: &UiContext,
) -> String {
    let mut out = format!(
        "{} [{}/{}] {}",
        icon(ui, Icon::Progress),
        index,
        total,
        step.label()
    );
    if ui.is_verbose() {
        out.push_str(&format!("\n  {} {}", icon(ui, Icon::Arrow), command_line));
    }
    out
}

pub fn render_step_finished(
    index: usize,
    total: usize,
    step: Step,
    exit_code: Option<i32>,
    success: bool,
    duration: Duration,
    ui: &UiContext,
) -> String {
    if success {
        return format!(
            "{} [{}/{}] {} ({})",
            icon(ui, Icon::Success),
            index,
            total,
            step.label(),
            format_duration(duration)
        );
    }

    let reason = match exit_code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    };
    format!(
        "{} [{}/{}] {} failed ({}, {})",
        icon(ui, Icon::Error),
        index,
        total,
        step.label(),
        reason,
        format_duration(duration)
    )
}

pub fn render_complete(duration: Duration, ui: &UiContext) -> String {
    format!(
        "{} Build complete in {}",
        icon(ui, Icon::Success),
        format_duration(duration)
    )
}

pub fn render_failure(message: &str, ui: &UiContext) -> String {
    format!("{} Build failed: {}", icon(ui, Icon::Error), message)
}
