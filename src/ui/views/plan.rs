//! Text rendering for `buildprep plan`

use std::path::Path;

use buildprep::application::ResolvedPlan;

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

pub fn render_plan(
    project_root: &Path,
    resolved: &ResolvedPlan,
    config_source: Option<&Path>,
    ui: &UiContext,
) -> String {
    let mut lines = vec![format!(
        "{} buildprep plan for {}",
        Icon::Build.colored(ui.color, ui.unicode),
        project_root.display()
    )];

    for (i, command) in resolved.plan.steps().iter().enumerate() {
        lines.push(format!(
            "  {}. {:<8} {}",
            i + 1,
            command.step.id(),
            command.display()
        ));
        if ui.is_verbose() {
            lines.push(format!("     in {}", command.cwd.display()));
        }
    }

    lines.extend(render_sources(config_source, &resolved.injected, ui));
    lines.join("\n")
}

/// Where configuration and injected environment came from.
pub fn render_sources(
    config_source: Option<&Path>,
    injected: &[String],
    ui: &UiContext,
) -> Vec<String> {
    let mut lines = vec![match config_source {
        Some(path) => format!("config: {}", path.display()),
        None => "config: built-in defaults".to_string(),
    }];

    if !injected.is_empty() {
        if ui.is_debug() {
            lines.push(format!("env: {}", injected.join(", ")));
        } else {
            lines.push(format!("env: {} variable(s) from env file", injected.len()));
        }
    }

    lines
}
