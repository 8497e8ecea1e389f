//! `buildprep plan` - show what a build would run

use anyhow::Result;
use buildprep::application::ResolvedPlan;
use buildprep::resolve_plan;

use super::GlobalArgs;
use crate::ui::views::plan::render_plan;

pub fn cmd_plan(global: &GlobalArgs) -> Result<()> {
    let root = super::project_root(global.project_dir.as_deref())?;
    let (loaded, ui) = super::load(&root, global)?;
    let resolved = resolve_plan(&loaded.config, &root)?;

    if ui.json {
        let source = loaded.source.as_ref().map(|p| p.display().to_string());
        crate::ui::json::emit(plan_event(&resolved, source))?;
        return Ok(());
    }

    println!(
        "{}",
        render_plan(&root, &resolved, loaded.source.as_deref(), &ui)
    );
    Ok(())
}

fn plan_event(resolved: &ResolvedPlan, config_source: Option<String>) -> serde_json::Value {
    let steps: Vec<serde_json::Value> = resolved
        .plan
        .steps()
        .iter()
        .map(|command| {
            serde_json::json!({
                "step": command.step,
                "program": command.program,
                "args": command.args,
                "command_line": command.display(),
                "cwd": command.cwd.display().to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "event": "plan",
        "config": config_source,
        "steps": steps,
        "env": resolved.injected,
    })
}
