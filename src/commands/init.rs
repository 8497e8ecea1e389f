//! `buildprep init` - write a config template

use anyhow::Result;
use buildprep::config::PROJECT_CONFIG_FILE;
use buildprep::infrastructure::fs::write_new;
use buildprep::Config;

use super::GlobalArgs;
use crate::ui::icon::Icon;

pub fn cmd_init(global: &GlobalArgs, force: bool) -> Result<()> {
    let root = super::project_root(global.project_dir.as_deref())?;
    let ui = global.fallback_ui();
    let path = root.join(PROJECT_CONFIG_FILE);

    write_new(&path, Config::template().as_bytes(), force)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "success": true,
            "path": path.display().to_string(),
        }))?;
        return Ok(());
    }

    println!(
        "{} Created {}",
        Icon::Success.colored(ui.color, ui.unicode),
        path.display()
    );
    Ok(())
}
