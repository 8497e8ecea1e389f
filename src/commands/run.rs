//! `buildprep run` - install dependencies, then collect static files

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use buildprep::domain::ports::BuildEventSink;
use buildprep::infrastructure::ChildOutput;
use buildprep::{resolve_plan, BuildOptions, BuildUseCase, JsonEventSink, SystemRunner};

use super::GlobalArgs;
use crate::cli::clear_override;
use crate::ui::console::ConsoleEventSink;
use crate::ui::views::plan::render_sources;

pub fn cmd_run(global: &GlobalArgs, clear: bool, no_clear: bool) -> Result<()> {
    let root = super::project_root(global.project_dir.as_deref())?;
    let (mut loaded, ui) = super::load(&root, global)?;

    if let Some(clear) = clear_override(clear, no_clear) {
        loaded.config.collect.clear = clear;
    }

    let resolved = resolve_plan(&loaded.config, &root)?;

    if ui.is_verbose() && !ui.json {
        for line in render_sources(loaded.source.as_deref(), &resolved.injected, &ui) {
            println!("{}", line);
        }
    }

    // The terminal sends SIGINT to the child as well; we only remember it
    // so the next step never starts.
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .context("failed to install Ctrl-C handler")?;

    let options = BuildOptions::new(root).with_interrupt_flag(interrupted);

    let (runner, sink): (SystemRunner, Arc<dyn BuildEventSink>) = if ui.json {
        (
            SystemRunner::with_output(ChildOutput::StdoutToStderr),
            Arc::new(JsonEventSink::stdout()),
        )
    } else {
        (
            SystemRunner::inherit(),
            Arc::new(ConsoleEventSink::stdout(ui)),
        )
    };

    BuildUseCase::new(runner).execute_with_events(&resolved.plan, &options, sink)?;
    Ok(())
}
