use std::io::Write;

use buildprep::config::ConfigWarning;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::icon::Icon;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        for w in warnings {
            let _ = crate::ui::json::emit(warning_event(w));
        }
        return;
    }

    let mut err = std::io::stderr().lock();
    let _ = write_config_warnings(&mut err, warnings, ui);

    if ui.caps.is_ci && crate::ui::terminal::is_github_actions() {
        for w in warnings {
            let file = w.file.to_string_lossy();
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &format!("Unknown config key '{}'", w.key),
                    Some(&*file),
                    w.line,
                    Some("buildprep"),
                )
            );
        }
    }
}

pub(crate) fn write_config_warnings(
    out: &mut impl Write,
    warnings: &[ConfigWarning],
    ui: &UiContext,
) -> std::io::Result<()> {
    let icon = Icon::Warning.colored(ui.color, ui.unicode);
    for w in warnings {
        match w.line {
            Some(line) => writeln!(
                out,
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                w.file.display(),
                line
            )?,
            None => writeln!(
                out,
                "{} Unknown config key '{}' in {}",
                icon,
                w.key,
                w.file.display()
            )?,
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?", suggestion)?;
        }
    }
    Ok(())
}

fn warning_event(w: &ConfigWarning) -> serde_json::Value {
    serde_json::json!({
        "event": "warning",
        "kind": "unknown_config_key",
        "key": w.key,
        "file": w.file.display().to_string(),
        "line": w.line,
        "suggestion": w.suggestion,
    })
}
