use std::path::Path;

use buildprep::BuildError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;
use crate::ui::views::build::render_failure;

/// Process exit code for an error that reached `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<BuildError>()
        .map(BuildError::exit_code)
        .unwrap_or(1)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(error_event(err));
        return;
    }

    if ui.caps.is_ci && crate::ui::terminal::is_github_actions() {
        let (file, line) = match err.downcast_ref::<BuildError>() {
            Some(build) => error_location(build),
            None => (None, None),
        };
        let file_str = file.map(|p| p.to_string_lossy().to_string());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file_str.as_deref(),
                line,
                Some("buildprep"),
            )
        );
    }

    eprintln!("{}", render_failure(&format_chain(err), ui));
}

fn format_chain(err: &anyhow::Error) -> String {
    // BuildError already folds its source into the message.
    if err.downcast_ref::<BuildError>().is_some() {
        return err.to_string();
    }
    format!("{:#}", err)
}

fn error_location(err: &BuildError) -> (Option<&Path>, Option<usize>) {
    match err {
        BuildError::ConfigParse { file, .. } => (Some(file.as_path()), None),
        BuildError::EnvFile { file, line, .. } => (Some(file.as_path()), Some(*line)),
        BuildError::EnvFileMissing { path } | BuildError::AlreadyExists { path } => {
            (Some(path.as_path()), None)
        }
        _ => (None, None),
    }
}

fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let build = err.downcast_ref::<BuildError>();
    serde_json::json!({
        "event": "error",
        "message": format_chain(err),
        "step": build.and_then(BuildError::step),
        "exit_code": exit_code(err),
    })
}
