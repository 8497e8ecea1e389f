//! `.env` file support
//!
//! Django settings commonly read secrets and paths from a `.env` file in
//! the project root. `collectstatic` imports those settings, so variables
//! from the file are handed to both build steps. Parsing is done by
//! `dotenvy`; the process environment is never modified here.

use std::fs;
use std::path::Path;

use crate::error::{BuildError, BuildResult};

/// Parse `.env` content into ordered `(key, value)` pairs.
///
/// Later duplicates replace earlier ones in place.
pub fn parse(content: &str, file: &Path) -> BuildResult<Vec<(String, String)>> {
    let mut vars: Vec<(String, String)> = Vec::new();

    for item in dotenvy::from_read_iter(content.as_bytes()) {
        let (key, value) = item.map_err(|e| parse_error(e, content, file))?;

        match vars.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => vars.push((key, value)),
        }
    }

    Ok(vars)
}

/// Load an env file. A missing file yields no variables unless `required`.
pub fn load(path: &Path, required: bool) -> BuildResult<Vec<(String, String)>> {
    match fs::read_to_string(path) {
        Ok(content) => parse(&content, path),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            if required {
                Err(BuildError::EnvFileMissing {
                    path: path.to_path_buf(),
                })
            } else {
                Ok(Vec::new())
            }
        }
        Err(e) => Err(e.into()),
    }
}

fn parse_error(err: dotenvy::Error, content: &str, file: &Path) -> BuildError {
    let (line, message) = match &err {
        dotenvy::Error::LineParse(text, index) => (
            line_number(content, text),
            format!("cannot parse '{}' at column {}", first_line(text), index + 1),
        ),
        // An unterminated quote runs to the end of the file.
        other => (content.lines().count().max(1), other.to_string()),
    };

    BuildError::EnvFile {
        file: file.to_path_buf(),
        line,
        message,
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default().trim()
}

/// 1-based line where `text` starts. Value errors carry only the text
/// after `=`, so match on the line's tail.
fn line_number(content: &str, text: &str) -> usize {
    let first = first_line(text);
    content
        .lines()
        .position(|l| l.trim_end().ends_with(first))
        .map_or(1, |i| i + 1)
}
