//! Tests for the config module

use super::loader::*;
use super::types::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.install.program, "pip");
    assert_eq!(config.install.args, vec!["install", "-r"]);
    assert_eq!(config.install.manifest, PathBuf::from("requirements.txt"));
    assert_eq!(config.collect.python, "python");
    assert_eq!(config.collect.manage, PathBuf::from("manage.py"));
    assert!(!config.collect.clear);
    assert!(config.collect.no_input);
    assert_eq!(config.env.file, Some(PathBuf::from(".env")));
    assert_eq!(config.output.verbosity, Verbosity::Normal);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[install]
program = "pip3"
manifest = "requirements/prod.txt"
extra_args = ["--no-cache-dir"]

[collect]
python = "python3"
clear = true

[output]
color = "never"
verbosity = "verbose"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.install.program, "pip3");
    assert_eq!(config.install.args, vec!["install", "-r"]);
    assert_eq!(config.install.manifest, PathBuf::from("requirements/prod.txt"));
    assert_eq!(config.install.extra_args, vec!["--no-cache-dir"]);
    assert_eq!(config.collect.python, "python3");
    assert!(config.collect.clear);
    assert!(config.collect.no_input);
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.output.verbosity, Verbosity::Verbose);
}

#[test]
fn test_template_parses_to_defaults() {
    let config: Config = toml::from_str(Config::template()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("buildprep.toml");
    fs::write(&path, "[collect]\nclaer = true\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert!(!config.collect.clear);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "claer");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("clear"));
}

#[test]
fn test_load_invalid_type_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("buildprep.toml");
    fs::write(&path, "[collect]\nclear = \"yes please\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, crate::BuildError::ConfigParse { .. }));
    assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
}

#[test]
fn test_discover_prefers_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[install]\nprogram = \"uv-pip\"\n",
    )
    .unwrap();

    let loaded = discover(dir.path(), None).unwrap();
    assert_eq!(loaded.config.install.program, "uv-pip");
    assert_eq!(
        loaded.source.as_deref(),
        Some(dir.path().join(PROJECT_CONFIG_FILE).as_path())
    );
}

#[test]
fn test_discover_explicit_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = discover(dir.path(), Some(&missing)).unwrap_err();
    assert!(matches!(err, crate::BuildError::ConfigParse { .. }));
}

#[test]
fn test_discover_explicit_path_skips_project_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join(PROJECT_CONFIG_FILE),
        "[install]\nprogram = \"from-project\"\n",
    )
    .unwrap();
    let explicit = dir.path().join("ci.toml");
    fs::write(&explicit, "[install]\nprogram = \"from-ci\"\n").unwrap();

    let loaded = discover(dir.path(), Some(Path::new(&explicit))).unwrap();
    assert_eq!(loaded.config.install.program, "from-ci");
}

#[test]
fn test_env_override_programs() {
    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env_from(&[
            ("BUILDPREP_PIP", "pip3"),
            ("BUILDPREP_PYTHON", " /opt/venv/bin/python "),
            ("BUILDPREP_MANIFEST", "reqs.txt"),
        ]),
        &mut sink,
    );

    assert_eq!(config.install.program, "pip3");
    assert_eq!(config.collect.python, "/opt/venv/bin/python");
    assert_eq!(config.install.manifest, PathBuf::from("reqs.txt"));
    assert!(sink.is_empty());
}

#[test]
fn test_env_override_blank_program_is_ignored() {
    let mut sink = Vec::new();
    let config =
        with_env_overrides_from(Config::default(), env_from(&[("BUILDPREP_PIP", "  ")]), &mut sink);
    assert_eq!(config.install.program, "pip");
}

#[test]
fn test_env_override_clear() {
    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env_from(&[("BUILDPREP_CLEAR", "yes")]),
        &mut sink,
    );
    assert!(config.collect.clear);
}

#[test]
fn test_env_override_invalid_keeps_file_value() {
    let mut base = Config::default();
    base.collect.clear = true;
    base.output.verbosity = Verbosity::Quiet;

    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        base,
        env_from(&[
            ("BUILDPREP_CLEAR", "sometimes"),
            ("BUILDPREP_VERBOSITY", "verbos"),
        ]),
        &mut sink,
    );

    assert!(config.collect.clear);
    assert_eq!(config.output.verbosity, Verbosity::Quiet);

    let msg = String::from_utf8(sink).unwrap();
    assert!(msg.contains("BUILDPREP_CLEAR"), "{}", msg);
    assert!(msg.contains("Did you mean 'verbose'?"), "{}", msg);
}

#[test]
fn test_env_override_color() {
    let mut sink = Vec::new();
    let config = with_env_overrides_from(
        Config::default(),
        env_from(&[("BUILDPREP_COLOR", "Always")]),
        &mut sink,
    );
    assert_eq!(config.output.color, ColorMode::Always);
}

#[test]
fn test_verbosity_bumped_by_flags() {
    assert_eq!(Verbosity::Normal.bumped(0), Verbosity::Normal);
    assert_eq!(Verbosity::Normal.bumped(1), Verbosity::Verbose);
    assert_eq!(Verbosity::Normal.bumped(2), Verbosity::Debug);
    assert_eq!(Verbosity::Quiet.bumped(1), Verbosity::Verbose);
    assert_eq!(Verbosity::Verbose.bumped(1), Verbosity::Debug);
}
