//! Tests for settings file discovery and precedence
use std::fs;

use clap::Parser;
use draft_blanks::config::{discover_settings_file, Args, Command, Config, PROJECT_CONFIG_FILE};
use draft_blanks::session::AnswerPolicy;

#[test]
fn explicit_settings_file_is_loaded() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("draft.toml");
    fs::write(
        &path,
        "context_radius = 25\nreject_blank_answers = false\nlog_level = \"debug\"\n",
    )
    .expect("write settings");

    let args = Args::try_parse_from([
        "draft-ls",
        "--config",
        path.to_str().expect("utf8 path"),
        "render",
        "draft.json",
    ])
    .expect("parse args");
    let config = Config::from_args(args).expect("create config");

    assert!(config.has_settings_file());
    assert_eq!(config.context_radius, 25);
    assert_eq!(config.answer_policy, AnswerPolicy::AcceptAny);
    assert_eq!(config.log_level, "debug");
    assert_eq!(
        config.command,
        Command::Render {
            file: "draft.json".into()
        }
    );
}

#[test]
fn command_line_overrides_settings_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("draft.toml");
    fs::write(&path, "context_radius = 25\n").expect("write settings");

    let args = Args::try_parse_from([
        "draft-ls",
        "--config",
        path.to_str().expect("utf8 path"),
        "--context-radius",
        "60",
    ])
    .expect("parse args");
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.context_radius, 60);
    assert_eq!(config.command, Command::Serve);
    assert_eq!(config.session_options().context_radius, 60);
}

#[test]
fn missing_settings_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.toml");

    let args = Args::try_parse_from(["draft-ls", "--config", path.to_str().expect("utf8 path")])
        .expect("parse args");

    let err = Config::from_args(args).unwrap_err();
    assert!(format!("{:#}", err).contains("absent.toml"));
}

#[test]
fn malformed_settings_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("draft.toml");
    fs::write(&path, "context_radius = \"wide\"\n").expect("write settings");

    let args = Args::try_parse_from(["draft-ls", "--config", path.to_str().expect("utf8 path")])
        .expect("parse args");

    assert!(Config::from_args(args).is_err());
}

#[test]
fn project_settings_file_is_discovered() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let project = dir.path().join(PROJECT_CONFIG_FILE);
    fs::write(&project, "context_radius = 10\n").expect("write settings");

    assert_eq!(discover_settings_file(dir.path()), Some(project));
}
