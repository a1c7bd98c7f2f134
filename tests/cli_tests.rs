use clap::Parser;
use flatten_move::cli::Args;
use flatten_move::config::types::{Config, LogLevel};
use std::path::PathBuf;

#[test]
fn positional_paths_are_collected_in_order() {
    let args = Args::parse_from(["flatten_move", "/tmp/b", "/tmp/a", "rel/c"]);
    assert_eq!(
        args.resolved_paths(),
        vec![
            PathBuf::from("/tmp/b"),
            PathBuf::from("/tmp/a"),
            PathBuf::from("rel/c")
        ]
    );
}

#[test]
fn quoted_paths_from_file_managers_are_cleaned() {
    let args = Args::parse_from(["flatten_move", "\"/tmp/with space/\"", "'x'"]);
    assert_eq!(
        args.resolved_paths(),
        vec![PathBuf::from("/tmp/with space"), PathBuf::from("x")]
    );
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["flatten_move", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug));

    let args = Args::parse_from(["flatten_move", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["flatten_move", "--log-level", "shouting"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "flatten_move",
        "--dest",
        "merged",
        "--max-depth",
        "3",
        "--log-level",
        "quiet",
        "--log-file",
        "/tmp/fm.log",
        "--dry-run",
        "--prompt",
        "a",
        "b",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.destination.as_deref(), Some("merged"));
    assert_eq!(cfg.max_depth, 3);
    assert_eq!(cfg.log_level, LogLevel::Quiet);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/tmp/fm.log")));
    assert!(cfg.dry_run);
    assert!(cfg.prompt);
}

#[test]
fn unset_flags_leave_config_alone() {
    let args = Args::parse_from(["flatten_move", "a", "b"]);
    let mut cfg = Config {
        destination: Some("from_config".into()),
        max_depth: 4,
        dry_run: true,
        ..Config::default()
    };
    let before = cfg.clone();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg, before);
}

#[test]
fn selection_file_conflicts_with_paths() {
    assert!(Args::try_parse_from(["flatten_move", "--selection-file", "sel.txt", "a"]).is_err());
    let args = Args::try_parse_from(["flatten_move", "--selection-file", "sel.txt"]).unwrap();
    assert_eq!(args.selection_file, Some(PathBuf::from("sel.txt")));
    assert!(args.paths.is_empty());
}
