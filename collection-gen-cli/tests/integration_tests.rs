//! Integration tests for collection-gen-cli.
//!
//! These tests verify end-to-end functionality of the driver: loading a
//! configuration file, merging flags, generating, writing and checking.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use collection_gen_cli::{
    config::{CliArgs, ConfigManager},
    error::{CliError, ConfigError},
    runner,
    writer::{FileWriter, Freshness, WriteResult},
};

/// Write a config file into `dir` and return its path.
fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("gen-collection.toml");
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Generate
// =============================================================================

#[test]
fn test_generate_from_config_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("types/list/zz_generated.collection.go");
    let config_path = write_config(
        dir.path(),
        &format!(
            r#"
[target]
pkg = "list"
name = "*List"
exclude = ["Filter", "ForEach"]
out = "{}"
"#,
            out.display().to_string().replace('\\', "\\\\")
        ),
    );

    let config = ConfigManager::load(Some(&config_path)).unwrap();
    let target = config.target.into_target().unwrap();
    let unit = runner::render(&target).unwrap();

    let result = FileWriter::new(false).write(&target.out, &unit.content).unwrap();
    assert!(matches!(result, WriteResult::Written { .. }));

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("// Code generated by gen-collection; DO NOT EDIT.\n"));
    assert!(written.contains("package list\n"));
    assert!(written.contains("func Find[T any](xs *List[T], fn func(T) bool) (T, bool) {"));
    assert!(!written.contains("func Filter"));
    assert!(!written.contains("func ForEach"));
}

#[test]
fn test_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let config_path = write_config(
        dir.path(),
        r#"
[target]
pkg = "list"
name = "*List"
constraint = "comparable"
exclude = ["NotARealOp"]
out = "zz.go"
"#,
    );

    let config = ConfigManager::load(Some(&config_path)).unwrap();
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            pkg: Some("set".to_string()),
            name: Some("Set".to_string()),
            exclude: Some(String::new()),
            ..Default::default()
        },
    );
    let target = config.target.into_target().unwrap();
    let unit = runner::render(&target).unwrap();

    assert!(unit.content.contains("package set\n"));
    assert!(unit.content.contains("func Map[T, U comparable](xs Set[T], fn func(T) U) Set[U] {"));
    assert_eq!(unit.operations.len(), 11);
}

#[test]
fn test_unknown_exclusion_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("zz.go");

    let config = ConfigManager::merge_cli_args(
        ConfigManager::default_config(),
        &CliArgs {
            pkg: Some("list".to_string()),
            name: Some("*List".to_string()),
            exclude: Some("Find,NotARealOp".to_string()),
            out: Some(out.clone()),
            ..Default::default()
        },
    );
    let target = config.target.into_target().unwrap();

    let err = runner::render(&target).unwrap_err();
    assert!(err.to_string().contains("NotARealOp"));
    assert_eq!(err.exit_code(), 1);
    assert!(!out.exists());
}

#[test]
fn test_missing_required_flag() {
    let config = ConfigManager::merge_cli_args(
        ConfigManager::default_config(),
        &CliArgs {
            name: Some("*List".to_string()),
            out: Some("zz.go".into()),
            ..Default::default()
        },
    );

    let err = config.target.into_target().unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(ConfigError::MissingValue { ref key }) if key == "pkg"
    ));
}

// =============================================================================
// Check
// =============================================================================

#[test]
fn test_check_detects_stale_and_fresh_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("zz_generated.collection.go");

    let config = ConfigManager::merge_cli_args(
        ConfigManager::default_config(),
        &CliArgs {
            pkg: Some("slice".to_string()),
            name: Some("Slice".to_string()),
            out: Some(out.clone()),
            ..Default::default()
        },
    );
    let target = config.target.into_target().unwrap();

    assert_eq!(runner::check(&target).unwrap(), Freshness::Missing);

    let unit = runner::render(&target).unwrap();
    FileWriter::new(false).write(&out, &unit.content).unwrap();
    assert_eq!(runner::check(&target).unwrap(), Freshness::UpToDate);

    let mut narrowed = target.clone();
    narrowed.exclusion.insert("Zip");
    assert_eq!(runner::check(&narrowed).unwrap(), Freshness::Stale);
}

#[test]
fn test_dry_run_leaves_filesystem_untouched() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("nested/zz.go");

    let config = ConfigManager::merge_cli_args(
        ConfigManager::default_config(),
        &CliArgs {
            pkg: Some("list".to_string()),
            name: Some("*List".to_string()),
            out: Some(out.clone()),
            ..Default::default()
        },
    );
    let target = config.target.into_target().unwrap();
    let unit = runner::render(&target).unwrap();

    let result = FileWriter::new(true).write(&out, &unit.content).unwrap();
    assert!(!result.was_written());
    assert!(!out.exists());
    assert!(!dir.path().join("nested").exists());
}
