/// End-to-end tests for config file loading and CLI option merging.
///
/// Each test runs the binary inside its own temporary directory so that
/// config auto-discovery only sees the files the test wrote.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Absolute path to the shared sample report.
fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample-report.txt")
}

/// Write a `gradle-deptree.config.yml` into `dir`.
fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("gradle-deptree.config.yml"), content).unwrap();
}

// ============================================================================
// Auto-discovery
// ============================================================================

#[test]
fn test_discovered_config_sets_format() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "format: markdown\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Dependency Tree"));
}

#[test]
fn test_discovered_config_sets_search() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "search: annotations\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching dependencies: 2"))
        .stdout(predicate::str::contains(
            "org.jetbrains.kotlin:kotlin-stdlib:1.9.22\n  org.jetbrains:annotations:13.0\n",
        ));
}

#[test]
fn test_discovered_config_sets_max_depth_and_orphans() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "max_depth: 1\npromote_orphans: true\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .write_stdin("   +--- x:orphan:1.0\n   |    \\--- x:child:1.0\n+--- a:b:1.0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("x:orphan:1.0 [+1]\na:b:1.0\n"));
}

#[test]
fn test_no_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Total dependencies: 14"));
}

// ============================================================================
// CLI precedence
// ============================================================================

#[test]
fn test_cli_format_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "format: markdown\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn test_cli_search_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "search: does-not-exist\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .args(["--search", "coil"])
        .assert()
        .success()
        .stdout(predicate::str::contains("io.coil-kt:coil:2.5.0"));
}

#[test]
fn test_config_search_without_match_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "search: does-not-exist\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .assert()
        .code(1);
}

// ============================================================================
// Explicit --config
// ============================================================================

#[test]
fn test_explicit_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("custom.yml");
    fs::write(&config_path, "format: json\nsearch: gson\n").unwrap();

    let output = cargo_bin_cmd!("gradle-deptree")
        .arg(fixture())
        .arg("--config")
        .arg(&config_path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["query"], "gson");
    assert_eq!(json["statistics"]["matchingDependencies"], 2);
}

#[test]
fn test_explicit_config_missing_exits_three() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("gradle-deptree")
        .arg(fixture())
        .arg("--config")
        .arg(temp_dir.path().join("missing.yml"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to read config file"));
}

// ============================================================================
// Invalid configs
// ============================================================================

#[test]
fn test_invalid_yaml_exits_three() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "format: [unclosed\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_invalid_format_in_config_exits_three() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "format: xml\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid format: xml"));
}

#[test]
fn test_zero_max_depth_in_config_exits_three() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "max_depth: 0\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .assert()
        .code(3);
}

#[test]
fn test_unknown_field_warns_but_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    write_config(temp_dir.path(), "format: text\ncolour: true\n");

    cargo_bin_cmd!("gradle-deptree")
        .current_dir(temp_dir.path())
        .arg(fixture())
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Unknown config field 'colour' will be ignored",
        ));
}
