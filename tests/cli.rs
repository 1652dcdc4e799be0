// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 slipway contributors

//! End-to-end CLI tests
//!
//! The external bundler, minifier, and stylesheet compiler are replaced by
//! shell stand-ins so the full pipeline can run inside a temp directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

const CONFIG: &str = r#"
script:
  source: src/app.js
  out_dir: dist/js
  bundle_name: bundle.js
  bundler: { program: cat, args: [] }
  minifier: { program: cat, args: [] }
styles:
  command: "printf 'body{color:red}' > src/main.css"
  shell: sh
  file: src/main.css
  dist_dir: dist/css
"#;

fn setup_project(dir: &Path, config: &str) {
    std::fs::create_dir_all(dir.join("src")).unwrap();
    std::fs::write(dir.join("src/app.js"), "console.log('hi');\n").unwrap();
    std::fs::write(dir.join("slipway.yaml"), config).unwrap();
}

fn slipway(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("slipway").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn default_build_produces_all_three_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);

    slipway(dir.path()).assert().success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("dist/js/bundle.js")).unwrap(),
        "console.log('hi');\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("src/main.css")).unwrap(),
        "body{color:red}"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("dist/css/main.css")).unwrap(),
        "body{color:red}"
    );
}

#[test]
fn rerun_overwrites_artifacts_without_cleanup() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);

    slipway(dir.path()).assert().success();

    std::fs::write(dir.path().join("src/app.js"), "console.log('bye');\n").unwrap();
    slipway(dir.path()).assert().success();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("dist/js/bundle.js")).unwrap(),
        "console.log('bye');\n"
    );
    assert!(dir.path().join("dist/css/main.css").exists());
}

#[test]
fn failing_stylesheet_compiler_skips_copy_and_fails_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = CONFIG.replace(
        "printf 'body{color:red}' > src/main.css",
        "echo no styles for you >&2; exit 1",
    );
    setup_project(dir.path(), &config);

    slipway(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("skipped"))
        .stderr(predicate::str::contains("no styles for you"));

    // The copy never happened; the independent script task still ran
    assert!(!dir.path().join("dist/css/main.css").exists());
    assert!(dir.path().join("dist/js/bundle.js").exists());
}

#[test]
fn missing_script_source_fails_and_writes_no_script_output() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);
    std::fs::remove_file(dir.path().join("src/app.js")).unwrap();

    slipway(dir.path()).arg("script").assert().failure();

    assert!(!dir.path().join("dist/js/bundle.js").exists());
    assert!(!dir.path().join("dist/js").exists());
}

#[test]
fn single_task_runs_only_its_closure() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);

    slipway(dir.path()).arg("styles").assert().success();

    // styles pulls in compile-styles but not script
    assert!(dir.path().join("dist/css/main.css").exists());
    assert!(!dir.path().join("dist/js/bundle.js").exists());
}

#[test]
fn dry_run_executes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);

    slipway(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Execution plan"));

    assert!(!dir.path().join("dist").exists());
    assert!(!dir.path().join("src/main.css").exists());
}

#[test]
fn unknown_task_fails_before_running_anything() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);

    slipway(dir.path())
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("deploy"));

    assert!(!dir.path().join("dist").exists());
}

#[test]
fn list_shows_registered_tasks() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);

    slipway(dir.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("script")
                .and(predicate::str::contains("compile-styles"))
                .and(predicate::str::contains("default")),
        );
}

#[test]
fn graph_dot_output_contains_edges() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);

    slipway(dir.path())
        .args(["--graph", "dot"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("digraph tasks")
                .and(predicate::str::contains("\"compile-styles\" -> \"styles\"")),
        );
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);

    slipway(dir.path())
        .args(["--config", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.yaml"));
}

#[test]
fn directory_flag_changes_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    setup_project(dir.path(), CONFIG);

    Command::cargo_bin("slipway")
        .unwrap()
        .args(["-C", dir.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(dir.path().join("dist/js/bundle.js").exists());
}
