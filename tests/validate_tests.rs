//! Validate command tests

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn appshell_cmd() -> Command {
    Command::cargo_bin("appshell").unwrap()
}

#[test]
fn test_validate_accepts_healthy_project() {
    let project = common::TestProject::new();
    project.write_manifest("com.example.app", "My App", "dist");
    project.create_web_dir("dist");

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("appshell.config.json is valid"))
        .stdout(predicate::str::contains("webDir 'dist' exists"));
}

#[test]
fn test_validate_quiet_prints_nothing() {
    let project = common::TestProject::new();
    project.write_manifest("com.example.app", "My App", "dist");
    project.create_web_dir("dist");

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_validate_fails_when_web_dir_missing() {
    let project = common::TestProject::new();
    project.write_manifest("com.example.app", "My App", "dist");

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Web directory does not exist"));
}

#[test]
fn test_validate_fails_on_invalid_app_id() {
    let project = common::TestProject::new();
    project.write_manifest("Com.Example.App", "My App", "dist");
    project.create_web_dir("dist");

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid application id"));
}

#[test]
fn test_validate_fails_on_empty_app_name() {
    let project = common::TestProject::new();
    project.write_manifest("com.example.app", "  ", "dist");
    project.create_web_dir("dist");

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("appName cannot be empty"));
}

#[test]
fn test_validate_fails_on_parent_traversal_web_dir() {
    let project = common::TestProject::new();
    project.write_manifest("com.example.app", "My App", "../elsewhere");

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid web directory"));
}

#[test]
fn test_validate_rejects_unknown_manifest_keys() {
    let project = common::TestProject::new();
    project.write_file(
        "appshell.config.json",
        "{\n  \"appId\": \"com.example.app\",\n  \"appName\": \"My App\",\n  \"webDir\": \"dist\",\n  \"plugins\": []\n}\n",
    );
    project.create_web_dir("dist");

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_validate_rejects_missing_manifest_keys() {
    let project = common::TestProject::new();
    project.write_file(
        "appshell.config.json",
        "{\n  \"appId\": \"com.example.app\",\n  \"appName\": \"My App\"\n}\n",
    );

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration file"));
}

#[test]
fn test_validate_outside_project_fails() {
    let project = common::TestProject::new();

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No appshell project found"));
}

#[test]
fn test_validate_succeeds_after_building_assets() {
    let project = common::TestProject::new();
    project.write_manifest("com.example.app", "My App", "dist");

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .failure();

    project.create_web_dir("dist");

    appshell_cmd()
        .current_dir(&project.path)
        .args(["validate"])
        .assert()
        .success();
}
