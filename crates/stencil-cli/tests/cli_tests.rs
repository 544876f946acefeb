//! End-to-end tests for the `stencil` binary.

use std::{fs, path::Path};

use assert_cmd::{Command, cargo};
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config and environment.
fn stencil(workdir: &Path) -> Command {
    let config = workdir.join("stencil-test.toml");
    if !config.exists() {
        fs::write(&config, "").unwrap();
    }

    let mut cmd = cargo::cargo_bin_cmd!("stencil");
    cmd.current_dir(workdir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("STENCIL_DEFAULTS__TEMPLATE")
        .env_remove("STENCIL_DEFAULTS__CICD")
        .env_remove("STENCIL_TEMPLATES__PATH")
        .arg("--config")
        .arg(&config);
    cmd
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_command_help() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--cicd"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn list_shows_builtin_templates() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("classic"))
        .stdout(predicate::str::contains("gRPC-api"))
        .stdout(predicate::str::contains("package"))
        .stdout(predicate::str::contains("rest-api"))
        .stdout(predicate::str::contains("shared").not());
}

#[test]
fn list_json_is_parseable() {
    let temp = TempDir::new().unwrap();
    let out = stencil(temp.path())
        .args(["list", "--format", "json"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let templates: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(templates.as_array().map(Vec::len), Some(4));
}

#[test]
fn new_project_success() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["new", "my-api", "--template", "rest-api", "--cicd", "github", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-api"));

    let project = temp.path().join("my-api");
    assert!(project.join("app.py").is_file());
    assert!(project.join(".github/workflows/ci.yml").is_file());
    let readme = fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.contains("# my-api"));
}

#[test]
fn new_project_in_output_dir() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["new", "my-lib", "-t", "package", "-o", "nested/dir", "-y"])
        .assert()
        .success();

    let setup = fs::read_to_string(temp.path().join("nested/dir/my-lib/setup.py")).unwrap();
    assert!(setup.contains("name='my_lib'"));
}

#[test]
fn new_project_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["new", "demo", "--template", "classic", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn configured_default_template_is_used() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stencil-test.toml"),
        "[defaults]\ntemplate = \"gRPC-api\"\n",
    )
    .unwrap();

    stencil(temp.path())
        .args(["new", "svc", "--yes"])
        .assert()
        .success();

    assert!(temp.path().join("svc/protobufs").is_dir());
}

#[test]
fn unknown_template_fails_with_not_found() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["new", "demo", "--template", "django", "--yes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Template not found: django"))
        .stderr(predicate::str::contains("rest-api"));
}

#[test]
fn missing_template_without_prompt_fails() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["new", "demo", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--template"));
}

#[test]
fn non_empty_destination_fails() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("demo")).unwrap();
    fs::write(temp.path().join("demo/keep.txt"), "mine").unwrap();

    stencil(temp.path())
        .args(["new", "demo", "--template", "classic", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already contains files"));

    assert_eq!(fs::read_dir(temp.path().join("demo")).unwrap().count(), 1);
}

#[test]
fn invalid_project_name_fails() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["new", ".hidden", "--template", "classic", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid project name"));
}

#[test]
fn unknown_cicd_is_rejected_by_parser() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["new", "demo", "--template", "classic", "--cicd", "jenkins"])
        .assert()
        .code(2);
}

#[test]
fn missing_explicit_config_is_a_config_error() {
    let temp = TempDir::new().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!("stencil");
    cmd.current_dir(temp.path())
        .env("NO_COLOR", "1")
        .args(["--config", "does-not-exist.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn config_get_prints_value() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stencil-test.toml"),
        "[defaults]\ncicd = \"azure\"\n",
    )
    .unwrap();

    stencil(temp.path())
        .args(["config", "get", "defaults.cicd"])
        .assert()
        .success()
        .stdout(predicate::str::diff("azure\n"));
}

#[test]
fn completions_generate() {
    let temp = TempDir::new().unwrap();
    stencil(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stencil"));
}
