use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE: &str = include_str!("../fixtures/upsert_employee_workflow.json");

fn flatten_cmd(workdir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("workflow-flatten"));
    cmd.current_dir(workdir).env_remove("RUST_LOG");
    cmd
}

fn project_with_workflow(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let workflow_dir = dir.path().join("UpsertEmployee");
    fs::create_dir_all(&workflow_dir).expect("workflow dir");
    let path = workflow_dir.join("workflow.json");
    fs::write(&path, contents).expect("write workflow");
    (dir, path)
}

fn root_action_names(path: &Path) -> Vec<String> {
    let text = fs::read_to_string(path).expect("read workflow");
    let value: Value = serde_json::from_str(&text).expect("valid json");
    value["definition"]["actions"]
        .as_object()
        .expect("actions")
        .keys()
        .cloned()
        .collect()
}

#[test]
fn rewrites_default_path_and_prints_summary() {
    let (dir, path) = project_with_workflow(FIXTURE);

    flatten_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow transformation complete!"))
        .stdout(predicate::str::contains(
            "Replaced Check/Update/Insert logic with stored procedure call",
        ));

    assert_eq!(
        root_action_names(&path),
        vec![
            "LogStartOfWorkflow",
            "InitializeResults",
            "LogBatchStart",
            "ForEachEmployee",
            "LogBatchComplete",
            "SuccessResponse"
        ]
    );
    let written = fs::read_to_string(&path).expect("read workflow");
    assert!(written.starts_with("{\n  \"definition\": {"));
    assert!(!written.ends_with('\n'));
    assert!(written.is_ascii());
}

#[test]
fn accepts_explicit_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.json");
    fs::write(&path, FIXTURE).expect("write workflow");

    flatten_cmd(dir.path()).arg(&path).assert().success();

    assert_eq!(root_action_names(&path).len(), 6);
}

#[test]
fn dry_run_prints_result_and_leaves_file_untouched() {
    let (dir, path) = project_with_workflow(FIXTURE);

    let output = flatten_cmd(dir.path())
        .arg("--dry-run")
        .output()
        .expect("run");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let printed: Value = serde_json::from_str(stdout.trim_end()).expect("dry run prints json");
    assert!(printed["definition"]["actions"]["ForEachEmployee"]["actions"]["Try"].is_object());
    assert!(!stdout.contains("Workflow transformation complete!"));
    assert_eq!(fs::read_to_string(&path).expect("read"), FIXTURE);
}

#[test]
fn missing_validate_input_fails_without_writing() {
    let mut value: Value = serde_json::from_str(FIXTURE).expect("fixture");
    value["definition"]["actions"]
        .as_object_mut()
        .expect("actions")
        .remove("ValidateInput");
    let original = serde_json::to_string_pretty(&value).expect("serialize");
    let (dir, path) = project_with_workflow(&original);

    flatten_cmd(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("[ERROR] WFF-KEY-001"))
        .stderr(predicate::str::contains("definition.actions.ValidateInput"));

    assert_eq!(fs::read_to_string(&path).expect("read"), original);
}

#[test]
fn second_run_fails_on_migrated_file() {
    let (dir, path) = project_with_workflow(FIXTURE);
    flatten_cmd(dir.path()).assert().success();
    let migrated = fs::read_to_string(&path).expect("read");

    flatten_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("WFF-KEY-001"));

    assert_eq!(fs::read_to_string(&path).expect("read"), migrated);
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempfile::tempdir().expect("tempdir");

    flatten_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("[ERROR] WFF-IO-001"));
}

#[test]
fn malformed_json_reports_parse_error() {
    let (dir, path) = project_with_workflow("{ \"definition\": ");

    flatten_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("[ERROR] WFF-PARSE-001"));

    assert_eq!(fs::read_to_string(&path).expect("read"), "{ \"definition\": ");
}

#[test]
fn invalid_logging_config_is_fatal() {
    let (dir, path) = project_with_workflow(FIXTURE);
    let config_dir = dir.path().join(".workflow-flatten");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("logging.toml"),
        "[logging]\nconsole_output = \"syslog\"\n",
    )
    .expect("write config");

    flatten_cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("logging config"));

    assert_eq!(fs::read_to_string(&path).expect("read"), FIXTURE);
}

#[test]
fn file_sink_writes_log_when_enabled() {
    let (dir, _path) = project_with_workflow(FIXTURE);
    let config_dir = dir.path().join(".workflow-flatten");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("logging.toml"),
        "[logging]\nenable_file = true\nconsole_output = \"none\"\n",
    )
    .expect("write config");

    flatten_cmd(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let log = fs::read_to_string(config_dir.join("logs").join("workflow-flatten.log"))
        .expect("log file");
    assert!(log.contains("workflow rewritten"));
}

#[test]
fn version_flag_reports_crate_version() {
    let dir = tempfile::tempdir().expect("tempdir");

    flatten_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "workflow-flatten {}",
            workflow_flatten::VERSION
        )));
}

#[test]
fn help_mentions_dry_run_and_default_path() {
    let dir = tempfile::tempdir().expect("tempdir");

    flatten_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("UpsertEmployee/workflow.json"));
}
