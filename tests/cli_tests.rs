//! Binary-level tests for the `saltrun` command line.

#![cfg(unix)]

mod common;

use std::path::Path;

use assert_cmd::Command;
use common::{OK_STUB, VERDICT_STUB, leftover_captures, write_stub};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

/// `saltrun` configured to run `sh <script>` in `dir`, isolated from the caller's environment.
fn saltrun(dir: &Path, script: &Path) -> Command {
    let mut cmd = Command::cargo_bin("saltrun").unwrap();
    cmd.env_remove("CLASSPATH")
        .env_remove("SALTRUN_JAVA")
        .env("RUST_LOG", "warn")
        .arg("-C")
        .arg(dir)
        .arg("--java")
        .arg("sh")
        .arg("--main-class")
        .arg(script);
    cmd
}

#[test]
fn prints_one_record_per_default_fixture_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_stub(dir.path(), OK_STUB);

    let output = saltrun(dir.path(), &script).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            r#"{file: "InvalidDescrip.xml", out: ["OK\n"], err: [], exit: code 0}"#,
            r#"{file: "ValidSchema.xml", out: ["OK\n"], err: [], exit: code 0}"#,
            r#"{file: "InvalidLevel.xml", out: ["OK\n"], err: [], exit: code 0}"#,
            r#"{file: "ValidDTD.xml", out: ["OK\n"], err: [], exit: code 0}"#,
            r#"{file: "InvalidPickList.xml", out: ["OK\n"], err: [], exit: code 0}"#,
        ]
    );
    assert!(leftover_captures(dir.path()).is_empty());
}

#[test]
fn validator_failures_do_not_change_exit_code_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_stub(dir.path(), VERDICT_STUB);

    saltrun(dir.path(), &script)
        .assert()
        .success()
        .stdout(contains(r#"err: ["InvalidDescrip.xml: not valid TBX\n"], exit: code 1"#));
}

#[test]
fn check_status_turns_validator_failures_into_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_stub(dir.path(), VERDICT_STUB);

    saltrun(dir.path(), &script)
        .arg("--check-status")
        .assert()
        .code(1)
        .stdout(contains("ValidDTD.xml: valid"))
        .stderr(contains("3 of 5 validator run(s) did not exit cleanly"));
}

#[test]
fn selected_fixtures_run_in_given_order() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_stub(dir.path(), OK_STUB);

    let output = saltrun(dir.path(), &script)
        .args(["ValidDTD.xml", "InvalidLevel.xml"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let files: Vec<&str> = stdout
        .lines()
        .map(|l| l.split('"').nth(1).unwrap())
        .collect();
    assert_eq!(files, vec!["ValidDTD.xml", "InvalidLevel.xml"]);
}

#[test]
fn json_format_emits_parseable_lines() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_stub(dir.path(), VERDICT_STUB);

    let output = saltrun(dir.path(), &script)
        .args(["--format", "json", "--launcher", "direct"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let values: Vec<serde_json::Value> = stdout.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(values.len(), 5);
    assert_eq!(values[1]["file"], "ValidSchema.xml");
    assert_eq!(values[1]["out"][0], "ValidSchema.xml: valid\n");
    assert_eq!(values[0]["exit"]["code"], 1);
}

#[test]
fn missing_capture_aborts_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let script = write_stub(dir.path(), OK_STUB);

    saltrun(&dir.path().join("missing"), &script)
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(contains("read_capture").and(contains("InvalidDescrip.xml")));
}

#[test]
fn list_prints_default_fixtures() {
    Command::cargo_bin("saltrun")
        .unwrap()
        .arg("--list")
        .assert()
        .success()
        .stdout("InvalidDescrip.xml\nValidSchema.xml\nInvalidLevel.xml\nValidDTD.xml\nInvalidPickList.xml\n");
}

#[test]
fn rejects_unknown_format() {
    Command::cargo_bin("saltrun")
        .unwrap()
        .args(["--format", "xml"])
        .assert()
        .code(2);
}
