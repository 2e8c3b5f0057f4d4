use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_evrec(working_dir: &Path, args: &[&str]) -> Output {
    let binary_path = env!("CARGO_BIN_EXE_evrec");
    Command::new(binary_path)
        .current_dir(working_dir)
        .args(args)
        .output()
        .expect("evrec binary should execute")
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent directory should be created");
    }
    fs::write(path, content).expect("file should be written");
}

fn read_store(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("store should be readable"))
        .expect("store JSON should parse")
}

#[test]
fn reconcile_with_default_paths_rewrites_matched_tokens() {
    let temp = TempDir::new().expect("tempdir should be created");

    write_file(
        &temp.path().join("placeholders.json"),
        r#"{
  "<<RESULT_01: Paste actual result>>": "",
  "<<STATUS_01: PASS/FAIL>>": "",
  "<<EVIDENCE_01: Insert log reference>>": "",
  "<<RESULT_16: Paste actual result>>": "",
  "<<NOTE_01: left for the author>>": "manual note"
}"#,
    );
    write_file(
        &temp.path().join("evidence/logs/contract-tests.log"),
        "  TC-SC-01 addCandidate emits event\nTest Files  4 passed (4)\n",
    );
    write_file(
        &temp.path().join("evidence/logs/api-tests.log"),
        "Test Suites: 2 failed, 5 total\n",
    );

    let output = run_evrec(temp.path(), &[]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Suite verdicts: SC=PASS API=FAIL UI=UNKNOWN"),
        "stdout should report suite verdicts, got: {stdout}"
    );
    assert!(
        stdout.contains("Reconciliation status: OK"),
        "stdout should report completion"
    );

    let store = read_store(&temp.path().join("placeholders.json"));
    assert_eq!(
        store["<<RESULT_01: Paste actual result>>"],
        Value::from("passed in suite (see log)")
    );
    assert_eq!(store["<<STATUS_01: PASS/FAIL>>"], Value::from("PASS"));
    assert_eq!(
        store["<<EVIDENCE_01: Insert log reference>>"],
        Value::from("Figure 3.1 (contract test run); log L1")
    );
    assert_eq!(
        store["<<RESULT_16: Paste actual result>>"],
        Value::from("TODO: suite failed; locate specific error for this test")
    );
    assert_eq!(
        store["<<NOTE_01: left for the author>>"],
        Value::from("manual note")
    );
}

#[test]
fn reconcile_accepts_explicit_paths() {
    let temp = TempDir::new().expect("tempdir should be created");
    let store_path = temp.path().join("report/tokens.json");
    let contract_log = temp.path().join("runs/sc.log");

    write_file(
        &store_path,
        r#"{
  "<<RESULT_07: Paste actual result>>": "",
  "<<STATUS_07: PASS/FAIL>>": ""
}"#,
    );
    write_file(
        &contract_log,
        "  12 passing (2s)\n  1 failing\n\n  1) TC-SC-07 reverted with NotEligible\n",
    );

    let output = run_evrec(
        temp.path(),
        &[
            "--placeholders",
            store_path.to_str().expect("utf-8 path"),
            "--contract-log",
            contract_log.to_str().expect("utf-8 path"),
        ],
    );

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let store = read_store(&store_path);
    let result = store["<<RESULT_07: Paste actual result>>"]
        .as_str()
        .expect("result value should be a string");
    assert!(result.contains("confirmed expected failure"));
    assert!(result.contains("NotEligible"));
    assert_eq!(store["<<STATUS_07: PASS/FAIL>>"], Value::from("FAIL"));
}

#[test]
fn malformed_store_fails_before_writing() {
    let temp = TempDir::new().expect("tempdir should be created");
    let store_path = temp.path().join("placeholders.json");
    write_file(&store_path, "{ not json");

    let output = run_evrec(temp.path(), &[]);

    assert_eq!(
        output.status.code(),
        Some(2),
        "malformed store should exit with the input-validation code"
    );
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("ERROR: [INPUT.PLACEHOLDER_JSON]"),
        "stderr should carry the diagnostic line"
    );
    assert_eq!(
        fs::read_to_string(&store_path).expect("store should still be readable"),
        "{ not json",
        "fatal load must leave the store untouched"
    );
}

#[test]
fn missing_store_and_logs_still_produce_a_store_file() {
    let temp = TempDir::new().expect("tempdir should be created");

    let output = run_evrec(temp.path(), &[]);

    assert!(
        output.status.success(),
        "command should succeed, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        String::from_utf8_lossy(&output.stdout)
            .contains("Suite verdicts: SC=UNKNOWN API=UNKNOWN UI=UNKNOWN"),
        "absent logs should classify as unknown"
    );

    let store = read_store(&temp.path().join("placeholders.json"));
    assert_eq!(store, Value::Object(serde_json::Map::new()));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let temp = TempDir::new().expect("tempdir should be created");
    let store_path = temp.path().join("placeholders.json");

    write_file(
        &store_path,
        r#"{
  "<<RESULT_22: Paste actual result>>": "",
  "<<EVIDENCE_22: Insert log reference>>": ""
}"#,
    );
    write_file(
        &temp.path().join("evidence/logs/ui-tests.log"),
        "TC-UI-22 commit flow\nTest Files  3 passed (3)\nTC-UI-22 done\n",
    );

    let first_run = run_evrec(temp.path(), &[]);
    assert!(first_run.status.success());
    let first = fs::read(&store_path).expect("store should be readable");

    let second_run = run_evrec(temp.path(), &[]);
    assert!(second_run.status.success());
    let second = fs::read(&store_path).expect("store should be readable");

    assert_eq!(first, second);
}
