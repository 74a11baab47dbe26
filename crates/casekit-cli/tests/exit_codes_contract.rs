//! Exit-code contract: 0 success/pass, 1 reported check failure,
//! 2 fatal I/O or malformed input.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn casekit() -> Command {
    Command::cargo_bin("casekit").unwrap()
}

fn write_trace_tables(root: &Path, spec_to_test: &str, test_to_evidence: &str) {
    let trace = root.join("safety-case/traceability");
    fs::create_dir_all(&trace).unwrap();
    fs::write(trace.join("req_to_spec.csv"), "req_id,spec_id\nR1,S1\n").unwrap();
    fs::write(trace.join("spec_to_test.csv"), spec_to_test).unwrap();
    fs::write(trace.join("test_to_evidence.csv"), test_to_evidence).unwrap();
}

#[test]
fn replaycheck_match_exits_zero() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "deadbeef\n").unwrap();
    fs::write(&b, "  deadbeef").unwrap();

    casekit()
        .arg("replaycheck")
        .arg("--first")
        .arg(&a)
        .arg("--second")
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("replay hash match: deadbeef"));
}

#[test]
fn replaycheck_mismatch_exits_one_and_reports_both() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "deadbeef").unwrap();
    fs::write(&b, "feedface").unwrap();

    casekit()
        .arg("replaycheck")
        .arg("--first")
        .arg(&a)
        .arg("--second")
        .arg(&b)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "replay hash mismatch: deadbeef != feedface",
        ));
}

#[test]
fn replaycheck_unreadable_file_is_fatal() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("a.txt");
    fs::write(&a, "deadbeef").unwrap();

    casekit()
        .arg("replaycheck")
        .arg("--first")
        .arg(&a)
        .arg("--second")
        .arg(dir.path().join("absent.txt"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fatal:"));
}

#[test]
fn tracecheck_missing_mapping_exits_one_with_report() {
    let dir = tempdir().unwrap();
    write_trace_tables(
        dir.path(),
        "spec_id,test_id\nS1,A\nS1,B\n",
        "test_id,evidence_artifact\nA,evidence/a.json\n",
    );
    fs::create_dir_all(dir.path().join("evidence")).unwrap();
    fs::write(dir.path().join("evidence/a.json"), "{}").unwrap();

    casekit()
        .arg("tracecheck")
        .arg("--repo-root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "spec_to_test test IDs missing in test_to_evidence",
        ));

    let report: Value = serde_json::from_str(
        &fs::read_to_string(dir.path().join("evidence/manifests/tracecheck-report.json"))
            .unwrap(),
    )
    .unwrap();
    assert_eq!(report["status"], "fail");
    assert_eq!(report["requirements"], 1);
    assert_eq!(report["missing_evidence_mappings"], serde_json::json!(["B"]));
}

#[test]
fn tracecheck_allow_missing_evidence_still_fails_on_missing_mapping() {
    let dir = tempdir().unwrap();
    write_trace_tables(
        dir.path(),
        "spec_id,test_id\nS1,B\n",
        "test_id,evidence_artifact\nA,evidence/gone.json\n",
    );

    casekit()
        .arg("tracecheck")
        .arg("--repo-root")
        .arg(dir.path())
        .arg("--allow-missing-evidence")
        .assert()
        .code(1);
}

#[test]
fn tracecheck_allow_missing_evidence_tolerates_absent_files() {
    let dir = tempdir().unwrap();
    write_trace_tables(
        dir.path(),
        "spec_id,test_id\nS1,A\n",
        "test_id,evidence_artifact\nA,evidence/gone.json\n",
    );

    casekit()
        .arg("tracecheck")
        .arg("--repo-root")
        .arg(dir.path())
        .arg("--allow-missing-evidence")
        .assert()
        .success()
        .stdout(predicate::str::contains("tracecheck passed"));
}

#[test]
fn tracecheck_missing_table_is_fatal() {
    let dir = tempdir().unwrap();

    casekit()
        .arg("tracecheck")
        .arg("--repo-root")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("fatal:"));
}

#[test]
fn tracecheck_custom_report_path_is_honored() {
    let dir = tempdir().unwrap();
    write_trace_tables(
        dir.path(),
        "spec_id,test_id\n",
        "test_id,evidence_artifact\n",
    );

    casekit()
        .arg("tracecheck")
        .arg("--repo-root")
        .arg(dir.path())
        .arg("--report-path")
        .arg("out/report.json")
        .assert()
        .success();

    assert!(dir.path().join("out/report.json").exists());
}
