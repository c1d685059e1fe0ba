//! End-to-end tests for the approval-report binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn approval_report() -> Command {
    let mut cmd = Command::cargo_bin("approval-report").unwrap();
    for var in [
        "APPROVAL_DIFF_TOOL",
        "APPROVAL_IMAGE_TOOL",
        "APPROVAL_LAUNCHER",
        "APPROVAL_USE_REPORTERS",
        "APPROVAL_REPORT_FORMAT",
        "APPROVAL_REPORT_CONFIG",
        "APPROVAL_FILE_TYPE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_which_text_is_diff() {
    approval_report()
        .args(["which", "txt", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""reporters": ["#))
        .stdout(predicate::str::contains(r#""diff""#))
        .stdout(predicate::str::contains(r#""kind": "file-type""#));
}

#[test]
fn test_which_unknown_is_fallback() {
    approval_report()
        .args(["which", "unknown-ext", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""quiet""#))
        .stdout(predicate::str::contains(r#""kind": "fallback""#));
}

#[test]
fn test_which_with_overrides_is_composite() {
    approval_report()
        .args([
            "which",
            "png",
            "--use-reporter",
            "diff,quiet",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""composite": true"#))
        .stdout(predicate::str::contains(r#""kind": "override""#))
        .stdout(predicate::str::contains("approval-report::which"));
}

#[test]
fn test_unknown_reporter_name_fails() {
    approval_report()
        .args(["which", "txt", "--use-reporter", "sparkles"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sparkles"));
}

#[test]
fn test_list_shows_table() {
    approval_report()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""fallback": "quiet""#))
        .stdout(predicate::str::contains(r#""reporter": "image""#));
}

#[test]
fn test_report_with_quiet_override() {
    let temp = TempDir::new().unwrap();
    let received = temp.path().join("receipt.received.txt");
    let approved = temp.path().join("receipt.approved.txt");
    std::fs::write(&received, "total: 42\n").unwrap();
    std::fs::write(&approved, "total: 41\n").unwrap();

    approval_report()
        .arg("report")
        .arg(&received)
        .arg(&approved)
        .args(["--use-reporter", "quiet"])
        .assert()
        .success()
        .stderr(predicate::str::contains("quiet"));
}

#[test]
fn test_list_with_bad_settings_file_fails() {
    let temp = TempDir::new().unwrap();
    let settings = temp.path().join("approvals.toml");
    std::fs::write(&settings, "[tools\n").unwrap();

    approval_report()
        .args(["list", "--config"])
        .arg(&settings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load tool settings"));
}

#[test]
fn test_report_with_bad_settings_file_fails() {
    let temp = TempDir::new().unwrap();
    let settings = temp.path().join("approvals.toml");
    let received = temp.path().join("receipt.received.txt");
    let approved = temp.path().join("receipt.approved.txt");
    std::fs::write(&settings, "[tools\n").unwrap();
    std::fs::write(&received, "total: 42\n").unwrap();
    std::fs::write(&approved, "total: 41\n").unwrap();

    approval_report()
        .arg("report")
        .arg(&received)
        .arg(&approved)
        .arg("--config")
        .arg(&settings)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load tool settings"));
}
