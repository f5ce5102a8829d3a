//! CLI tests: exit codes, report output and error messages of the binary

use super::test_utils::Fixture;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn hashguard(fixture: &Fixture) -> Command {
    let mut cmd = Command::cargo_bin("hashguard").unwrap();
    cmd.current_dir(fixture.root())
        .env("XDG_CONFIG_HOME", fixture.root().join("xdg"))
        .env_remove("HASHGUARD_LOG")
        .arg("--baseline")
        .arg(&fixture.baseline);
    cmd
}

#[test]
fn test_record_exits_zero_and_writes_baseline() {
    let fixture = Fixture::new();
    fixture.write("a.txt", "alpha");

    hashguard(&fixture)
        .arg("record")
        .arg(&fixture.data)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Hashes saved for 1 file(s)"));

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&fixture.baseline).unwrap()).unwrap();
    assert!(saved.get(fixture.key("a.txt")).is_some());
}

#[test]
fn test_clean_check_exits_zero() {
    let fixture = Fixture::new();
    fixture.write("a.txt", "alpha");

    hashguard(&fixture).arg("record").arg(&fixture.data).assert().code(0);
    hashguard(&fixture)
        .arg("check")
        .arg(&fixture.data)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("All files are intact."));
}

#[test]
fn test_changes_exit_one() {
    let fixture = Fixture::new();
    fixture.write("a.txt", "alpha");
    hashguard(&fixture).arg("record").arg(&fixture.data).assert().code(0);

    fixture.write("a.txt", "tampered");
    fixture.write("b.txt", "new");

    hashguard(&fixture)
        .arg("check")
        .arg(&fixture.data)
        .assert()
        .code(1)
        .stdout(
            predicate::str::contains("Modified Files:")
                .and(predicate::str::contains(fixture.key("a.txt")))
                .and(predicate::str::contains("New Files:"))
                .and(predicate::str::contains("Deleted Files:").not()),
        );
}

#[test]
fn test_json_report() {
    let fixture = Fixture::new();
    fixture.write("a.txt", "alpha");
    hashguard(&fixture).arg("record").arg(&fixture.data).assert().code(0);
    fs::remove_file(fixture.data.join("a.txt")).unwrap();

    let output = hashguard(&fixture)
        .arg("check")
        .arg(&fixture.data)
        .arg("--format")
        .arg("json")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["status"], "changes_detected");
    assert_eq!(report["deleted"][0], fixture.key("a.txt"));
    assert_eq!(report["added"].as_array().unwrap().len(), 0);
}

#[test]
fn test_missing_directory_exits_two() {
    let fixture = Fixture::new();

    hashguard(&fixture)
        .arg("check")
        .arg(fixture.root().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot traverse root"));
}

#[test]
fn test_corrupt_baseline_exits_two() {
    let fixture = Fixture::new();
    fixture.write("a.txt", "alpha");
    fs::write(&fixture.baseline, "[1, 2, 3]").unwrap();

    hashguard(&fixture)
        .arg("check")
        .arg(&fixture.data)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("corrupt"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_invalid_config_exits_two() {
    let fixture = Fixture::new();
    let config = fixture.root().join("bad.toml");
    fs::write(&config, "[scan]\nchunk_size = 0\n").unwrap();

    hashguard(&fixture)
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&fixture.data)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("chunk_size"));
}

#[test]
fn test_usage_error_is_not_success() {
    let fixture = Fixture::new();
    hashguard(&fixture).arg("verify").assert().failure();
}
