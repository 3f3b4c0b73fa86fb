// End-to-end runs of the sset-bench binary

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn sset_bench() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("sset-bench")?;
    cmd.env("SSET_BENCH_CONFIG", "does/not/exist.json")
        .env("RUST_LOG", "error");
    Ok(cmd)
}

fn histogram_count(text: &str) -> Option<u64> {
    let line = text.lines().find(|l| l.starts_with("Count: "))?;
    line["Count: ".len()..].split_whitespace().next()?.parse().ok()
}

#[test]
fn add_reports_every_insert() -> TestResult {
    let output = sset_bench()?
        .args(["--operation", "add", "--nKeys", "100", "--keySize", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total time taken to insert 100 keys with each key is size of 10 is: ",
        ))
        .stdout(predicate::str::is_match(r"insert operation is : [1-9][0-9]* Bytes")?)
        .stdout(predicate::str::is_match(r"Took \d+ ms\n$")?)
        .get_output()
        .stdout
        .clone();

    assert_eq!(histogram_count(&String::from_utf8(output)?), Some(100));
    Ok(())
}

#[test]
fn erase_times_the_fraction() -> TestResult {
    let output = sset_bench()?
        .args([
            "--operation",
            "erase",
            "--nKeys",
            "100",
            "--keySize",
            "10",
            "--fraction",
            "0.3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total time taken to Erase 30 keys"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output)?;
    assert_eq!(histogram_count(&text), Some(30));

    let line = text
        .lines()
        .find(|l| l.starts_with("Memory consumed before erasing 30%"))
        .ok_or("missing memory line")?;
    let figures: Vec<u64> = line
        .split_whitespace()
        .filter_map(|w| w.parse().ok())
        .collect();
    // [before, after]
    assert_eq!(figures.len(), 2);
    assert!(figures[1] <= figures[0]);
    Ok(())
}

#[test]
fn unknown_operation_is_fatal() -> TestResult {
    sset_bench()?
        .args(["--operation", "bogus"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Total time taken").not())
        .stdout(predicate::str::contains("Took ").not())
        .stderr(predicate::str::contains("Unknown operation bogus"));
    Ok(())
}

#[test]
fn json_report_is_one_document() -> TestResult {
    let output = sset_bench()?
        .args([
            "--operation",
            "find",
            "--nKeys",
            "50",
            "--keySize",
            "8",
            "--fraction",
            "1.5",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert_eq!(value["operation"], "find");
    assert_eq!(value["fraction"], 1.0);
    assert_eq!(value["outcome"]["timed_ops"], 50);
    Ok(())
}

#[test]
fn config_file_is_overridden_by_flags() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(file, r#"{{"bench": {{"operation": "find", "nKeys": 500, "keySize": 6}}}}"#)?;

    Command::cargo_bin("sset-bench")?
        .env("RUST_LOG", "error")
        .arg("--config")
        .arg(file.path())
        .args(["--nKeys", "40", "--fraction", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total time taken to Find 20 keys with each key is size of 6",
        ));
    Ok(())
}

#[test]
fn unreadable_config_is_fatal() -> TestResult {
    let mut file = NamedTempFile::new()?;
    write!(file, "{{ not json")?;

    Command::cargo_bin("sset-bench")?
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn save_config_writes_effective_settings() -> TestResult {
    let dir = tempfile::TempDir::new()?;
    let saved = dir.path().join("effective.json");

    sset_bench()?
        .args(["--operation", "find", "--nKeys", "20", "--keySize", "5"])
        .arg("--save-config")
        .arg(&saved)
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&saved)?)?;
    assert_eq!(value["bench"]["operation"], "find");
    assert_eq!(value["bench"]["nKeys"], 20);
    Ok(())
}
