// CLI tests that never open the terminal UI.

use assert_cmd::Command;
use predicates::prelude::*;

fn twoslit() -> Command {
    Command::cargo_bin("twoslit").unwrap()
}

#[test]
fn help_lists_parameters() {
    twoslit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--d"))
        .stdout(predicate::str::contains("--theta0"))
        .stdout(predicate::str::contains("--dump"));
}

#[test]
fn dump_prints_default_pattern() {
    let output = twoslit().arg("--dump").assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 1001);
    assert_eq!(lines[0], "t,intensity");
    assert_eq!(lines[1], "-0.500,1.000000");
    assert_eq!(lines[501], "0.000,1.000000");
    assert!(lines[1000].starts_with("0.499,"));
}

#[test]
fn dump_without_spacing_is_flat() {
    let output = twoslit()
        .args(["--dump", "--d", "0", "--theta0", "-0.3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    assert!(text
        .lines()
        .skip(1)
        .all(|line| line.ends_with(",1.000000")));
}

#[test]
fn dump_values_are_normalized() {
    let output = twoslit()
        .args(["--dump", "--d", "7.3", "--theta0", "0.21"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    for line in text.lines().skip(1) {
        let (_, value) = line.split_once(',').unwrap();
        let value: f64 = value.parse().unwrap();
        assert!((0.0..=1.0).contains(&value), "bad line {}", line);
    }
}

#[test]
fn out_of_range_spacing_is_rejected() {
    twoslit()
        .args(["--dump", "--d", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value 12 for d"));
}

#[test]
fn out_of_range_angle_is_rejected() {
    twoslit()
        .args(["--dump", "--theta0", "-0.75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("theta0"));
}

#[test]
fn log_file_records_session() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("twoslit.log");

    twoslit()
        .arg("--dump")
        .arg("--log")
        .arg(&log)
        .assert()
        .success();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting Twoslit"));
    assert!(contents.contains("Dumped 1000 samples"));
}
