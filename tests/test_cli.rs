use std::fs;
use std::path::PathBuf;
use std::process::Command;

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use tempfile::TempDir;

const SAMPLES: &str = r#"[
    {"timestamp": 1, "value": 10},
    {"timestamp": 2, "value": 20},
    {"timestamp": 3, "value": 30}
]"#;

fn write_samples(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("samples.json");
    fs::write(&path, SAMPLES).unwrap();
    path
}

fn run_with(args: &[&str]) -> String {
    let temp_dir = TempDir::new().unwrap();
    let file = write_samples(&temp_dir);
    let output = Command::cargo_bin("sparseline")
        .unwrap()
        .args(&["--file", file.to_str().unwrap()])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn cli_exact_lookup() {
    assert_eq!(run_with(&["--at", "2"]), "20");
}

#[test]
fn cli_closest_lookup() {
    assert_eq!(run_with(&["--at", "2.4"]), "20");
    assert_eq!(run_with(&["--at", "2.6"]), "30");
}

#[test]
fn cli_no_interpolation_miss() {
    assert_eq!(run_with(&["--at", "2.5", "--strategy", "none"]), "no value");
}

#[test]
fn cli_linear_lookup() {
    assert_eq!(run_with(&["--at", "2.5", "--strategy", "linear"]), "25");
}

#[test]
fn cli_windowed_past_lookup() {
    assert_eq!(
        run_with(&["--at", "4.5", "--strategy", "past", "--max-distance", "2"]),
        "30"
    );
    assert_eq!(
        run_with(&["--at", "9.0", "--strategy", "past", "--max-distance", "2"]),
        "no value"
    );
}

#[test]
fn cli_prune_before_lookup() {
    assert_eq!(
        run_with(&["--at", "2", "--prune", "2:3", "--strategy", "none"]),
        "no value"
    );
}

#[test]
fn cli_rejects_inverted_prune_range() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_samples(&temp_dir);
    Command::cargo_bin("sparseline")
        .unwrap()
        .args(&["--file", file.to_str().unwrap(), "--at", "2", "--prune", "3:2"])
        .assert()
        .failure();
}

#[test]
fn cli_rejects_unknown_strategy() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_samples(&temp_dir);
    Command::cargo_bin("sparseline")
        .unwrap()
        .args(&[
            "--file",
            file.to_str().unwrap(),
            "--at",
            "2",
            "--strategy",
            "nearest-ish",
        ])
        .assert()
        .failure();
}
