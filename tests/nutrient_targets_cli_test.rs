// ABOUTME: Integration tests for the nutrient-targets binary
// ABOUTME: Runs the CLI and checks JSON output, flag conflicts, and error exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Diary

//! Integration tests for the `nutrient-targets` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

const MALE_THIRTY: [&str; 10] = [
    "--sex",
    "male",
    "--birth-date",
    "1995-01-15",
    "--height-cm",
    "175",
    "--activity-level",
    "1.5",
    "--today",
    "2025-06-01",
];

/// Run the binary with a clean environment and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_nutrient-targets"))
        .args(args)
        .env_remove("NUTRIENT_REFERENCE_PATH")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn with(extra: &[&'static str]) -> Vec<&'static str> {
    MALE_THIRTY.iter().chain(extra).copied().collect()
}

#[test]
fn test_cli_all_targets() {
    let (exit_code, stdout, _stderr) = run_cli(&with(&["--weight-kg", "75"]));
    assert_eq!(exit_code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["energy"], serde_json::json!(10297));
    assert_eq!(json["protein"], serde_json::json!(75.0));
    assert_eq!(json["ビタミンA"], serde_json::json!(900));
}

#[test]
fn test_cli_with_units() {
    let (exit_code, stdout, _stderr) = run_cli(&with(&["--weight-kg", "75", "--with-units"]));
    assert_eq!(exit_code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["fat"], serde_json::json!({ "value": 286.0, "unit": "g" }));
}

#[test]
fn test_cli_missing_weight_is_degenerate() {
    let (exit_code, stdout, _stderr) = run_cli(&with(&["--pfc-only"]));
    assert_eq!(exit_code, 0);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["protein"], serde_json::json!(0.0));
    assert_eq!(json["energy"], serde_json::json!(4886));
    assert!(json.get("鉄").is_none());
}

#[test]
fn test_cli_pfc_only_conflicts_with_units() {
    let (exit_code, stdout, stderr) = run_cli(&with(&["--pfc-only", "--with-units"]));
    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("cannot be used with"), "stderr: {stderr}");
}

#[test]
fn test_cli_minor_fails() {
    let mut args = MALE_THIRTY;
    args[3] = "2010-01-01";
    let (exit_code, stdout, stderr) = run_cli(&args);
    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("15"), "stderr: {stderr}");
}

#[test]
fn test_cli_unreadable_reference_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_nutrient-targets"))
        .args(MALE_THIRTY)
        .env("NUTRIENT_REFERENCE_PATH", "/nonexistent/intake.json")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
