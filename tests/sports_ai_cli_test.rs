// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Integration tests for the sports-ai-cli binary
// ABOUTME: Runs reference and demo commands and checks their JSON output

//! Integration tests for the sports-ai-cli binary.
//!
//! These tests verify command structure, JSON output, and error exits.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

/// Helper to run CLI command and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_sports-ai-cli"))
        .args(args)
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

fn run_json(args: &[&str]) -> Value {
    let (exit_code, stdout, stderr) = run_cli(args);
    assert_eq!(exit_code, 0, "command {args:?} failed: {stderr}");
    serde_json::from_str(&stdout).unwrap()
}

#[test]
fn test_cli_help_shows_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);

    assert_eq!(exit_code, 0, "CLI help should exit with 0");
    for command in ["sports", "translate", "evaluate", "assess", "leaderboard"] {
        assert!(stdout.contains(command), "Help should mention '{command}'");
    }
}

#[test]
fn test_cli_sports_available_only() {
    let all = run_json(&["sports"]);
    let open = run_json(&["sports", "--available-only"]);

    assert_eq!(all.as_array().unwrap().len(), 5);
    assert_eq!(open.as_array().unwrap().len(), 4);
    assert!(open
        .as_array()
        .unwrap()
        .iter()
        .all(|card| card["sport"] != "shotput"));
}

#[test]
fn test_cli_translate_hindi() {
    let value = run_json(&["translate", "results", "--language", "hi"]);

    assert_eq!(value["language"], "hi");
    assert_eq!(value["text"], "परिणाम");
}

#[test]
fn test_cli_dictionary_written_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hi.json");

    let (exit_code, stdout, _stderr) =
        run_cli(&["dictionary", "hi", "--output", path.to_str().unwrap()]);
    assert_eq!(exit_code, 0);
    assert!(stdout.trim().is_empty());

    let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 38);
    assert_eq!(value["selectSport"], "खेल चुनें");
}

#[test]
fn test_cli_unsupported_dictionary_fails() {
    let (exit_code, _stdout, stderr) = run_cli(&["dictionary", "fr"]);

    assert_ne!(exit_code, 0);
    assert!(stderr.contains("fr"));
}

#[test]
fn test_cli_evaluate_score() {
    let value = run_json(&["evaluate", "vertical_jump", "65"]);

    assert_eq!(value["score"], "65 cm");
    let percentile = value["comparison"]["percentile"].as_u64().unwrap();
    assert!(percentile <= 100);
}

#[test]
fn test_cli_invalid_sport() {
    let (exit_code, _stdout, _stderr) = run_cli(&["evaluate", "cricket", "10"]);
    assert_ne!(exit_code, 0, "Unknown sport should fail");
}

#[test]
fn test_cli_leaderboard_demo() {
    let value = run_json(&["leaderboard", "--scope", "district"]);

    assert_eq!(value["total"], 3);
    assert_eq!(value["ownRank"]["rank"], 3);
}

#[test]
fn test_cli_assess_without_delay() {
    let value = run_json(&["assess", "situps", "--delay-ms", "0"]);

    assert_eq!(value["result"]["sportId"], "situps");
    assert!(value["card"]["score"].is_string());
}
