mod common;

use std::fs;
use std::process::Command;

use common::{engineering_department, unique_temp_path, CsvFixture};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_synergy-select")
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(bin())
        .args(args)
        .env("SYNERGY_LOG", "warn")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

#[test]
fn missing_command_prints_usage() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: synergy-select"));
}

#[test]
fn generate_command_emits_team_json() {
    let path = engineering_department().write_temp("generate");
    let data = path.to_string_lossy();

    let output = run(&["generate", "Engineering", "12", "80000", "--data", data.as_ref()]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));

    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("generate should emit json");
    assert_eq!(payload["Team_List"], 12);
    assert_eq!(payload["Candidates"].as_array().map(Vec::len), Some(12));

    let _ = fs::remove_file(path);
}

#[test]
fn generate_command_renders_table() {
    let path = engineering_department().write_temp("generate-table");
    let data = path.to_string_lossy();

    let output = run(&["generate", "Engineering", "6", "60000", "--table", "--data", data.as_ref()]);
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("employee_id\trole"));
    // header, six members, totals
    assert_eq!(stdout.lines().count(), 8);

    let _ = fs::remove_file(path);
}

#[test]
fn generate_command_fails_on_infeasible_budget() {
    let path = engineering_department().write_temp("infeasible");
    let data = path.to_string_lossy();

    let output = run(&["generate", "Engineering", "12", "100", "--data", data.as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("budget_infeasible"));

    let _ = fs::remove_file(path);
}

#[test]
fn generate_command_rejects_non_numeric_size() {
    let output = run(&["generate", "Engineering", "twelve", "80000"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid team_size"));
}

#[test]
fn departments_command_lists_summaries() {
    let path = engineering_department().write_temp("departments");
    let data = path.to_string_lossy();

    let output = run(&["departments", "--data", data.as_ref()]);
    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(payload[0]["department"], "Engineering");
    assert_eq!(payload[0]["headcount"], 29);

    let _ = fs::remove_file(path);
}

#[test]
fn missing_data_file_fails() {
    let path = unique_temp_path("absent", "csv");
    let output = run(&["departments", "--data", path.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to load employee data"));
}

#[test]
fn validate_command_passes_clean_export() {
    let path = engineering_department().write_temp("valid");
    let output = run(&["validate", path.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("validation passed"));

    let _ = fs::remove_file(path);
}

#[test]
fn validate_command_returns_non_zero_on_invalid_data() {
    let fixture = CsvFixture::new()
        .employee("Sales", "Manager", "Female", 8000.0)
        .employee("Sales", "Analyst", "Male", 0.0);
    let path = fixture.write_temp("invalid");

    let output = run(&["validate", path.to_string_lossy().as_ref()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("validation failed"));

    let _ = fs::remove_file(path);
}
