//! Integration tests for the roi-engine binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Run from an empty directory so no stray config file is discovered.
fn roi_engine(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("roi-engine");
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("stdout is not valid JSON")
}

#[test]
fn test_estimate_json_output() {
    let temp = TempDir::new().unwrap();
    let output = roi_engine(&temp)
        .args(["estimate", "--cost", "75000", "--hours", "80", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["mode"], "individual");
    assert_eq!(json["output"]["cta_tier"], "strong");
    assert_eq!(json["output"]["cta_enabled"], true);
    assert_eq!(json["output"]["estimate"]["confidence_score"], 5);
    let adjusted = json["output"]["estimate"]["adjusted_annual"].as_f64().unwrap();
    assert!((adjusted - 245_454.545).abs() < 0.01);
    assert!(json["metadata"]["tool_version"].is_string());
}

#[test]
fn test_team_estimate_writes_output_file() {
    let temp = TempDir::new().unwrap();
    let report_path = temp.path().join("report.json");
    roi_engine(&temp)
        .args([
            "estimate",
            "--mode",
            "team",
            "--cost",
            "500000",
            "--hours",
            "200",
            "--team-size",
            "5",
            "--format",
            "json",
            "--output",
        ])
        .arg(&report_path)
        .assert()
        .success();

    let json: Value = serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["output"]["bounds"]["max_hours"], 800.0);
    assert_eq!(json["output"]["cta_tier"], "significant");
}

#[test]
fn test_strict_fails_when_inputs_are_invalid() {
    let temp = TempDir::new().unwrap();
    let output = roi_engine(&temp)
        .args([
            "estimate", "--cost", "3000", "--hours", "40", "--strict", "--plain",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Minimum salary should be ₹5,000"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please fix the errors above"));
}

#[test]
fn test_markdown_report() {
    let temp = TempDir::new().unwrap();
    let output = roi_engine(&temp)
        .args(["estimate", "-m", "single", "--cost", "75000", "--hours", "80", "-f", "markdown"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("# Automation ROI Estimate"));
    assert!(stdout.contains("Estimated Annual Savings"));
}

#[test]
fn test_configured_default_format_is_used() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".roi-engine.toml"),
        indoc! {r#"
            [output]
            default_format = "json"
        "#},
    )
    .unwrap();

    let output = roi_engine(&temp)
        .args(["estimate", "--cost", "75000", "--hours", "80"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["output"]["cta_tier"], "strong");
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    roi_engine(&temp)
        .args(["estimate", "--cost", "75000", "--hours", "80", "-c", "nope.toml"])
        .assert()
        .failure();
}

#[test]
fn test_replay_toml_script() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("flow.toml");
    fs::write(
        &script,
        indoc! {r#"
            [[events]]
            kind = "set_mode"
            mode = "team"

            [[events]]
            kind = "set_monthly_cost"
            value = 500000.0

            [[events]]
            kind = "set_hours"
            value = 1000.0

            [[events]]
            kind = "set_team_size"
            value = 5
        "#},
    )
    .unwrap();

    let output = roi_engine(&temp)
        .arg("replay")
        .arg(&script)
        .args(["-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["mode"], "team");
    assert_eq!(json["input"]["team_size_explicitly_set"], true);
    assert_eq!(
        json["output"]["validation"]["hours"]["message"],
        "Maximum 800 hours/month (5 x 160h)"
    );
    assert_eq!(json["output"]["cta_enabled"], false);
}

#[test]
fn test_bounds_table() {
    let temp = TempDir::new().unwrap();
    let output = roi_engine(&temp)
        .args(["bounds", "--team-size", "8"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Team, size set (8)"));
    assert!(stdout.contains("1,280"));
}

#[test]
fn test_init_creates_config_once() {
    let temp = TempDir::new().unwrap();
    roi_engine(&temp).arg("init").assert().success();
    assert!(temp.path().join(".roi-engine.toml").exists());

    roi_engine(&temp).arg("init").assert().failure();
    roi_engine(&temp).args(["init", "--force"]).assert().success();
}
