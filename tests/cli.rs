//! End-to-end tests of the `fuzzy-fan` binary.

use std::process::{Command, Output};

fn fuzzy_fan(args: &[&str]) -> Output {
    let dir = tempfile::tempdir().unwrap();

    Command::new(env!("CARGO_BIN_EXE_fuzzy-fan"))
        .args(args)
        .current_dir(dir.path())
        .env_remove("FUZZY_FAN_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_degrees() {
    let output = fuzzy_fan(&["degrees", "temperature", "25"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("degrees of membership for 25 °C: low 0.50, medium 0.75, high 0.25"));
}

#[test]
fn test_degrees_out_of_domain() {
    let output = fuzzy_fan(&["degrees", "temperature", "55"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("temperature must be within 0-40 °C, got 55"));

    let output = fuzzy_fan(&["degrees", "temperature", "55", "--unchecked", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(value["degrees"]["high"], 1.75);
}

#[test]
fn test_curve_json() {
    let output = fuzzy_fan(&["curve", "velocidad", "--format", "json", "--marker", "60"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(value["variable"], "fan_speed");
    assert_eq!(value["labels"], serde_json::json!(["slow", "medium", "fast"]));
    assert_eq!(value["points"].as_array().map(Vec::len), Some(101));
    assert_eq!(value["marker"]["degrees"]["low"], 0.6);
}

#[test]
fn test_curve_invalid_step() {
    let output = fuzzy_fan(&["curve", "humidity", "--step", "0"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid sampling step 0"));

    let output = fuzzy_fan(&["curve", "temperature", "--step", "1e-300"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("yield at most 1000000 points"));
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fan.toml");
    std::fs::write(&path, "[sampling]\nstep = 10\n\n[output]\nformat = \"json\"\n").unwrap();

    let output = fuzzy_fan(&["curve", "temperature", "--config", path.to_str().unwrap()]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["points"].as_array().map(Vec::len), Some(5));
}
