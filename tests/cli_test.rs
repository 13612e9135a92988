#![allow(missing_docs)]

use std::process::{Command, Output};

use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_fas-sim");

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .arg("--no-color")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

/// True if any line looks like a rendered C2 table or chart row.
fn has_c2_row(text: &str) -> bool {
    text.lines().any(|l| l.split_whitespace().any(|w| w == "C2"))
}

fn assert_rejected(output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(2), "stderr: {stderr}");
    assert!(
        stderr.trim_start().starts_with("Rejected:"),
        "Expected 'Rejected:' prefix, got: {stderr}"
    );
    assert!(!has_c2_row(&stdout), "table leaked to stdout: {stdout}");
    assert!(!has_c2_row(&stderr), "table leaked to stderr: {stderr}");
    assert!(!stderr.contains("Detailed data"));
}

#[test]
fn test_too_many_cycles_rejected() {
    let output = run(&["--cycles", "8"]);
    assert_rejected(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid cycles"));
}

#[test]
fn test_variation_out_of_range_rejected() {
    let output = run(&["--variation", "31"]);
    assert_rejected(&output);
    assert!(String::from_utf8_lossy(&output.stderr).contains("energy_variation"));
}

#[test]
fn test_invalid_config_file_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("fas-sim.toml");
    std::fs::write(&path, "[simulation]\ncycles = 9\n").unwrap();

    let output = run(&["--config", path.to_str().unwrap()]);
    assert_rejected(&output);
}

#[test]
fn test_json_output_has_every_row() {
    let output = run(&["--cycles", "5", "--seed", "7", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = value["series"].as_array().unwrap();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0]["carbon_chain_label"], "C2");
    assert_eq!(rows[5]["carbon_chain_label"], "C12");
    assert_eq!(value["parameters"]["simulation"]["seed"], 7);
}

#[test]
fn test_dashboard_goes_to_stderr() {
    let output = run(&["--cycles", "2", "--seed", "1"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(has_c2_row(&String::from_utf8_lossy(&output.stderr)));
}
