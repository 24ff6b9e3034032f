#[path = "../common/mod.rs"]
mod common;

use serial_test::serial;
use std::process::Command;

use common::{fixture, scratch_dir};

fn processor() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_rks-processor"));
    for var in [
        "RKS_DIFFICULTY_PATH",
        "RKS_INFO_PATH",
        "RKS_SAVE_PATH",
        "RKS_OUTPUT_PATH",
        "RKS_JSON_PATH",
        "RKS_UTC_OFFSET_HOURS"
    ] {
        command.env_remove(var);
    }
    command.env("RUST_LOG", "info");

    command
}

/// Test that the application writes both outputs for a valid save
#[test]
#[serial]
fn test_application_writes_reports() {
    let dir = scratch_dir("bin-ok");
    let output_path = dir.join("output.txt");
    let json_path = dir.join("output.json");

    let output = processor()
        .arg("--difficulty")
        .arg(fixture("difficulty.tsv"))
        .arg("--info")
        .arg(fixture("info.tsv"))
        .arg("--save")
        .arg(fixture("save.json"))
        .arg("--output")
        .arg(&output_path)
        .arg("--json")
        .arg(&json_path)
        .output()
        .expect("Failed to execute processor");

    assert!(
        output.status.success(),
        "Process should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let text = std::fs::read_to_string(&output_path).unwrap();
    assert!(text.contains("RKS: 3.4369"));
    assert!(json_path.exists());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Done. RKS 3.4369"), "Should log the final rating");
}

/// Test that the application exits with error code when the save export is missing
#[test]
#[serial]
fn test_application_exits_on_missing_save() {
    let dir = scratch_dir("bin-missing");

    let output = processor()
        .arg("--difficulty")
        .arg(fixture("difficulty.tsv"))
        .arg("--no-info")
        .arg("--save")
        .arg(dir.join("nope.json"))
        .arg("--output")
        .arg(dir.join("output.txt"))
        .output()
        .expect("Failed to execute processor");

    assert!(!output.status.success(), "Process should fail without a save");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read"), "Should log the read error");
    assert!(stderr.contains("No report was written"));
    assert!(!dir.join("output.txt").exists());
}

/// Test that the application refuses to start without a save path
#[test]
#[serial]
fn test_application_exits_on_missing_save_argument() {
    let output = processor().output().expect("Failed to execute processor");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--save"));
}
