//! extract-apk integration tests

mod common;

use common::{TestWorkspace, bundlekit_cmd};
use predicates::prelude::*;

const DEVICE_SPEC: &str = r#"{"supportedAbis": ["arm64-v8a"], "sdkVersion": 34}"#;

#[test]
fn test_output_dir_is_a_file() {
    let workspace = TestWorkspace::new();
    let (apks, spec) = workspace.create_extract_inputs(DEVICE_SPEC);
    let output = workspace.write_file("out", "");

    bundlekit_cmd()
        .arg("extract-apk")
        .arg(format!("--apks={}", apks.display()))
        .arg(format!("--device-spec={}", spec.display()))
        .arg(format!("--output-dir={}", output.display()))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Output directory must be a valid directory or a non-existing path.",
        ));
}

#[test]
fn test_missing_apks_archive() {
    let workspace = TestWorkspace::new();
    let spec = workspace.write_file("device.json", DEVICE_SPEC);

    bundlekit_cmd()
        .arg("extract-apk")
        .arg(format!("--apks={}", workspace.arg("missing.apks")))
        .arg(format!("--device-spec={}", spec.display()))
        .arg(format!("--output-dir={}", workspace.arg("out")))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.apks"));
}

#[test]
fn test_malformed_device_spec() {
    let workspace = TestWorkspace::new();
    let (apks, spec) = workspace.create_extract_inputs("{ not json");

    bundlekit_cmd()
        .arg("extract-apk")
        .arg(format!("--apks={}", apks.display()))
        .arg(format!("--device-spec={}", spec.display()))
        .arg(format!("--output-dir={}", workspace.arg("out")))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read device-spec.json from"))
        .stderr(predicate::str::contains("device.json"))
        .stderr(predicate::str::contains("caused by"));
}

#[test]
fn test_valid_inputs_reach_extractor() {
    let workspace = TestWorkspace::new();
    let (apks, spec) = workspace.create_extract_inputs(DEVICE_SPEC);

    bundlekit_cmd()
        .arg("extract-apk")
        .arg(format!("--apks={}", apks.display()))
        .arg(format!("--device-spec={}", spec.display()))
        .arg(format!("--output-dir={}", workspace.arg("out")))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to extract APKs to the specified path.",
        ))
        .stderr(predicate::str::contains("No extraction backend is linked"));
}

#[test]
fn test_missing_required_flag() {
    bundlekit_cmd()
        .args(["extract-apk", "--apks=app.apks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--device-spec"));
}
