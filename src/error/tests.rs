//! Error type tests
//!
//! Tests for BundleKitError and its constructors.

#![allow(clippy::unwrap_used)]

use super::*;
use miette::Diagnostic;
use std::error::Error;
use std::path::Path;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_code() {
    let err = BundleKitError::MissingDumpTarget;
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("bundlekit::command::missing_target".to_string())
    );
}

test_error_contains!(
    test_missing_dump_target,
    BundleKitError::MissingDumpTarget,
    "Target of the dump not found"
);

test_error_contains!(
    test_unknown_dump_target,
    unknown_dump_target("manifests", ["manifest", "resources", "config"]),
    "Unrecognized dump target: 'manifests'",
    "[manifest, resources, config]"
);

test_error_contains!(
    test_invalid_resource_name,
    invalid_resource_name("icon"),
    "'<type>/<name>'",
    "drawable/icon"
);

test_error_contains!(
    test_file_not_found,
    file_not_found(Path::new("/tmp/missing.asb")),
    "File '/tmp/missing.asb' was not found."
);

test_error_contains!(
    test_invalid_output_directory,
    invalid_output_directory(Path::new("/tmp/out")),
    "Output directory must be a valid directory or a non-existing path."
);

test_error_contains!(
    test_backend_unavailable,
    backend_unavailable("dump"),
    "No dump backend"
);

#[test]
fn test_invalid_input_kinds() {
    assert!(invalid_command("Pick one!").is_invalid_input());
    assert!(BundleKitError::MissingDumpTarget.is_invalid_input());
    assert!(file_not_readable(Path::new("a")).is_invalid_input());
    assert_eq!(
        invalid_output_directory(Path::new("a")).kind(),
        ErrorKind::InvalidInput
    );
}

#[test]
fn test_execution_kinds() {
    assert_eq!(extraction_failed("boom").kind(), ErrorKind::Execution);
    assert_eq!(dump_failed("manifest", "boom").kind(), ErrorKind::Execution);
    assert!(!backend_unavailable("extract").is_invalid_input());
}

#[test]
fn test_device_spec_read_failed_keeps_cause_and_path() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err = device_spec_read_failed(Path::new("/tmp/device.json"), json_err);

    assert!(matches!(err, BundleKitError::DeviceSpecReadFailed { .. }));
    assert!(err.to_string().contains("/tmp/device.json"));
    assert!(err.source().is_some());
}

#[test]
fn test_extraction_failed_keeps_cause() {
    let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only fs");
    let err = extraction_failed(cause);

    assert_eq!(
        err.to_string(),
        "Failed to extract APKs to the specified path."
    );
    assert_eq!(err.source().unwrap().to_string(), "read-only fs");
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: BundleKitError = io_err.into();
    assert!(matches!(err, BundleKitError::Io { .. }));
    assert_eq!(err.kind(), ErrorKind::Execution);
}
