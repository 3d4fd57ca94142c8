//! Dump and extraction failures
//!
//! Every constructor here takes the underlying cause so the original error
//! stays reachable through [`std::error::Error::source`].

use std::path::Path;

use super::{BundleKitError, Cause};

/// Creates a device-spec read error for `path`
pub fn device_spec_read_failed(path: &Path, source: impl Into<Cause>) -> BundleKitError {
    BundleKitError::DeviceSpecReadFailed {
        path: path.display().to_string(),
        source: source.into(),
    }
}

/// Creates an extraction failed error
pub fn extraction_failed(source: impl Into<Cause>) -> BundleKitError {
    BundleKitError::ExtractionFailed {
        source: source.into(),
    }
}

/// Creates a dump failed error for the given target name
pub fn dump_failed(target: impl Into<String>, source: impl Into<Cause>) -> BundleKitError {
    BundleKitError::DumpFailed {
        target: target.into(),
        source: source.into(),
    }
}

/// Creates a backend unavailable error
pub fn backend_unavailable(operation: impl Into<String>) -> BundleKitError {
    BundleKitError::BackendUnavailable {
        operation: operation.into(),
    }
}
