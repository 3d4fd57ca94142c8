//! Error types and handling for bundlekit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors fall into two kinds (see [`ErrorKind`]):
//! - invalid input: malformed or conflicting flags, unknown dump targets,
//!   missing files. Raised before any backend is touched.
//! - execution: failures while dumping or extracting. These always wrap the
//!   underlying cause.
//!
//! Convenience constructors live in sub-modules by area:
//! - [`command`]: flag and sub-command errors
//! - [`fs`]: path precondition errors
//! - [`execution`]: dump and extraction failures

pub mod command;
pub mod execution;
pub mod fs;

pub use command::{invalid as invalid_command, invalid_resource_name, unknown_dump_target};
pub use execution::{backend_unavailable, device_spec_read_failed, dump_failed, extraction_failed};
pub use fs::{file_not_found, file_not_readable, invalid_output_directory};

use miette::Diagnostic;
use thiserror::Error;

/// Boxed cause carried by execution errors
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Broad classification of a [`BundleKitError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The user can fix this by changing the command line.
    InvalidInput,
    /// Something failed while performing the dump or extraction.
    Execution,
}

/// Main error type for bundlekit operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundleKitError {
    // Command errors
    #[error("{message}")]
    #[diagnostic(code(bundlekit::command::invalid))]
    InvalidCommand { message: String },

    #[error("Target of the dump not found.")]
    #[diagnostic(
        code(bundlekit::command::missing_target),
        help("Pass one of: manifest, resources, config")
    )]
    MissingDumpTarget,

    #[error("Unrecognized dump target: '{target}'. Accepted values are: [{accepted}]")]
    #[diagnostic(code(bundlekit::command::unknown_target))]
    UnknownDumpTarget { target: String, accepted: String },

    #[error("Resource name must match the format '<type>/<name>', e.g. 'drawable/icon'.")]
    #[diagnostic(
        code(bundlekit::command::invalid_resource_name),
        help("Got '{name}'. Pass a decimal or hexadecimal resource ID, or '<type>/<name>'")
    )]
    InvalidResourceName { name: String },

    // Path precondition errors
    #[error("File '{path}' was not found.")]
    #[diagnostic(code(bundlekit::fs::not_found))]
    FileNotFound { path: String },

    #[error("File '{path}' is not readable.")]
    #[diagnostic(code(bundlekit::fs::not_readable))]
    FileNotReadable { path: String },

    #[error("Output directory must be a valid directory or a non-existing path.")]
    #[diagnostic(
        code(bundlekit::fs::invalid_output_directory),
        help("'{path}' exists and is not a directory")
    )]
    InvalidOutputDirectory { path: String },

    // Execution errors
    #[error("Failed to read device-spec.json from '{path}'.")]
    #[diagnostic(
        code(bundlekit::extract::device_spec_read_failed),
        help("The device spec must be a JSON document describing the target device")
    )]
    DeviceSpecReadFailed {
        path: String,
        #[source]
        source: Cause,
    },

    #[error("Failed to extract APKs to the specified path.")]
    #[diagnostic(code(bundlekit::extract::failed))]
    ExtractionFailed {
        #[source]
        source: Cause,
    },

    #[error("Failed to dump the {target} of the SDK bundle.")]
    #[diagnostic(code(bundlekit::dump::failed))]
    DumpFailed {
        target: String,
        #[source]
        source: Cause,
    },

    #[error("No {operation} backend is linked into this build.")]
    #[diagnostic(
        code(bundlekit::backend::unavailable),
        help("The command line was valid; run it through a build that embeds a bundle reader")
    )]
    BackendUnavailable { operation: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(bundlekit::fs::io_error))]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl BundleKitError {
    /// Classify this error as invalid input or an execution failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            BundleKitError::InvalidCommand { .. }
            | BundleKitError::MissingDumpTarget
            | BundleKitError::UnknownDumpTarget { .. }
            | BundleKitError::InvalidResourceName { .. }
            | BundleKitError::FileNotFound { .. }
            | BundleKitError::FileNotReadable { .. }
            | BundleKitError::InvalidOutputDirectory { .. } => ErrorKind::InvalidInput,
            BundleKitError::DeviceSpecReadFailed { .. }
            | BundleKitError::ExtractionFailed { .. }
            | BundleKitError::DumpFailed { .. }
            | BundleKitError::BackendUnavailable { .. }
            | BundleKitError::Io { .. } => ErrorKind::Execution,
        }
    }

    /// Check if this error was caused by the command line itself
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }
}

impl From<std::io::Error> for BundleKitError {
    fn from(err: std::io::Error) -> Self {
        BundleKitError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundleKitError>;

#[cfg(test)]
mod tests;
