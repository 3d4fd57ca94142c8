//! Seams to the bundle reader and the APK extractor
//!
//! bundlekit validates command lines and decides what to do; reading SDK
//! bundles and selecting APKs out of an `.apks` archive is left to
//! implementations of [`DumpBackend`] and [`ApkExtractor`]. Errors returned by
//! a backend are wrapped with command context by the caller.

mod unlinked;

pub use unlinked::UnlinkedBackend;

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{DeviceSpec, ResourcePredicate};
use crate::error::Cause;

/// Result returned by backend operations
pub type BackendResult<T> = std::result::Result<T, Cause>;

/// Prints parts of an SDK bundle
pub trait DumpBackend {
    /// Print the bundle configuration file
    fn print_bundle_config(&self, out: &mut dyn Write, bundle: &Path) -> BackendResult<()>;

    /// Print the manifest, or only the nodes selected by `xpath`
    fn print_manifest(
        &self,
        out: &mut dyn Write,
        bundle: &Path,
        xpath: Option<&str>,
    ) -> BackendResult<()>;

    /// Print every resource table entry accepted by `predicate`
    fn print_resources(
        &self,
        out: &mut dyn Write,
        bundle: &Path,
        predicate: &ResourcePredicate,
        print_values: bool,
    ) -> BackendResult<()>;
}

/// Everything an extractor needs to select and write out APKs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractApksRequest {
    pub apks_archive_path: PathBuf,
    pub device_spec: DeviceSpec,
    pub output_directory: PathBuf,
}

/// Extracts the APKs matching a device from an `.apks` archive
pub trait ApkExtractor {
    /// Write the matching APKs and return their paths
    fn extract_apks(&self, request: ExtractApksRequest) -> BackendResult<Vec<PathBuf>>;
}
