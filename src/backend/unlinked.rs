use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{ApkExtractor, BackendResult, DumpBackend, ExtractApksRequest};
use crate::domain::ResourcePredicate;
use crate::error::backend_unavailable;

/// Backend used when no bundle reader is compiled in.
///
/// Every operation fails with [`crate::error::BundleKitError::BackendUnavailable`],
/// which still lets the binary validate command lines end to end.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnlinkedBackend;

impl UnlinkedBackend {
    fn unavailable<T>(operation: &str) -> BackendResult<T> {
        warn!(operation, "no backend linked");
        Err(backend_unavailable(operation).into())
    }
}

impl DumpBackend for UnlinkedBackend {
    fn print_bundle_config(&self, _out: &mut dyn Write, _bundle: &Path) -> BackendResult<()> {
        Self::unavailable("dump")
    }

    fn print_manifest(
        &self,
        _out: &mut dyn Write,
        _bundle: &Path,
        _xpath: Option<&str>,
    ) -> BackendResult<()> {
        Self::unavailable("dump")
    }

    fn print_resources(
        &self,
        _out: &mut dyn Write,
        _bundle: &Path,
        _predicate: &ResourcePredicate,
        _print_values: bool,
    ) -> BackendResult<()> {
        Self::unavailable("dump")
    }
}

impl ApkExtractor for UnlinkedBackend {
    fn extract_apks(&self, _request: ExtractApksRequest) -> BackendResult<Vec<PathBuf>> {
        Self::unavailable("extraction")
    }
}
