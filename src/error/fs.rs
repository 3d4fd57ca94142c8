//! Path precondition errors

use std::path::Path;

use super::BundleKitError;

/// Creates a file not found error
pub fn file_not_found(path: &Path) -> BundleKitError {
    BundleKitError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file not readable error
pub fn file_not_readable(path: &Path) -> BundleKitError {
    BundleKitError::FileNotReadable {
        path: path.display().to_string(),
    }
}

/// Creates an invalid output directory error
pub fn invalid_output_directory(path: &Path) -> BundleKitError {
    BundleKitError::InvalidOutputDirectory {
        path: path.display().to_string(),
    }
}
