//! Path preconditions shared by the commands
//!
//! Every check here runs before a command touches a backend and reports
//! failures as invalid-input errors.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, file_not_found, file_not_readable, invalid_output_directory};

/// Check that `path` exists and can be opened for reading
pub fn check_file_exists_and_readable(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(file_not_found(path));
    }

    let readable = if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    };
    if !readable {
        return Err(file_not_readable(path));
    }

    debug!(path = %path.display(), "input file is readable");
    Ok(())
}

/// Check that `path` is an existing directory or does not exist at all
pub fn check_directory_or_absent(path: &Path) -> Result<()> {
    if path.is_dir() || !path.exists() {
        return Ok(());
    }
    Err(invalid_output_directory(path))
}
