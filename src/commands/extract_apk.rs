//! extract-apk command implementation
//!
//! Checks the three input paths, decodes the device spec and hands everything
//! to an [`ApkExtractor`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::backend::{ApkExtractor, ExtractApksRequest};
use crate::cli::ExtractApkArgs;
use crate::common::fs::{check_directory_or_absent, check_file_exists_and_readable};
use crate::domain::DeviceSpec;
use crate::error::{Result, device_spec_read_failed, extraction_failed};

/// Request to extract the APKs matching a device into a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractCommand {
    apks_archive_path: PathBuf,
    device_spec_path: PathBuf,
    output_directory: PathBuf,
}

impl ExtractCommand {
    pub fn new(
        apks_archive_path: impl Into<PathBuf>,
        device_spec_path: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            apks_archive_path: apks_archive_path.into(),
            device_spec_path: device_spec_path.into(),
            output_directory: output_directory.into(),
        }
    }

    /// Build the command from parsed `extract-apk` arguments
    pub fn from_args(args: ExtractApkArgs) -> Self {
        Self::new(args.apks, args.device_spec, args.output_dir)
    }

    pub fn apks_archive_path(&self) -> &Path {
        &self.apks_archive_path
    }

    pub fn device_spec_path(&self) -> &Path {
        &self.device_spec_path
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Check that both inputs are readable and the output directory is usable
    pub fn validate(&self) -> Result<()> {
        check_file_exists_and_readable(&self.apks_archive_path)?;
        check_file_exists_and_readable(&self.device_spec_path)?;
        check_directory_or_absent(&self.output_directory)
    }

    /// Validate, decode the device spec and run the extractor.
    ///
    /// Returns the paths of the APKs written by the extractor.
    pub fn execute(&self, extractor: &dyn ApkExtractor) -> Result<Vec<PathBuf>> {
        self.validate()?;

        let device_spec = self.read_device_spec()?;
        debug!(
            abis = ?device_spec.supported_abis,
            sdk_version = device_spec.sdk_version,
            "decoded device spec"
        );

        let request = ExtractApksRequest {
            apks_archive_path: self.apks_archive_path.clone(),
            device_spec,
            output_directory: self.output_directory.clone(),
        };
        let extracted = extractor.extract_apks(request).map_err(extraction_failed)?;

        info!(
            count = extracted.len(),
            output_dir = %self.output_directory.display(),
            "extracted APKs"
        );
        Ok(extracted)
    }

    fn read_device_spec(&self) -> Result<DeviceSpec> {
        let path = &self.device_spec_path;
        let json = fs::read_to_string(path).map_err(|e| device_spec_read_failed(path, e))?;
        DeviceSpec::from_json(&json).map_err(|e| device_spec_read_failed(path, e))
    }
}

/// Run the extract-apk command and list the extracted APKs
pub fn run(args: ExtractApkArgs, extractor: &dyn ApkExtractor) -> Result<()> {
    let extracted = ExtractCommand::from_args(args).execute(extractor)?;
    for apk in &extracted {
        println!("{}", apk.display());
    }
    Ok(())
}
