//! Common test utilities for bundlekit integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding command inputs
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace and return its path
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Create a placeholder SDK bundle
    #[allow(dead_code)]
    pub fn create_bundle(&self) -> PathBuf {
        self.write_file("sdk.asb", "PK")
    }

    /// Create a placeholder .apks archive and a device spec
    #[allow(dead_code)]
    pub fn create_extract_inputs(&self, device_spec: &str) -> (PathBuf, PathBuf) {
        let apks = self.write_file("app.apks", "PK");
        let spec = self.write_file("device.json", device_spec);
        (apks, spec)
    }

    /// Return the path as a string argument
    pub fn arg(&self, path: &str) -> String {
        self.path.join(path).display().to_string()
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command running the real bundlekit binary with logging silenced
#[allow(deprecated)]
pub fn bundlekit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("bundlekit").expect("Failed to find bundlekit binary");
    cmd.env_remove("BUNDLEKIT_LOG");
    cmd
}
