//! Command implementations for bundlekit CLI

pub mod completions;
pub mod dump_sdk_bundle;
pub mod extract_apk;
pub mod version;

pub use dump_sdk_bundle::{DumpCommand, DumpCommandBuilder};
pub use extract_apk::ExtractCommand;
