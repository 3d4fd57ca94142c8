//! bundlekit - SDK bundle inspection
//!
//! Turns `dump-sdk-bundle` and `extract-apk` command lines into validated
//! command objects and runs them against pluggable backends. Reading bundles
//! and `.apks` archives is the job of a [`backend::DumpBackend`] and a
//! [`backend::ApkExtractor`].

pub mod backend;
pub mod cli;
pub mod commands;
pub mod common;
pub mod domain;
pub mod error;

use backend::{ApkExtractor, DumpBackend};
use cli::Commands;
use error::Result;

/// Dispatch a parsed command to its implementation
pub fn run(
    command: Commands,
    dump_backend: &dyn DumpBackend,
    extractor: &dyn ApkExtractor,
) -> Result<()> {
    match command {
        Commands::DumpSdkBundle(args) => commands::dump_sdk_bundle::run(args, dump_backend),
        Commands::ExtractApk(args) => commands::extract_apk::run(args, extractor),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
