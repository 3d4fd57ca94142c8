//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - dump: dump-sdk-bundle command arguments
//! - extract: extract-apk command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod dump;
pub mod extract;

pub use completions::CompletionsArgs;
pub use dump::DumpSdkBundleArgs;
pub use extract::ExtractApkArgs;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "BUNDLEKIT_LOG";

/// bundlekit - SDK bundle inspection
///
/// Print parts of SDK bundles and extract device-targeted APKs.
#[derive(Parser, Debug)]
#[command(
    name = "bundlekit",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Inspect SDK bundles and extract device-targeted APKs",
    long_about = "bundlekit prints the manifest, resources and configuration of an SDK bundle \
                  in a human-readable form, and extracts the APKs matching a device spec \
                  from an .apks archive.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  bundlekit dump-sdk-bundle manifest --bundle=sdk.asb       \x1b[90m# Print the manifest\x1b[0m\n   \
                  bundlekit dump-sdk-bundle resources --bundle=sdk.asb      \x1b[90m# Print all resources\x1b[0m\n   \
                  bundlekit dump-sdk-bundle config --bundle=sdk.asb         \x1b[90m# Print the bundle config\x1b[0m\n   \
                  bundlekit extract-apk --apks=app.apks --device-spec=device.json --output-dir=out\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log filter, e.g. `bundlekit=trace` (overrides --verbose)
    #[arg(long, global = true, env = "BUNDLEKIT_LOG", value_name = "FILTER")]
    pub log: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print files or values from an SDK bundle in a human-readable form
    #[command(name = "dump-sdk-bundle")]
    DumpSdkBundle(DumpSdkBundleArgs),

    /// Extract the APKs matching a device spec from an .apks archive
    #[command(name = "extract-apk")]
    ExtractApk(ExtractApkArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Cli {
    /// Log filter to install: explicit filter first, then --verbose
    pub fn log_filter(&self) -> String {
        match &self.log {
            Some(filter) => filter.clone(),
            None if self.verbose => "bundlekit=debug".to_string(),
            None => "bundlekit=warn".to_string(),
        }
    }
}
