//! bundlekit - SDK bundle inspection
//!
//! Prints the manifest, resources and configuration of SDK bundles and
//! extracts device-targeted APKs from `.apks` archives.

use std::error::Error;

use bundlekit::backend::UnlinkedBackend;
use bundlekit::cli::Cli;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_new(cli.log_filter()).unwrap_or_else(|_| EnvFilter::new("bundlekit=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let backend = UnlinkedBackend;
    if let Err(e) = bundlekit::run(cli.command, &backend, &backend) {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        let mut cause = e.source();
        while let Some(err) = cause {
            eprintln!("  caused by: {err}");
            cause = err.source();
        }
        std::process::exit(1);
    }
}
