use clap::Parser;
use std::path::PathBuf;

/// Arguments for the extract-apk command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Extract the APKs matching a device:\n    bundlekit extract-apk --apks=/tmp/app.apks --device-spec=/tmp/device.json --output-dir=/tmp/apks")]
pub struct ExtractApkArgs {
    /// Path to the .apks archive
    #[arg(long, value_name = "app.apks")]
    pub apks: PathBuf,

    /// Path to the JSON device spec
    #[arg(long, value_name = "device-spec.json")]
    pub device_spec: PathBuf,

    /// Directory the matching APKs are written to. Created if missing
    #[arg(long, value_name = "DIR")]
    pub output_dir: PathBuf,
}
