use clap::Parser;
use std::path::PathBuf;

/// Arguments for the dump-sdk-bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the AndroidManifest.xml of the SDK bundle:\n    bundlekit dump-sdk-bundle manifest --bundle=/tmp/sdk.asb\n\n\
                  Print the package of the SDK bundle:\n    bundlekit dump-sdk-bundle manifest --bundle=/tmp/sdk.asb --xpath=/manifest/@package\n\n\
                  Print all the resources present in the SDK bundle:\n    bundlekit dump-sdk-bundle resources --bundle=/tmp/sdk.asb\n\n\
                  Print a resource's configs from its resource ID:\n    bundlekit dump-sdk-bundle resources --bundle=/tmp/sdk.asb --resource=0x7f0e013a\n\n\
                  Print a resource's configs and values from its type and name:\n    bundlekit dump-sdk-bundle resources --bundle=/tmp/sdk.asb --resource=drawable/icon --values\n\n\
                  Print the SDK bundle configuration file:\n    bundlekit dump-sdk-bundle config --bundle=/tmp/sdk.asb")]
pub struct DumpSdkBundleArgs {
    /// What to print: manifest, resources or config
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Path to the SDK bundle
    #[arg(long, value_name = "sdk.asb")]
    pub bundle: PathBuf,

    /// XPath expression selecting the part of the manifest to print. Only applies when dumping the manifest
    #[arg(long, value_name = "/manifest/@package")]
    pub xpath: Option<String>,

    /// Name or ID of the resource to look up. Only applies when dumping resources.
    /// IDs may be decimal or hexadecimal; names must follow '<type>/<name>', e.g. 'drawable/icon'
    #[arg(long, value_name = "0x7f030001", allow_hyphen_values = true)]
    pub resource: Option<String>,

    /// Also print the values of the resources. Only applies when dumping resources
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub values: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;
    use std::path::PathBuf;

    fn parse(args: &[&str]) -> super::DumpSdkBundleArgs {
        let mut argv = vec!["bundlekit", "dump-sdk-bundle"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::DumpSdkBundle(args) => args,
            _ => panic!("Expected DumpSdkBundle command"),
        }
    }

    #[test]
    fn test_cli_parsing_dump_manifest() {
        let args = parse(&["manifest", "--bundle", "/tmp/sdk.asb"]);
        assert_eq!(args.target.as_deref(), Some("manifest"));
        assert_eq!(args.bundle, PathBuf::from("/tmp/sdk.asb"));
        assert_eq!(args.xpath, None);
        assert_eq!(args.resource, None);
        assert_eq!(args.values, None);
    }

    #[test]
    fn test_cli_parsing_dump_without_target() {
        let args = parse(&["--bundle=/tmp/sdk.asb"]);
        assert_eq!(args.target, None);
    }

    #[test]
    fn test_cli_parsing_keeps_unknown_target() {
        let args = parse(&["strings", "--bundle=/tmp/sdk.asb"]);
        assert_eq!(args.target.as_deref(), Some("strings"));
    }

    #[test]
    fn test_cli_parsing_values_flag() {
        let args = parse(&["resources", "--bundle=/tmp/sdk.asb", "--values"]);
        assert_eq!(args.values, Some(true));

        let args = parse(&["resources", "--bundle=/tmp/sdk.asb", "--values=false"]);
        assert_eq!(args.values, Some(false));
    }

    #[test]
    fn test_cli_parsing_negative_resource_id() {
        let args = parse(&["resources", "--bundle=/tmp/sdk.asb", "--resource", "-0x1"]);
        assert_eq!(args.resource.as_deref(), Some("-0x1"));
    }

    #[test]
    fn test_cli_requires_bundle() {
        assert!(Cli::try_parse_from(["bundlekit", "dump-sdk-bundle", "manifest"]).is_err());
    }
}
