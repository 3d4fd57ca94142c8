//! dump-sdk-bundle command implementation
//!
//! [`DumpCommand`] is built once from the command line (or through
//! [`DumpCommandBuilder`]), validated, and executed against a [`DumpBackend`].

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::backend::DumpBackend;
use crate::cli::DumpSdkBundleArgs;
use crate::common::fs::check_file_exists_and_readable;
use crate::domain::{DumpTarget, ResourcePredicate, ResourceSelector};
use crate::error::{BundleKitError, Result, dump_failed, invalid_command};

/// Request to print part of an SDK bundle
pub struct DumpCommand {
    bundle_path: PathBuf,
    output: Box<dyn Write>,
    dump_target: DumpTarget,
    xpath_expression: Option<String>,
    resource_id: Option<i32>,
    resource_name: Option<String>,
    print_values: Option<bool>,
}

impl DumpCommand {
    /// Start building a command that prints to standard output
    pub fn builder() -> DumpCommandBuilder {
        DumpCommandBuilder::default()
    }

    /// Build the command from parsed `dump-sdk-bundle` arguments
    pub fn from_args(args: DumpSdkBundleArgs) -> Result<Self> {
        let dump_target = DumpTarget::resolve(args.target.as_deref())?;
        debug!(dump_target = %dump_target, bundle = %args.bundle.display(), "resolved dump target");

        let mut builder = DumpCommand::builder()
            .bundle_path(args.bundle)
            .dump_target(dump_target);

        if let Some(xpath) = args.xpath {
            builder = builder.xpath_expression(xpath);
        }
        if let Some(print_values) = args.values {
            builder = builder.print_values(print_values);
        }
        if let Some(resource) = args.resource {
            builder = builder.resource(&resource);
        }

        builder.build()
    }

    pub fn bundle_path(&self) -> &Path {
        &self.bundle_path
    }

    pub fn dump_target(&self) -> DumpTarget {
        self.dump_target
    }

    pub fn xpath_expression(&self) -> Option<&str> {
        self.xpath_expression.as_deref()
    }

    pub fn resource_id(&self) -> Option<i32> {
        self.resource_id
    }

    pub fn resource_name(&self) -> Option<&str> {
        self.resource_name.as_deref()
    }

    pub fn print_values(&self) -> Option<bool> {
        self.print_values
    }

    /// Check the cross-field rules of the command.
    ///
    /// Stops at the first violation.
    pub fn validate(&self) -> Result<()> {
        check_file_exists_and_readable(&self.bundle_path)?;

        let has_resource = self.resource_id.is_some() || self.resource_name.is_some();
        let dumps_resources = self.dump_target == DumpTarget::Resources;

        if self.resource_id.is_some() && self.resource_name.is_some() {
            return Err(invalid_command(
                "Cannot pass both resource ID and resource name. Pick one!",
            ));
        }
        if self.xpath_expression.is_some() {
            match self.dump_target {
                DumpTarget::Manifest => {}
                DumpTarget::Resources => {
                    return Err(invalid_command(
                        "Cannot pass an XPath expression when dumping resources.",
                    ));
                }
                DumpTarget::Config => {
                    return Err(invalid_command(
                        "The XPath expression can only be passed when dumping the manifest.",
                    ));
                }
            }
        }
        if !dumps_resources && has_resource {
            return Err(invalid_command(
                "The resource name/id can only be passed when dumping resources.",
            ));
        }
        if !dumps_resources && self.print_values.is_some() {
            return Err(invalid_command(
                "Printing resource values can only be requested when dumping resources.",
            ));
        }

        Ok(())
    }

    /// Validate the command, then print the requested part of the bundle.
    ///
    /// Nothing is sent to `backend` unless validation and predicate
    /// compilation both succeed.
    pub fn execute(self, backend: &dyn DumpBackend) -> Result<()> {
        self.validate()?;

        let DumpCommand {
            bundle_path,
            mut output,
            dump_target,
            xpath_expression,
            resource_id,
            resource_name,
            print_values,
        } = self;

        info!(dump_target = %dump_target, bundle = %bundle_path.display(), "dumping SDK bundle");

        let dumped = match dump_target {
            DumpTarget::Config => backend.print_bundle_config(output.as_mut(), &bundle_path),
            DumpTarget::Manifest => backend.print_manifest(
                output.as_mut(),
                &bundle_path,
                xpath_expression.as_deref(),
            ),
            DumpTarget::Resources => {
                let predicate = ResourcePredicate::compile(resource_id, resource_name.as_deref())?;
                debug!(%predicate, "compiled resource predicate");
                backend.print_resources(
                    output.as_mut(),
                    &bundle_path,
                    &predicate,
                    print_values.unwrap_or(false),
                )
            }
        };

        dumped.map_err(|e| dump_failed(dump_target.as_str(), e))?;
        output.flush()?;
        Ok(())
    }
}

impl fmt::Debug for DumpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DumpCommand")
            .field("bundle_path", &self.bundle_path)
            .field("dump_target", &self.dump_target)
            .field("xpath_expression", &self.xpath_expression)
            .field("resource_id", &self.resource_id)
            .field("resource_name", &self.resource_name)
            .field("print_values", &self.print_values)
            .finish_non_exhaustive()
    }
}

/// Builder for [`DumpCommand`]
#[derive(Default)]
pub struct DumpCommandBuilder {
    bundle_path: Option<PathBuf>,
    output: Option<Box<dyn Write>>,
    dump_target: Option<DumpTarget>,
    xpath_expression: Option<String>,
    resource_id: Option<i32>,
    resource_name: Option<String>,
    print_values: Option<bool>,
}

impl DumpCommandBuilder {
    /// Sets the path to the bundle
    #[must_use]
    pub fn bundle_path(mut self, bundle_path: impl Into<PathBuf>) -> Self {
        self.bundle_path = Some(bundle_path.into());
        self
    }

    /// Sets where the dump is written. Defaults to standard output
    #[must_use]
    pub fn output(mut self, output: impl Write + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    /// Sets the target of the dump, e.g. the manifest
    #[must_use]
    pub fn dump_target(mut self, dump_target: DumpTarget) -> Self {
        self.dump_target = Some(dump_target);
        self
    }

    /// Sets the XPath expression used to print only part of the manifest
    #[must_use]
    pub fn xpath_expression(mut self, xpath_expression: impl Into<String>) -> Self {
        self.xpath_expression = Some(xpath_expression.into());
        self
    }

    /// Sets the ID of the resource to print. Mutually exclusive with
    /// [`Self::resource_name`]
    #[must_use]
    pub fn resource_id(mut self, resource_id: i32) -> Self {
        self.resource_id = Some(resource_id);
        self
    }

    /// Sets the name of the resource to print, as `<type>/<name>`.
    /// Mutually exclusive with [`Self::resource_id`]
    #[must_use]
    pub fn resource_name(mut self, resource_name: impl Into<String>) -> Self {
        self.resource_name = Some(resource_name.into());
        self
    }

    /// Sets the resource from a raw `--resource` value: integers become the
    /// resource ID, anything else the resource name
    #[must_use]
    pub fn resource(self, raw: &str) -> Self {
        match ResourceSelector::parse(raw) {
            ResourceSelector::Id(id) => self.resource_id(id),
            ResourceSelector::Name(name) => self.resource_name(name),
        }
    }

    /// Sets whether resource values are printed along with the resources
    #[must_use]
    pub fn print_values(mut self, print_values: bool) -> Self {
        self.print_values = Some(print_values);
        self
    }

    /// Build the command. Fails when the bundle path or target is missing
    pub fn build(self) -> Result<DumpCommand> {
        let bundle_path = self
            .bundle_path
            .ok_or_else(|| invalid_command("Missing required value: bundle path."))?;
        let dump_target = self.dump_target.ok_or(BundleKitError::MissingDumpTarget)?;

        Ok(DumpCommand {
            bundle_path,
            output: self
                .output
                .unwrap_or_else(|| Box::new(std::io::stdout())),
            dump_target,
            xpath_expression: self.xpath_expression,
            resource_id: self.resource_id,
            resource_name: self.resource_name,
            print_values: self.print_values,
        })
    }
}

/// Run the dump-sdk-bundle command
pub fn run(args: DumpSdkBundleArgs, backend: &dyn DumpBackend) -> Result<()> {
    DumpCommand::from_args(args)?.execute(backend)
}
