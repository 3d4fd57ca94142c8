//! Dump targets
//!
//! The sub-command of `dump-sdk-bundle` selects what part of the bundle is
//! printed. Lookup is exact and case-sensitive.

use std::fmt;
use std::str::FromStr;

use crate::error::{BundleKitError, Result, unknown_dump_target};

/// Part of an SDK bundle that can be dumped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DumpTarget {
    /// The `AndroidManifest.xml` of the bundle
    Manifest,
    /// The resource table
    Resources,
    /// The bundle configuration file
    Config,
}

impl DumpTarget {
    /// All targets, in the order they are listed to the user
    pub const ALL: [DumpTarget; 3] = [
        DumpTarget::Manifest,
        DumpTarget::Resources,
        DumpTarget::Config,
    ];

    /// Canonical sub-command name of this target
    pub fn as_str(self) -> &'static str {
        match self {
            DumpTarget::Manifest => "manifest",
            DumpTarget::Resources => "resources",
            DumpTarget::Config => "config",
        }
    }

    /// Accepted sub-command names
    pub fn subcommands() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(DumpTarget::as_str)
    }

    /// Resolve an optional sub-command into a target.
    ///
    /// Fails with [`BundleKitError::MissingDumpTarget`] when no sub-command was
    /// given and with [`BundleKitError::UnknownDumpTarget`] when it matches none
    /// of [`DumpTarget::subcommands`].
    pub fn resolve(subcommand: Option<&str>) -> Result<Self> {
        subcommand
            .ok_or(BundleKitError::MissingDumpTarget)?
            .parse()
    }
}

impl FromStr for DumpTarget {
    type Err = BundleKitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|target| target.as_str() == s)
            .ok_or_else(|| unknown_dump_target(s, DumpTarget::subcommands()))
    }
}

impl fmt::Display for DumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
