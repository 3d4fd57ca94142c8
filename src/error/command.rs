//! Flag and sub-command errors

use super::BundleKitError;

/// Creates an invalid command error with a free-form message
pub fn invalid(message: impl Into<String>) -> BundleKitError {
    BundleKitError::InvalidCommand {
        message: message.into(),
    }
}

/// Creates an unknown dump target error listing the accepted values
pub fn unknown_dump_target<I, S>(target: impl Into<String>, accepted: I) -> BundleKitError
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let accepted = accepted
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    BundleKitError::UnknownDumpTarget {
        target: target.into(),
        accepted,
    }
}

/// Creates an invalid resource name error
pub fn invalid_resource_name(name: impl Into<String>) -> BundleKitError {
    BundleKitError::InvalidResourceName { name: name.into() }
}
