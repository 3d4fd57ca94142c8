//! Resource selection
//!
//! The `--resource` flag of `dump-sdk-bundle resources` names a single
//! resource either by numeric ID or by `<type>/<name>`. This module decodes
//! the flag and compiles it into a [`ResourcePredicate`] that backends apply
//! to every entry of the resource table.

use std::fmt;

use crate::error::{Result, invalid_resource_name};

/// A resource table entry as seen by the predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTableEntry {
    /// Resource type, e.g. `drawable`
    pub type_name: String,
    /// Entry name within the type, e.g. `icon`
    pub entry_name: String,
    /// Full resource ID (`0xPPTTEEEE`)
    pub resource_id: u32,
}

impl ResourceTableEntry {
    pub fn new(type_name: impl Into<String>, entry_name: impl Into<String>, resource_id: u32) -> Self {
        Self {
            type_name: type_name.into(),
            entry_name: entry_name.into(),
            resource_id,
        }
    }
}

/// Decoded value of the `--resource` flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSelector {
    /// Numeric resource ID, possibly negative when the package byte is >= 0x80
    Id(i32),
    /// Anything that did not decode as an integer; checked against
    /// `<type>/<name>` only when the predicate is compiled
    Name(String),
}

impl ResourceSelector {
    /// Decode a raw `--resource` value.
    ///
    /// Integers may be decimal, hexadecimal (`0x`, `0X` or `#`) or octal
    /// (leading `0`), with an optional sign. Values are decoded as 64-bit and
    /// then truncated to 32 bits, so `0xffffffff` selects the same resource as
    /// `-1`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn parse(raw: &str) -> Self {
        match decode_integer_literal(raw) {
            Some(value) => ResourceSelector::Id(value as i32),
            None => ResourceSelector::Name(raw.to_string()),
        }
    }
}

/// Matching rule over resource table entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourcePredicate {
    /// Every entry matches
    Any,
    /// Entries whose full resource ID equals this value
    Id(i32),
    /// Entries with exactly this type name and entry name
    Name {
        type_name: String,
        entry_name: String,
    },
}

impl ResourcePredicate {
    /// Compile the predicate from the raw `--resource` flag value
    pub fn from_flag(raw: Option<&str>) -> Result<Self> {
        match raw.map(ResourceSelector::parse) {
            None => Ok(ResourcePredicate::Any),
            Some(ResourceSelector::Id(id)) => Ok(ResourcePredicate::Id(id)),
            Some(ResourceSelector::Name(name)) => Self::compile(None, Some(&name)),
        }
    }

    /// Compile the predicate from an already decoded ID or name.
    ///
    /// The ID takes precedence; callers are expected to have rejected the case
    /// where both are set.
    pub fn compile(resource_id: Option<i32>, resource_name: Option<&str>) -> Result<Self> {
        if let Some(id) = resource_id {
            return Ok(ResourcePredicate::Id(id));
        }

        let Some(name) = resource_name else {
            return Ok(ResourcePredicate::Any);
        };

        let (type_name, entry_name) =
            split_resource_name(name).ok_or_else(|| invalid_resource_name(name))?;

        Ok(ResourcePredicate::Name {
            type_name: type_name.to_string(),
            entry_name: entry_name.to_string(),
        })
    }

    /// Check whether `entry` is selected by this predicate
    #[allow(clippy::cast_possible_wrap)]
    pub fn matches(&self, entry: &ResourceTableEntry) -> bool {
        match self {
            ResourcePredicate::Any => true,
            ResourcePredicate::Id(id) => entry.resource_id as i32 == *id,
            ResourcePredicate::Name {
                type_name,
                entry_name,
            } => entry.type_name == *type_name && entry.entry_name == *entry_name,
        }
    }
}

impl fmt::Display for ResourcePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourcePredicate::Any => f.write_str("all resources"),
            ResourcePredicate::Id(id) => write!(f, "resource 0x{id:08x}"),
            ResourcePredicate::Name {
                type_name,
                entry_name,
            } => write!(f, "resource {type_name}/{entry_name}"),
        }
    }
}

/// Split `<type>/<name>` into its two non-empty, slash-free segments
fn split_resource_name(name: &str) -> Option<(&str, &str)> {
    let (type_name, entry_name) = name.split_once('/')?;
    if type_name.is_empty() || entry_name.is_empty() || entry_name.contains('/') {
        return None;
    }
    Some((type_name, entry_name))
}

/// Decode a signed integer literal the way Java's `Long.decode` does.
///
/// Accepts an optional `+`/`-`, then `0x`, `0X` or `#` for hex, a leading `0`
/// followed by more digits for octal, and decimal otherwise. A sign after the
/// radix prefix is rejected.
fn decode_integer_literal(literal: &str) -> Option<i64> {
    let (negative, unsigned) = match literal.as_bytes().first()? {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };

    let (radix, digits) = if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .or_else(|| unsigned.strip_prefix('#'))
    {
        (16, hex)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    if digits.starts_with(['-', '+']) {
        return None;
    }

    // Re-attach the sign before parsing so i64::MIN round-trips.
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    i64::from_str_radix(&signed, radix).ok()
}
