//! Device specification
//!
//! A device spec describes the device APKs are extracted for. It is read from
//! the JSON mapping of the `DeviceSpec` message: lowerCamelCase keys, with the
//! original snake_case field names accepted as well. Unknown keys are an error.
//! bundlekit never interprets the spec; it is handed to the extractor as is.

use serde::{Deserialize, Deserializer, Serialize};

/// Characteristics of a target device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct DeviceSpec {
    /// ABIs in order of preference, e.g. `arm64-v8a`
    #[serde(alias = "supported_abis", skip_serializing_if = "Vec::is_empty")]
    pub supported_abis: Vec<String>,

    #[serde(alias = "supported_locales", skip_serializing_if = "Vec::is_empty")]
    pub supported_locales: Vec<String>,

    #[serde(alias = "device_features", skip_serializing_if = "Vec::is_empty")]
    pub device_features: Vec<String>,

    #[serde(alias = "gl_extensions", skip_serializing_if = "Vec::is_empty")]
    pub gl_extensions: Vec<String>,

    /// Screen density in dpi
    #[serde(alias = "screen_density")]
    pub screen_density: u32,

    #[serde(alias = "sdk_version")]
    pub sdk_version: i32,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub codename: String,

    #[serde(alias = "sdk_runtime", skip_serializing_if = "Option::is_none")]
    pub sdk_runtime: Option<SdkRuntime>,

    /// Total RAM in bytes. 64-bit values may be written as JSON strings.
    #[serde(deserialize_with = "int64_from_number_or_string")]
    pub ram: i64,

    #[serde(alias = "build_brand", skip_serializing_if = "String::is_empty")]
    pub build_brand: String,

    #[serde(alias = "build_device", skip_serializing_if = "String::is_empty")]
    pub build_device: String,

    #[serde(alias = "soc_manufacturer", skip_serializing_if = "String::is_empty")]
    pub soc_manufacturer: String,

    #[serde(alias = "soc_model", skip_serializing_if = "String::is_empty")]
    pub soc_model: String,

    #[serde(alias = "device_tier", skip_serializing_if = "Option::is_none")]
    pub device_tier: Option<i32>,

    #[serde(alias = "device_groups", skip_serializing_if = "Vec::is_empty")]
    pub device_groups: Vec<String>,

    #[serde(alias = "country_set", skip_serializing_if = "Option::is_none")]
    pub country_set: Option<String>,
}

/// SDK runtime support of the device
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SdkRuntime {
    pub supported: bool,
}

impl DeviceSpec {
    /// Decode a device spec from its JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

fn int64_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Int64 {
        Number(i64),
        Text(String),
    }

    match Int64::deserialize(deserializer)? {
        Int64::Number(value) => Ok(value),
        Int64::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}
