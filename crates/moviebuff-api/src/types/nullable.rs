//! Helpers for fields the API may send as JSON `null`.
//!
//! `#[serde(default)]` only covers absent fields. These treat an explicit
//! `null` the same way, so a `null` string, number, list, object or map
//! value decodes to its default instead of failing the whole response.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Deserializes a string map, turning a `null` map into an empty one and
/// `null` values into empty strings.
pub fn null_entries_as_default<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: Option<BTreeMap<String, Option<String>>> = Option::deserialize(deserializer)?;
    Ok(map
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.unwrap_or_default()))
        .collect())
}
