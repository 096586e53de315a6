//! Composition Playlist (CPL) to movie mappings.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// A CPL mapped to a movie in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappedCpl {
    /// Numeric mapping ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Mapping UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// `ContentTitleText` of the CPL.
    #[serde(deserialize_with = "null_as_default")]
    pub content_title_text: String,
    /// Movie the CPL belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub movie: MappedCplMovie,
}

/// Movie side of a CPL mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappedCplMovie {
    /// Numeric movie ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Movie name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Movie UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Part of a multi-part release, absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part: Option<MappedCplPart>,
}

/// One part of a multi-part release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappedCplPart {
    /// Numeric part ID.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    /// Part UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Part name, e.g. `Part 2`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}
