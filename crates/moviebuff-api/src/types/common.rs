//! Shapes shared by movies, people and entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::nullable::{null_as_default, null_entries_as_default};

/// External link (website, social media, purchase channel).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Link {
    /// Display hint, e.g. `facebook`.
    #[serde(deserialize_with = "null_as_default")]
    pub display_class: String,
    /// Link label.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Target URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// Poster or still image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Image {
    /// Whether this image is featured.
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    /// Image URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Storage key.
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    /// Caption text.
    pub caption: Option<String>,
    /// Image kind.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
}

/// Trailer or other video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Video {
    /// Whether this video is featured.
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    /// Video page URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Embeddable player URL.
    #[serde(deserialize_with = "null_as_default")]
    pub embed_url: String,
    /// Provider key.
    #[serde(deserialize_with = "null_as_default")]
    pub key: String,
    /// Caption text.
    pub caption: Option<String>,
    /// Thumbnail URL.
    pub thumbnail: Option<String>,
    /// Video kind.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
}

/// Compact reference to another resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResourceRef {
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Poster URL.
    pub poster: Option<String>,
    /// Slug URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Resource kind.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Path in the current API version.
    #[serde(deserialize_with = "null_as_default")]
    pub api_path: String,
    /// Page on moviebuff.com.
    #[serde(deserialize_with = "null_as_default")]
    pub moviebuff_url: String,
}

/// A movie credited to a person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditRole {
    /// Movie name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Movie slug URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Release dates keyed by country code, e.g. `"IN": "2013-12-20"`.
    #[serde(deserialize_with = "null_entries_as_default")]
    pub release_dates: BTreeMap<String, String>,
    /// Certification codes keyed by country code, e.g. `"IN": "A"`.
    #[serde(deserialize_with = "null_entries_as_default")]
    pub certifications: BTreeMap<String, String>,
    /// Primary language.
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    /// Resource kind.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Movie UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Poster URL.
    pub poster: Option<String>,
    /// Page on moviebuff.com.
    #[serde(deserialize_with = "null_as_default")]
    pub moviebuff_url: String,
    /// Path in the current API version.
    #[serde(deserialize_with = "null_as_default")]
    pub api_path: String,
    /// Role played, e.g. `Director`.
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    /// Department of the role.
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    /// Whether this is a primary credit.
    #[serde(deserialize_with = "null_as_default")]
    pub primary: bool,
    /// Character name for acting roles.
    pub character: Option<String>,
}

/// Credits grouped under one department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreditDepartment {
    /// Department name, e.g. `Direction`.
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    /// Credited movies.
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<CreditRole>,
}
