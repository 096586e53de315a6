//! Entity details returned by `/resources/entities/{id}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{Image, Link, Video};
use super::nullable::{null_as_default, null_entries_as_default};
use crate::response::TypedResource;

/// An organization such as a production company or service provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Entity {
    /// Entity name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Poster image URL.
    pub poster: Option<String>,
    /// Tags.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Primary slug URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Entity UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Social media pages, websites, etc.
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
    /// Trivia.
    #[serde(deserialize_with = "null_as_default")]
    pub trivia: Vec<String>,
    /// Main services provided.
    #[serde(deserialize_with = "null_as_default")]
    pub services: Vec<String>,
    /// Company profile.
    pub company_profile: Option<String>,
    /// Credits grouped by department.
    #[serde(deserialize_with = "null_as_default")]
    pub credits: Vec<EntityCreditDepartment>,
    /// Alternate slug URLs.
    #[serde(deserialize_with = "null_as_default")]
    pub alternate_urls: Vec<String>,
    /// Resource kind, `entity` on this endpoint.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Posters.
    #[serde(deserialize_with = "null_as_default")]
    pub posters: Vec<Image>,
    /// Videos.
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<Video>,
    /// Stills.
    #[serde(deserialize_with = "null_as_default")]
    pub stills: Vec<Image>,
    /// Path in the current API version.
    #[serde(deserialize_with = "null_as_default")]
    pub api_path: String,
    /// Page on moviebuff.com.
    #[serde(deserialize_with = "null_as_default")]
    pub moviebuff_url: String,
}

impl TypedResource for Entity {
    const EXPECTED_TYPE: &'static str = "entity";

    fn resource_type(&self) -> &str {
        &self.r#type
    }
}

/// Entity credits under one department.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityCreditDepartment {
    /// Department name, e.g. `Production`.
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    /// Credited movies.
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<EntityCreditRole>,
}

/// A movie credited to an entity.
///
/// The API sends `poster` and `character` in varying shapes for entities, so
/// they are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityCreditRole {
    /// Movie name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Movie slug URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Release dates keyed by country code.
    #[serde(deserialize_with = "null_entries_as_default")]
    pub release_dates: BTreeMap<String, String>,
    /// Certification codes keyed by country code.
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
    /// Poster, raw.
    pub poster: serde_json::Value,
    /// Page on moviebuff.com.
    #[serde(deserialize_with = "null_as_default")]
    pub moviebuff_url: String,
    /// Path in the current API version.
    #[serde(deserialize_with = "null_as_default")]
    pub api_path: String,
    /// Role, e.g. `Production Company`.
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    /// Department of the role.
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    /// Whether this is a primary credit.
    #[serde(deserialize_with = "null_as_default")]
    pub primary: bool,
    /// Character, raw.
    pub character: serde_json::Value,
}
