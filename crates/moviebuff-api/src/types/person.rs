//! Person details returned by `/resources/people/{id}`.

use serde::{Deserialize, Serialize};

use super::common::{CreditDepartment, Image, Link, Video};
use super::nullable::null_as_default;
use crate::response::TypedResource;

/// An actor, director, or any other individual credited on a film.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    /// Person name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Profile photo URL.
    pub poster: Option<String>,
    /// Primary slug URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Alternate slug URLs.
    #[serde(deserialize_with = "null_as_default")]
    pub alternate_urls: Vec<String>,
    /// Alternate names.
    #[serde(deserialize_with = "null_as_default")]
    pub alternate_names: Vec<String>,
    /// Tags.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Resource kind, `person` on this endpoint.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Person UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Biography.
    pub biography: Option<String>,
    /// Other popular names and titles.
    #[serde(deserialize_with = "null_as_default")]
    pub akas: Vec<String>,
    /// Height.
    pub height: Option<String>,
    /// Date of birth.
    pub birthday: Option<String>,
    /// Date of death.
    pub deathday: Option<String>,
    /// Place of birth.
    pub birthplace: Option<String>,
    /// Social media accounts, websites, etc.
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
    /// Trivia.
    #[serde(deserialize_with = "null_as_default")]
    pub trivia: Vec<String>,
    /// Posters.
    #[serde(deserialize_with = "null_as_default")]
    pub posters: Vec<Image>,
    /// Videos.
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<Video>,
    /// Stills.
    #[serde(deserialize_with = "null_as_default")]
    pub stills: Vec<Image>,
    /// Roles in movies grouped by department.
    #[serde(deserialize_with = "null_as_default")]
    pub credits: Vec<CreditDepartment>,
    /// Path in the current API version.
    #[serde(deserialize_with = "null_as_default")]
    pub api_path: String,
    /// Page on moviebuff.com.
    #[serde(deserialize_with = "null_as_default")]
    pub moviebuff_url: String,
}

impl TypedResource for Person {
    const EXPECTED_TYPE: &'static str = "person";

    fn resource_type(&self) -> &str {
        &self.r#type
    }
}
