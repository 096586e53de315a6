//! Paginated resource listings returned by `/resources/{kind}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Kind of resource that can be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    /// People (`/resources/people`).
    People,
    /// Movies (`/resources/movies`).
    Movies,
    /// Entities (`/resources/entities`).
    Entities,
}

impl ResourceType {
    /// Path segment used by the API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Movies => "movies",
            Self::Entities => "entities",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of a resource listing.
///
/// `prev` and `next` are opaque continuation tokens; `None` or an empty
/// string means there is no page in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    /// Token of the previous page.
    pub prev: Option<String>,
    /// Items on this page, in API order.
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<Resource>,
    /// Token of the next page.
    pub next: Option<String>,
}

impl Resources {
    /// Whether a previous page exists.
    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.prev.as_deref().is_some_and(|token| !token.is_empty())
    }

    /// Whether a next page exists.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|token| !token.is_empty())
    }
}

/// Summary of a movie, person or entity in a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Resource {
    /// Display name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Slug URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Resource kind: `movies`, `people`, `entities`, `theatres`.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Poster URL.
    pub poster: Option<String>,
    /// Path in the current API version.
    #[serde(deserialize_with = "null_as_default")]
    pub api_path: String,
    /// Page on moviebuff.com.
    #[serde(deserialize_with = "null_as_default")]
    pub moviebuff_url: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_resource_type_path_segments() {
        // Arrange & Act & Assert
        assert_eq!(ResourceType::People.to_string(), "people");
        assert_eq!(ResourceType::Movies.as_str(), "movies");
        assert_eq!(ResourceType::Entities.as_str(), "entities");
    }

    #[test]
    fn test_parse_resources_page() {
        // Arrange
        let json = r#"{
            "prev": null,
            "data": [
                {"name": "Sholay", "url": "sholay", "uuid": "u1", "type": "movies", "apiPath": "/resources/movies/u1"},
                {"name": "Deewaar", "url": "deewaar", "uuid": "u2", "type": "movies", "poster": null}
            ],
            "next": "2"
        }"#;

        // Act
        let page: Resources = serde_json::from_str(json).unwrap();

        // Assert
        assert!(!page.has_prev());
        assert!(page.has_next());
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].api_path, "/resources/movies/u1");
        assert_eq!(page.data[1].name, "Deewaar");
    }

    #[test]
    fn test_empty_tokens_mean_no_page() {
        // Arrange
        let page: Resources = serde_json::from_str(r#"{"prev": "", "next": ""}"#).unwrap();

        // Act & Assert
        assert!(!page.has_prev());
        assert!(!page.has_next());
        assert!(page.data.is_empty());
    }
}
