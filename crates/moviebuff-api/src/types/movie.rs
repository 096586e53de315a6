//! Movie details returned by `/resources/movies/{id}`.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::common::{Image, Link, ResourceRef, Video};
use super::nullable::{null_as_default, null_entries_as_default};
use crate::response::TypedResource;

/// A feature film, documentary, short film, etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Movie {
    /// Movie name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Poster URL.
    pub poster: Option<String>,
    /// Alternate slug URLs.
    #[serde(deserialize_with = "null_as_default")]
    pub alternate_urls: Vec<String>,
    /// Primary slug URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Resource kind, `movie` on this endpoint.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Movie UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Release dates keyed by country code, e.g. `"IN": "2013-12-20"`.
    #[serde(deserialize_with = "null_entries_as_default")]
    pub release_dates: BTreeMap<String, String>,
    /// Certification codes keyed by country code, e.g. `"IN": "A"`.
    #[serde(deserialize_with = "null_entries_as_default")]
    pub certifications: BTreeMap<String, String>,
    /// Primary language.
    #[serde(deserialize_with = "null_as_default")]
    pub language: String,
    /// Primary language details.
    #[serde(deserialize_with = "null_as_default")]
    pub language_data: LanguageData,
    /// Film type, e.g. `Feature Film`.
    #[serde(deserialize_with = "null_as_default")]
    pub film_type: String,
    /// Whether the movie is featured.
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    /// Synopsis.
    pub synopsis: Option<String>,
    /// Short synopsis.
    pub short_synopsis: Option<String>,
    /// Storyline.
    pub storyline: Option<String>,
    /// Genres.
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<String>,
    /// Name in the local language.
    pub local_name: Option<String>,
    /// Running time in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub running_time: u32,
    /// Main trailer.
    #[serde(deserialize_with = "null_as_default")]
    pub trailer: Video,
    /// Alternate titles.
    #[serde(deserialize_with = "null_as_default")]
    pub alternate_titles: Vec<String>,
    /// Taglines.
    #[serde(deserialize_with = "null_as_default")]
    pub taglines: Vec<String>,
    /// Official pages (Twitter, Facebook, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub links: Vec<Link>,
    /// Purchase channels for the movie and its songs.
    #[serde(deserialize_with = "null_as_default")]
    pub purchase_links: Vec<Link>,
    /// Technical data entries.
    #[serde(deserialize_with = "null_as_default")]
    pub tech_details: Vec<TechDetail>,
    /// Trivia.
    #[serde(deserialize_with = "null_as_default")]
    pub trivia: Vec<String>,
    /// Audience rating of the movie.
    #[serde(deserialize_with = "null_as_default")]
    pub movie_rating: Rating,
    /// Audience rating of the soundtrack.
    #[serde(deserialize_with = "null_as_default")]
    pub music_rating: Rating,
    /// Cast members.
    #[serde(deserialize_with = "null_as_default")]
    pub cast: Vec<CastMember>,
    /// Crew grouped by department.
    #[serde(deserialize_with = "null_as_default")]
    pub crew: Vec<CrewDepartment>,
    /// Music labels of the soundtrack.
    #[serde(deserialize_with = "null_as_default")]
    pub music_labels: Vec<ResourceRef>,
    /// Posters.
    #[serde(deserialize_with = "null_as_default")]
    pub posters: Vec<Image>,
    /// Videos.
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<Video>,
    /// Stills.
    #[serde(deserialize_with = "null_as_default")]
    pub stills: Vec<Image>,
    /// Related news articles.
    #[serde(deserialize_with = "null_as_default")]
    pub news: Vec<NewsArticle>,
    /// Related movies (sequels, remakes, ...).
    #[serde(deserialize_with = "null_as_default")]
    pub connections: Vec<Connection>,
    /// Release status keyed by country code.
    #[serde(deserialize_with = "null_entries_as_default")]
    pub release_statuses: BTreeMap<String, String>,
    /// Identifiers of this movie in third-party catalogs.
    #[serde(deserialize_with = "null_as_default")]
    pub third_party_identifiers: Vec<ThirdPartyIdentifier>,
    /// Page on moviebuff.com.
    #[serde(deserialize_with = "null_as_default")]
    pub moviebuff_url: String,
    /// Path in the current API version.
    #[serde(deserialize_with = "null_as_default")]
    pub api_path: String,
}

impl Movie {
    /// Returns the year of the earliest release anywhere in the world.
    ///
    /// Dates that are not `YYYY-MM-DD` are ignored; returns `None` when no
    /// release date parses.
    #[must_use]
    pub fn earliest_release_year(&self) -> Option<i32> {
        self.release_dates
            .values()
            .filter_map(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
            .map(|date| date.year())
            .min()
    }

    /// Returns the third-party IDs recorded for the given source UUID.
    #[must_use]
    pub fn third_party_ids_by_source(&self, source_uuid: &str) -> Option<&[String]> {
        self.third_party_identifiers
            .iter()
            .find(|identifier| identifier.source.uuid == source_uuid)
            .map(|identifier| identifier.ids.as_slice())
    }
}

impl TypedResource for Movie {
    const EXPECTED_TYPE: &'static str = "movie";

    fn resource_type(&self) -> &str {
        &self.r#type
    }
}

/// Language name and UUID.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageData {
    /// Language name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Language UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
}

/// A named piece of technical data; `data` is either a string or a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechDetail {
    /// Kind of tech data, e.g. `Sound Mix`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Raw value.
    pub data: serde_json::Value,
}

/// Aggregated audience rating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    /// Rating value as reported by the API.
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
    /// Number of ratings.
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
}

/// A person credited in the cast or crew of a movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CastMember {
    /// Person name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Profile photo URL.
    pub poster: Option<String>,
    /// Resource kind.
    #[serde(deserialize_with = "null_as_default")]
    pub r#type: String,
    /// Slug URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Person UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Role, e.g. `Actor`.
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
    /// Page on moviebuff.com.
    #[serde(deserialize_with = "null_as_default")]
    pub moviebuff_url: String,
    /// Path in the current API version.
    #[serde(deserialize_with = "null_as_default")]
    pub api_path: String,
}

/// Crew members grouped under one department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewDepartment {
    /// Department name.
    #[serde(deserialize_with = "null_as_default")]
    pub department: String,
    /// Credited people.
    #[serde(deserialize_with = "null_as_default")]
    pub roles: Vec<CastMember>,
}

/// News article about a movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsArticle {
    /// Image URL.
    pub poster: Option<String>,
    /// Summary text.
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    /// Publication date.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    /// Article URL.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// Author.
    pub writer: Option<String>,
}

/// Another movie related to this one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Connection {
    /// Movie name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Slug URL.
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
    /// Poster URL.
    pub poster: Option<String>,
    /// Page on moviebuff.com.
    #[serde(deserialize_with = "null_as_default")]
    pub moviebuff_url: String,
    /// Path in the current API version.
    #[serde(deserialize_with = "null_as_default")]
    pub api_path: String,
    /// How the two movies are related, e.g. `Sequel`.
    #[serde(deserialize_with = "null_as_default")]
    pub connection_type: String,
}

/// IDs of a movie in one third-party catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThirdPartyIdentifier {
    /// Identifiers in that catalog.
    #[serde(deserialize_with = "null_as_default")]
    pub ids: Vec<String>,
    /// The catalog.
    #[serde(deserialize_with = "null_as_default")]
    pub source: ThirdPartySource,
}

/// A third-party catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThirdPartySource {
    /// Source UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Source name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}
