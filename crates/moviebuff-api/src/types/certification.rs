//! Country-specific certifications returned by `/certifications`.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// A movie certification (rating) of one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Certification {
    /// Whether the certification marks the movie as safe for children.
    #[serde(deserialize_with = "null_as_default")]
    pub child_safe: bool,
    /// Certification UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    /// Readable code, e.g. `UA`.
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    /// Country the certification belongs to.
    #[serde(deserialize_with = "null_as_default")]
    pub country: Country,
}

/// Country reference as known to Qube Wire Cinemas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    /// Country name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    /// Country UUID.
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
}

/// `{"data": [...]}` wrapper used by the certifications endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CertificationsEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<Certification>,
}
