//! Public-holiday calendars returned by `/holidays/{countryID}`.

use serde::{Deserialize, Serialize};

use super::nullable::null_as_default;

/// Public holidays of one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Calendar {
    /// Calendar identifier.
    #[serde(rename = "calendarId")]
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Calendar name, e.g. `Holidays in India`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Holidays in API order.
    #[serde(deserialize_with = "null_as_default")]
    pub holidays: Vec<Holiday>,
    /// Sync token of the upstream calendar.
    #[serde(deserialize_with = "null_as_default")]
    pub sync_token: String,
    /// IANA time zone, e.g. `Asia/Calcutta`.
    #[serde(deserialize_with = "null_as_default")]
    pub time_zone: String,
}

/// A single holiday.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Holiday {
    /// Holiday identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Holiday name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Date as `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
}
