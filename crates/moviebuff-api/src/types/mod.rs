//! Moviebuff API response types.
//!
//! Every record ignores unknown fields and defaults missing or `null` ones,
//! so the API can grow without breaking decoding.

mod calendar;
mod certification;
mod common;
mod entity;
mod mapped_cpl;
mod movie;
mod nullable;
mod person;
mod resource;

pub use calendar::{Calendar, Holiday};
pub use certification::{Certification, Country};
pub(crate) use certification::CertificationsEnvelope;
pub use common::{CreditDepartment, CreditRole, Image, Link, ResourceRef, Video};
pub use entity::{Entity, EntityCreditDepartment, EntityCreditRole};
pub use mapped_cpl::{MappedCpl, MappedCplMovie, MappedCplPart};
pub use movie::{
    CastMember, Connection, CrewDepartment, LanguageData, Movie, NewsArticle, Rating, TechDetail,
    ThirdPartyIdentifier, ThirdPartySource,
};
pub use person::Person;
pub use resource::{Resource, ResourceType, Resources};
