//! API client library for Moviebuff.
//!
//! Provides a typed client for the Moviebuff v2 API: movies, people,
//! entities, paginated resource listings, certifications, holiday calendars
//! and mapped Composition Playlists.
//!
//! ```no_run
//! use moviebuff_api::{MoviebuffApi, MoviebuffClient};
//!
//! # async fn run() -> Result<(), moviebuff_api::MoviebuffError> {
//! let client = MoviebuffClient::builder().static_token("token").build()?;
//! let movie = client.get_movie("12-years-a-slave").await?;
//! println!("{}", movie.name);
//! # Ok(())
//! # }
//! ```

/// `MoviebuffApi` trait definition.
pub mod api;
/// Client facade and builder.
pub mod client;
/// Error taxonomy.
pub mod error;
/// Outbound request construction.
pub mod request;
/// Status classification and body decoding.
pub mod response;
/// HTTP transport seam.
pub mod transport;
/// Response data model.
pub mod types;

pub use api::{LocalMoviebuffApi, MoviebuffApi};
pub use client::{DEFAULT_BASE_URL, MoviebuffClient, MoviebuffClientBuilder};
pub use error::{BoxError, MoviebuffError};
pub use request::{API_KEY_HEADER, ApiRequest, build_request};
pub use response::{Classification, TypedResource, classify, decode, decode_typed};
pub use transport::{LocalTransport, RawResponse, ReqwestTransport, Transport};
pub use types::{
    Calendar, CastMember, Certification, Connection, Country, CreditDepartment, CreditRole,
    CrewDepartment, Entity, EntityCreditDepartment, EntityCreditRole, Holiday, Image,
    LanguageData, Link, MappedCpl, MappedCplMovie, MappedCplPart, Movie, NewsArticle, Person,
    Rating, Resource, ResourceRef, ResourceType, Resources, TechDetail, ThirdPartyIdentifier,
    ThirdPartySource, Video,
};
