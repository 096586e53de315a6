//! `MoviebuffApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::MoviebuffError;
use crate::types::{
    Calendar, Certification, Entity, MappedCpl, Movie, Person, ResourceType, Resources,
};

/// Moviebuff API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
///
/// `id` arguments accept either the resource UUID or its moviebuff.com slug
/// (e.g. `12-years-a-slave`).
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MoviebuffApi: Send)]
pub trait LocalMoviebuffApi {
    /// Fetches a movie with release dates, certifications, cast, crew,
    /// trailers, posters and purchase links.
    ///
    /// # Errors
    ///
    /// Returns [`MoviebuffError::NotFound`] on 404 or when the resource is not
    /// a movie, and the other variants as described on [`MoviebuffError`].
    async fn get_movie(&self, id: &str) -> Result<Movie, MoviebuffError>;

    /// Fetches a person (actor, director, support personnel, ...).
    ///
    /// # Errors
    ///
    /// Returns [`MoviebuffError::NotFound`] on 404 or when the resource is not
    /// a person, and the other variants as described on [`MoviebuffError`].
    async fn get_person(&self, id: &str) -> Result<Person, MoviebuffError>;

    /// Fetches an entity (production company, service provider, ...).
    ///
    /// # Errors
    ///
    /// Returns [`MoviebuffError::NotFound`] on 404 or when the resource is not
    /// an entity, and the other variants as described on [`MoviebuffError`].
    async fn get_entity(&self, id: &str) -> Result<Entity, MoviebuffError>;

    /// Fetches one page of resources of the given kind.
    ///
    /// `limit` is the page size (the API caps it at 50) and `page` starts at
    /// 1. Pass 0 to leave either to the server default.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 200.
    async fn get_resources(
        &self,
        resource_type: ResourceType,
        limit: u32,
        page: u32,
    ) -> Result<Resources, MoviebuffError>;

    /// Fetches certifications, optionally restricted to one country.
    ///
    /// `country` is a country UUID or ISO 3166-1 alpha-2 code; pass `""` for
    /// every country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 200.
    async fn get_certifications(&self, country: &str)
    -> Result<Vec<Certification>, MoviebuffError>;

    /// Fetches the public-holiday calendar of a country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 200.
    async fn get_holiday_calendar(&self, country_id: &str) -> Result<Calendar, MoviebuffError>;

    /// Fetches the movie mapping of a Composition Playlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 200.
    async fn get_mapped_cpl(&self, cpl_id: &str) -> Result<MappedCpl, MoviebuffError>;
}
