//! `MoviebuffClient` - Moviebuff API client implementation.

use std::time::Duration;

use tracing::instrument;

use crate::api::MoviebuffApi;
use crate::error::MoviebuffError;
use crate::request::build_request;
use crate::response::{classify, decode, decode_typed};
use crate::transport::{ReqwestTransport, Transport};
use crate::types::CertificationsEnvelope;
use crate::types::{
    Calendar, Certification, Entity, MappedCpl, Movie, Person, ResourceType, Resources,
};

/// Default base URL for Moviebuff API v2.
pub const DEFAULT_BASE_URL: &str = "https://api.moviebuff.com/api/v2";

/// Default User-Agent sent by the `reqwest` transport.
const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Moviebuff API client.
///
/// Holds only its construction-time configuration, so a single client can
/// serve concurrent calls.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct MoviebuffClient<T = ReqwestTransport> {
    /// Base URL, prepended verbatim to every request path.
    base_url: String,
    /// Static API token sent as `X-Api-Key`.
    static_token: String,
    /// HTTP transport.
    transport: T,
}

/// Builder for `MoviebuffClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MoviebuffClientBuilder {
    base_url: Option<String>,
    static_token: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl MoviebuffClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            static_token: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (default: [`DEFAULT_BASE_URL`]).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the static API token (required).
    #[must_use]
    pub fn static_token(mut self, token: impl Into<String>) -> Self {
        self.static_token = Some(token.into());
        self
    }

    /// Sets the User-Agent of the default transport.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets a request timeout on the default transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client with the default `reqwest` transport.
    ///
    /// # Errors
    ///
    /// - `static_token` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<MoviebuffClient, MoviebuffError> {
        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
        let transport = ReqwestTransport::with_options(user_agent, self.timeout)?;
        self.build_with(transport)
    }

    /// Builds the client around an injected transport.
    ///
    /// `user_agent` and `timeout` only apply to the default transport and are
    /// ignored here.
    ///
    /// # Errors
    ///
    /// Returns [`MoviebuffError::Construction`] if `static_token` is not set.
    pub fn build_with<T: Transport>(self, transport: T) -> Result<MoviebuffClient<T>, MoviebuffError> {
        let static_token = self
            .static_token
            .ok_or_else(|| MoviebuffError::Construction(String::from("static_token is required")))?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| String::from(DEFAULT_BASE_URL));

        Ok(MoviebuffClient {
            base_url,
            static_token,
            transport,
        })
    }
}

impl MoviebuffClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> MoviebuffClientBuilder {
        MoviebuffClientBuilder::new()
    }
}

impl<T> MoviebuffClient<T> {
    /// Base URL the client sends requests to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl<T: Transport + Sync> MoviebuffClient<T> {
    /// Sends a GET request and returns the body of a 200 response.
    #[instrument(skip_all)]
    async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, MoviebuffError> {
        let request = build_request(&self.base_url, &self.static_token, path, query)?;
        tracing::debug!(url = %request.url, "Moviebuff API request");

        let response = self
            .transport
            .send(&request)
            .await
            .map_err(MoviebuffError::Transport)?;
        tracing::debug!(status = response.status, "Moviebuff API response");

        classify(response.status).into_result(response.status)?;
        Ok(response.body)
    }
}

impl<T: Transport + Sync> MoviebuffApi for MoviebuffClient<T> {
    #[instrument(skip_all)]
    async fn get_movie(&self, id: &str) -> Result<Movie, MoviebuffError> {
        let body = self.fetch(&format!("/resources/movies/{id}"), &[]).await?;
        decode_typed(&body)
    }

    #[instrument(skip_all)]
    async fn get_person(&self, id: &str) -> Result<Person, MoviebuffError> {
        let body = self.fetch(&format!("/resources/people/{id}"), &[]).await?;
        decode_typed(&body)
    }

    #[instrument(skip_all)]
    async fn get_entity(&self, id: &str) -> Result<Entity, MoviebuffError> {
        let body = self.fetch(&format!("/resources/entities/{id}"), &[]).await?;
        decode_typed(&body)
    }

    #[instrument(skip_all)]
    async fn get_resources(
        &self,
        resource_type: ResourceType,
        limit: u32,
        page: u32,
    ) -> Result<Resources, MoviebuffError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if limit != 0 {
            query.push(("limit", limit.to_string()));
        }
        if page != 0 {
            query.push(("page", page.to_string()));
        }

        let body = self
            .fetch(&format!("/resources/{resource_type}"), &query)
            .await?;
        decode(&body)
    }

    #[instrument(skip_all)]
    async fn get_certifications(
        &self,
        country: &str,
    ) -> Result<Vec<Certification>, MoviebuffError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if !country.is_empty() {
            query.push(("country", String::from(country)));
        }

        let body = self.fetch("/certifications", &query).await?;
        let envelope: CertificationsEnvelope = decode(&body)?;
        Ok(envelope.data)
    }

    #[instrument(skip_all)]
    async fn get_holiday_calendar(&self, country_id: &str) -> Result<Calendar, MoviebuffError> {
        let body = self.fetch(&format!("/holidays/{country_id}"), &[]).await?;
        decode(&body)
    }

    #[instrument(skip_all)]
    async fn get_mapped_cpl(&self, cpl_id: &str) -> Result<MappedCpl, MoviebuffError> {
        let body = self.fetch(&format!("/mapped-cpls/{cpl_id}"), &[]).await?;
        decode(&body)
    }
}
