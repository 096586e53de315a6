//! Transport abstraction and the default `reqwest` implementation.
#![allow(clippy::future_not_send)]

use std::time::Duration;

use reqwest::Client;
use tracing::instrument;

use crate::error::{BoxError, MoviebuffError};
use crate::request::ApiRequest;

/// Raw HTTP response: status code and the fully read body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

/// HTTP transport used by `MoviebuffClient`.
///
/// Implementations execute the request as-is: no retries, no status
/// inspection, no decoding. The body must be read to completion before
/// returning. Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(Transport: Send)]
pub trait LocalTransport {
    /// Sends a GET request and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns the underlying failure when no response could be obtained
    /// (DNS, connection refused, timeout, body read failure).
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, BoxError>;
}

/// Default transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
#[allow(clippy::module_name_repetitions)]
pub struct ReqwestTransport {
    /// HTTP client.
    http_client: Client,
}

impl ReqwestTransport {
    /// Wraps an existing `reqwest::Client`.
    #[must_use]
    pub const fn new(http_client: Client) -> Self {
        Self { http_client }
    }

    /// Builds a client with the given User-Agent and optional request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`MoviebuffError::Construction`] if `reqwest::Client` build fails.
    pub fn with_options(
        user_agent: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, MoviebuffError> {
        let mut builder = Client::builder().user_agent(user_agent).gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| MoviebuffError::Construction(format!("failed to build HTTP client: {e}")))?;
        Ok(Self::new(http_client))
    }
}

impl Transport for ReqwestTransport {
    #[instrument(skip_all)]
    async fn send(&self, request: &ApiRequest) -> Result<RawResponse, BoxError> {
        let mut builder = self.http_client.get(request.url.clone());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
