//! `MoviebuffError` - error taxonomy returned by every client operation.

/// Boxed error produced by a transport implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `MoviebuffClient` operations.
///
/// A call either succeeds with a fully decoded value or fails with exactly
/// one of these variants.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::module_name_repetitions)]
pub enum MoviebuffError {
    /// The request could not be constructed (malformed base URL, missing token).
    #[error("invalid request: {0}")]
    Construction(String),

    /// The transport failed before a response was received.
    #[error("transport failure: {0}")]
    Transport(#[source] BoxError),

    /// The server answered 403.
    #[error("access denied")]
    AccessDenied,

    /// The server answered 404, or the decoded resource is of another kind.
    #[error("resource does not exist")]
    NotFound,

    /// The server answered with any status other than 200, 403 or 404.
    #[error("could not receive valid response")]
    ResponseNotReceived {
        /// HTTP status code returned by the server.
        status: u16,
    },

    /// The response body is not valid JSON for the requested type.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
