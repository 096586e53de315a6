//! Outbound request construction.

use url::Url;

use crate::error::MoviebuffError;

/// Header carrying the static API token.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// An authenticated GET request described as plain data.
///
/// Built by [`build_request`] and handed to a [`Transport`](crate::Transport)
/// for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub struct ApiRequest {
    /// Absolute URL including the encoded query string.
    pub url: Url,
    /// Headers to attach, in insertion order.
    pub headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Returns the value of the first header matching `name` (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builds a GET request for `base_url` + `path` with the API key attached.
///
/// `base_url` and `path` are concatenated verbatim, so `path` must carry its
/// own leading `/`. Query pairs are URL-encoded and appended in slice order;
/// an empty slice leaves the URL without a query string.
///
/// # Errors
///
/// Returns [`MoviebuffError::Construction`] if the concatenated URL does not
/// parse (for example an empty or scheme-less base URL).
pub fn build_request(
    base_url: &str,
    static_token: &str,
    path: &str,
    query: &[(&str, String)],
) -> Result<ApiRequest, MoviebuffError> {
    let raw = format!("{base_url}{path}");
    let mut url = Url::parse(&raw).map_err(|e| {
        MoviebuffError::Construction(format!("invalid request URL {raw:?}: {e}"))
    })?;

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Ok(ApiRequest {
        url,
        headers: vec![(String::from(API_KEY_HEADER), String::from(static_token))],
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_build_request_concatenates_verbatim() {
        // Arrange & Act
        let req = build_request(
            "https://api.moviebuff.com/api/v2",
            "token",
            "/resources/movies/12-years-a-slave",
            &[],
        )
        .unwrap();

        // Assert
        assert_eq!(
            req.url.as_str(),
            "https://api.moviebuff.com/api/v2/resources/movies/12-years-a-slave"
        );
        assert!(req.url.query().is_none());
    }

    #[test]
    fn test_build_request_attaches_api_key() {
        // Arrange & Act
        let req = build_request("http://localhost:8080", "s3cret", "/certifications", &[])
            .unwrap();

        // Assert
        assert_eq!(req.header("x-api-key"), Some("s3cret"));
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn test_build_request_encodes_query() {
        // Arrange
        let query = [("country", String::from("IN & BG")), ("page", String::from("2"))];

        // Act
        let req = build_request("http://localhost:8080", "t", "/certifications", &query).unwrap();

        // Assert
        assert_eq!(req.url.query(), Some("country=IN+%26+BG&page=2"));
        let pairs: Vec<(String, String)> = req.url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                (String::from("country"), String::from("IN & BG")),
                (String::from("page"), String::from("2")),
            ]
        );
    }

    #[test]
    fn test_build_request_empty_base_url_fails() {
        // Arrange & Act
        let result = build_request("", "t", "/resources/movies/x", &[]);

        // Assert
        assert!(matches!(result, Err(MoviebuffError::Construction(_))));
    }

    #[test]
    fn test_build_request_malformed_base_url_fails() {
        // Arrange & Act
        let result = build_request("http://[::1", "t", "/holidays/IN", &[]);

        // Assert
        assert!(matches!(result, Err(MoviebuffError::Construction(_))));
    }
}
