//! Status classification and body decoding.

use serde::de::DeserializeOwned;

use crate::error::MoviebuffError;

/// Outcome of inspecting an HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// 200: decode the body.
    Proceed,
    /// 403: the token is invalid or lacks access.
    AccessDenied,
    /// 404: the resource does not exist.
    NotFound,
    /// Any other status.
    Unexpected,
}

impl Classification {
    /// Converts the classification into a result, keeping `status` for
    /// [`MoviebuffError::ResponseNotReceived`].
    ///
    /// # Errors
    ///
    /// Returns the taxonomy error for every classification except `Proceed`.
    pub fn into_result(self, status: u16) -> Result<(), MoviebuffError> {
        match self {
            Self::Proceed => Ok(()),
            Self::AccessDenied => Err(MoviebuffError::AccessDenied),
            Self::NotFound => Err(MoviebuffError::NotFound),
            Self::Unexpected => Err(MoviebuffError::ResponseNotReceived { status }),
        }
    }
}

/// Classifies an HTTP status code. Identical for every endpoint.
#[must_use]
pub const fn classify(status: u16) -> Classification {
    match status {
        200 => Classification::Proceed,
        403 => Classification::AccessDenied,
        404 => Classification::NotFound,
        _ => Classification::Unexpected,
    }
}

/// A resource that declares its own kind in a `type` field.
pub trait TypedResource {
    /// Kind the API reports for this resource on its own endpoint.
    const EXPECTED_TYPE: &'static str;

    /// The `type` value carried by the decoded body.
    fn resource_type(&self) -> &str;
}

/// Decodes a JSON body into `T`.
///
/// # Errors
///
/// Returns [`MoviebuffError::Decode`] wrapping the `serde_json` failure.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, MoviebuffError> {
    Ok(serde_json::from_slice(body)?)
}

/// Decodes a JSON body and checks its `type` against `T::EXPECTED_TYPE`.
///
/// # Errors
///
/// - [`MoviebuffError::Decode`] if the body is not valid JSON for `T`.
/// - [`MoviebuffError::NotFound`] if the decoded `type` differs.
pub fn decode_typed<T: DeserializeOwned + TypedResource>(body: &[u8]) -> Result<T, MoviebuffError> {
    let resource: T = decode(body)?;
    if resource.resource_type() != T::EXPECTED_TYPE {
        tracing::debug!(
            expected = T::EXPECTED_TYPE,
            actual = resource.resource_type(),
            "resource type mismatch"
        );
        return Err(MoviebuffError::NotFound);
    }
    Ok(resource)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::types::{Calendar, Movie, Person};

    #[test]
    fn test_classify_known_statuses() {
        // Arrange & Act & Assert
        assert_eq!(classify(200), Classification::Proceed);
        assert_eq!(classify(403), Classification::AccessDenied);
        assert_eq!(classify(404), Classification::NotFound);
    }

    #[test]
    fn test_classify_everything_else_is_unexpected() {
        // Arrange
        let statuses = [100, 201, 204, 299, 301, 304, 400, 401, 418, 429, 500, 502, 503];

        // Act & Assert
        for status in statuses {
            assert_eq!(classify(status), Classification::Unexpected, "status {status}");
        }
    }

    #[test]
    fn test_into_result_maps_taxonomy() {
        // Arrange & Act & Assert
        assert!(classify(200).into_result(200).is_ok());
        assert!(matches!(
            classify(403).into_result(403),
            Err(MoviebuffError::AccessDenied)
        ));
        assert!(matches!(
            classify(404).into_result(404),
            Err(MoviebuffError::NotFound)
        ));
        assert!(matches!(
            classify(502).into_result(502),
            Err(MoviebuffError::ResponseNotReceived { status: 502 })
        ));
    }

    #[test]
    fn test_decode_typed_accepts_matching_type() {
        // Arrange
        let body = br#"{"name":"Test_Movie","type":"movie"}"#;

        // Act
        let movie: Movie = decode_typed(body).unwrap();

        // Assert
        assert_eq!(movie.name, "Test_Movie");
        assert_eq!(movie.r#type, "movie");
    }

    #[test]
    fn test_decode_typed_rejects_other_kind() {
        // Arrange
        let body = br#"{"name":"Amitabh Bachchan","type":"person"}"#;

        // Act
        let result = decode_typed::<Movie>(body);

        // Assert
        assert!(matches!(result, Err(MoviebuffError::NotFound)));
    }

    #[test]
    fn test_decode_typed_rejects_missing_type() {
        // Arrange
        let body = br#"{"name":"No Type"}"#;

        // Act
        let result = decode_typed::<Person>(body);

        // Assert
        assert!(matches!(result, Err(MoviebuffError::NotFound)));
    }

    #[test]
    fn test_decode_malformed_json() {
        // Arrange & Act
        let result = decode::<Calendar>(b"invalid json");

        // Assert
        let Err(MoviebuffError::Decode(err)) = result else {
            panic!("expected decode error");
        };
        assert!(err.is_syntax());
    }

    #[test]
    fn test_decode_structurally_incompatible() {
        // Arrange & Act
        let result = decode::<Calendar>(br#"{"holidays":"not-a-list"}"#);

        // Assert
        let Err(MoviebuffError::Decode(err)) = result else {
            panic!("expected decode error");
        };
        assert!(err.is_data());
    }
}
