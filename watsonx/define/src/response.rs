//! API response type definitions.
//!
//! The response type tells the runtime decoder what a successful body looks
//! like and when an otherwise successful call has nothing to report.

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// Describes the expected response from an API endpoint.
///
/// ## Examples
///
/// Plain JSON object:
///
/// ```
/// use watsonx_define::ApiResponse;
///
/// let response = ApiResponse::json_type("Table");
/// assert!(response.payload_key().is_none());
/// ```
///
/// A primary payload next to a `response` success envelope:
///
/// ```
/// use watsonx_define::ApiResponse;
///
/// let response = ApiResponse::enveloped("BucketRegistrationResult", "bucket_registration");
/// assert_eq!(response.payload_key(), Some("bucket_registration"));
/// ```
///
/// Empty response (for DELETE or 204 responses):
///
/// ```
/// use watsonx_define::ApiResponse;
///
/// assert!(ApiResponse::Empty.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiResponse {
    /// JSON object deserialized into the named type.
    Json(Schema),

    /// JSON object that pairs a primary payload key with a
    /// `response: {message, message_code}` success envelope.
    ///
    /// When the payload key is absent the call succeeded but has no result.
    Enveloped {
        /// The combined result type.
        schema: Schema,
        /// Top-level key that carries the primary payload.
        payload: String,
    },

    /// No response body expected.
    ///
    /// Used for endpoints that return 204 No Content or where the response
    /// body should be ignored.
    Empty,
}

impl ApiResponse {
    /// Creates a JSON response with the given schema.
    pub fn json(schema: Schema) -> Self {
        Self::Json(schema)
    }

    /// Creates a JSON response with just a type name.
    pub fn json_type(type_name: impl Into<String>) -> Self {
        Self::Json(Schema::new(type_name))
    }

    /// Creates an enveloped JSON response.
    pub fn enveloped(type_name: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::Enveloped {
            schema: Schema::new(type_name),
            payload: payload.into(),
        }
    }

    /// Returns the result schema, if the response has a body.
    pub fn schema(&self) -> Option<&Schema> {
        match self {
            Self::Json(schema) | Self::Enveloped { schema, .. } => Some(schema),
            Self::Empty => None,
        }
    }

    /// Returns the primary payload key of an enveloped response.
    pub fn payload_key(&self) -> Option<&str> {
        match self {
            Self::Enveloped { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Returns true if this response carries a JSON body.
    pub fn is_json(&self) -> bool {
        !self.is_empty()
    }

    /// Returns true if this is an empty response.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_response_has_schema_but_no_payload_key() {
        let response = ApiResponse::json_type("Table");
        assert!(response.is_json());
        assert_eq!(response.schema().map(|s| s.type_name.as_str()), Some("Table"));
        assert_eq!(response.payload_key(), None);
    }

    #[test]
    fn enveloped_response_exposes_payload_key() {
        let response = ApiResponse::enveloped("CatalogCollection", "catalogs");
        assert!(response.is_json());
        assert_eq!(response.payload_key(), Some("catalogs"));
        assert_eq!(
            response.schema().map(|s| s.type_name.as_str()),
            Some("CatalogCollection")
        );
    }

    #[test]
    fn empty_response_has_nothing() {
        let response = ApiResponse::Empty;
        assert!(response.is_empty());
        assert!(!response.is_json());
        assert!(response.schema().is_none());
        assert!(response.payload_key().is_none());
    }
}
