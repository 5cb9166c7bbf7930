//! Response types and decoding.
//!
//! Every call resolves to a [`DetailedResponse`]: the status and headers as
//! received plus an optional typed result. The result is `None` when the
//! service sent no body, or when an enveloped body lacks its payload key.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde_json::Value;
use watsonx_define::ApiResponse;
use watsonx_definitions::watsonx_data::ServiceErrorBody;

use crate::error::{ResponseError, WatsonxResult};

/// A response exactly as it came off the wire.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body (already decompressed).
    pub body: Bytes,
}

impl RawResponse {
    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    fn has_body(&self) -> bool {
        self.body.iter().any(|b| !b.is_ascii_whitespace())
    }
}

/// The outcome of a successful call.
///
/// ## Examples
///
/// ```rust
/// use reqwest::header::HeaderMap;
/// use watsonx_data::DetailedResponse;
///
/// let response = DetailedResponse {
///     status_code: 204,
///     headers: HeaderMap::new(),
///     result: None::<()>,
/// };
/// assert!(response.result().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code.
    pub status_code: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// The decoded result, if the response carried one.
    pub result: Option<T>,
}

impl<T> DetailedResponse<T> {
    /// Returns a reference to the decoded result.
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    /// Consumes the response, returning the decoded result.
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Decodes a raw response according to the endpoint's response descriptor.
pub(crate) fn decode<T: DeserializeOwned>(
    raw: RawResponse,
    kind: &ApiResponse,
) -> WatsonxResult<DetailedResponse<T>> {
    if !raw.is_success() {
        let message = service_error_message(&raw);
        return Err(ResponseError::Service {
            message,
            response: Box::new(raw),
        }
        .into());
    }

    if kind.is_empty() || !raw.has_body() {
        return Ok(DetailedResponse {
            status_code: raw.status_code,
            headers: raw.headers,
            result: None,
        });
    }

    let parsed = serde_json::from_slice::<Value>(&raw.body).and_then(|value| {
        if !value.is_object() {
            return Err(serde_json::Error::invalid_type(
                unexpected(&value),
                &"a JSON object",
            ));
        }
        match kind.payload_key() {
            Some(key) if value.get(key).is_none() => Ok(None),
            _ => serde_json::from_value::<T>(value).map(Some),
        }
    });

    match parsed {
        Ok(result) => Ok(DetailedResponse {
            status_code: raw.status_code,
            headers: raw.headers,
            result,
        }),
        Err(source) => Err(ResponseError::Processing {
            source,
            response: Box::new(raw),
        }
        .into()),
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Extracts a human-readable message from an error response.
///
/// Looks for `errors[].message`, then `error`, `message` and `errorMessage`;
/// falls back to the canonical status reason.
pub(crate) fn service_error_message(raw: &RawResponse) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(&raw.body) {
        if let Ok(body) = serde_json::from_value::<ServiceErrorBody>(value.clone()) {
            if let Some(message) = body.errors.into_iter().find_map(|e| e.message) {
                return message;
            }
        }
        for key in ["error", "message", "errorMessage"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    StatusCode::from_u16(raw.status_code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WatsonxError;
    use watsonx_definitions::watsonx_data::{BucketRegistrationResult, Table};

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status_code: status,
            headers: HeaderMap::new(),
            body: Bytes::copy_from_slice(body.as_bytes()),
        }
    }

    fn bucket_kind() -> ApiResponse {
        ApiResponse::enveloped("BucketRegistrationResult", "bucket_registration")
    }

    #[test]
    fn decodes_enveloped_payload() {
        let body = r#"{"bucket_registration":{"bucket_name":"sample-bucket"},"response":{"message":"ok"}}"#;
        let decoded = decode::<BucketRegistrationResult>(raw(201, body), &bucket_kind()).unwrap();
        let bucket = decoded.result.unwrap().bucket_registration.unwrap();
        assert_eq!(bucket.bucket_name.as_deref(), Some("sample-bucket"));
        assert_eq!(decoded.status_code, 201);
    }

    #[test]
    fn missing_payload_key_is_none() {
        let body = r#"{"response":{"message":"accepted","message_code":"202"}}"#;
        let decoded = decode::<BucketRegistrationResult>(raw(200, body), &bucket_kind()).unwrap();
        assert!(decoded.result.is_none());
    }

    #[test]
    fn empty_body_is_none() {
        let decoded = decode::<Table>(raw(200, ""), &ApiResponse::json_type("Table")).unwrap();
        assert!(decoded.result.is_none());

        let decoded = decode::<Table>(raw(200, "  \n"), &ApiResponse::json_type("Table")).unwrap();
        assert!(decoded.result.is_none());
    }

    #[test]
    fn empty_response_kind_ignores_body() {
        let decoded = decode::<()>(raw(204, ""), &ApiResponse::Empty).unwrap();
        assert_eq!(decoded.status_code, 204);
        assert!(decoded.result.is_none());
    }

    #[test]
    fn non_json_success_is_processing_error() {
        let err = decode::<Table>(raw(200, "hello"), &ApiResponse::json_type("Table")).unwrap_err();
        assert!(matches!(
            err,
            WatsonxError::Response(ResponseError::Processing { .. })
        ));
        assert_eq!(err.response().unwrap().text(), "hello");
    }

    #[test]
    fn wrong_shape_is_processing_error() {
        let err =
            decode::<Table>(raw(200, "[1,2,3]"), &ApiResponse::json_type("Table")).unwrap_err();
        assert_eq!(err.status_code(), Some(200));
    }

    #[test]
    fn enveloped_body_must_be_an_object() {
        for body in ["[1,2,3]", r#""just a string""#, "42", "null"] {
            let err =
                decode::<BucketRegistrationResult>(raw(200, body), &bucket_kind()).unwrap_err();
            assert!(
                matches!(err, WatsonxError::Response(ResponseError::Processing { .. })),
                "{body} decoded without error"
            );
            assert_eq!(err.response().unwrap().text(), body);
        }
    }

    #[test]
    fn service_error_prefers_errors_array() {
        let body = r#"{"errors":[{"code":"not_found","message":"bucket not found"}],"trace":"abc"}"#;
        let err = decode::<Table>(raw(404, body), &ApiResponse::json_type("Table")).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 404: bucket not found");
        assert_eq!(err.status_code(), Some(404));
    }

    #[test]
    fn service_error_falls_back_through_keys() {
        assert_eq!(
            service_error_message(&raw(400, r#"{"errorMessage":"bad engine"}"#)),
            "bad engine"
        );
        assert_eq!(
            service_error_message(&raw(400, r#"{"error":"nope","message":"ignored"}"#)),
            "nope"
        );
    }

    #[test]
    fn service_error_without_json_uses_reason() {
        assert_eq!(
            service_error_message(&raw(503, "<html>down</html>")),
            "Service Unavailable"
        );
    }
}
