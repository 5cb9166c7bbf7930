//! Core types for REST API definitions.
//!
//! - [`RestApi`] - The top-level API definition
//! - [`Endpoint`] - Individual API endpoint definitions
//! - [`RestMethod`] - HTTP method enumeration

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::auth::AuthStrategy;
use crate::request::ApiRequest;
use crate::response::ApiResponse;

/// HTTP methods supported by REST APIs.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use watsonx_define::RestMethod;
///
/// assert_eq!(RestMethod::from_str("PATCH").unwrap(), RestMethod::Patch);
/// assert_eq!(RestMethod::Delete.to_string(), "DELETE");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP HEAD - Get headers only (no body)
    Head,
    /// HTTP OPTIONS - Get allowed methods for a resource
    Options,
}

/// Errors raised while rendering an endpoint's path template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathTemplateError {
    /// A `{param}` placeholder has no value.
    #[error("no value supplied for path parameter `{0}`")]
    MissingParam(String),

    /// A `{` without a matching `}`.
    #[error("unclosed placeholder in path template `{0}`")]
    Unclosed(String),
}

/// A complete REST API definition.
///
/// Besides the endpoint table this carries the service-level facts a client
/// needs before it can make its first call: the default URL, the region table
/// and the name used to look up external configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestApi {
    /// Unique identifier for this API.
    pub name: String,
    /// Human-readable description of the API.
    pub description: String,
    /// Default service name for external configuration lookup.
    ///
    /// Properties are read from `<SERVICE_NAME>_<KEY>` (uppercased, `-` and
    /// `.` replaced by `_`), e.g. `watsonx_data` reads `WATSONX_DATA_URL`.
    pub service_name: String,
    /// Default base URL for all endpoints.
    ///
    /// Endpoint paths are appended to this URL when making requests.
    pub base_url: String,
    /// Link to API documentation (optional).
    pub docs_url: Option<String>,
    /// The authentication kind the service expects by default.
    pub auth: AuthStrategy,
    /// Known region codes and their base URLs.
    pub regions: Vec<(String, String)>,
    /// Default HTTP headers to include with every request.
    ///
    /// Keys are case-insensitive for merging.
    pub headers: Vec<(String, String)>,
    /// All endpoints defined for this API.
    pub endpoints: Vec<Endpoint>,
}

impl RestApi {
    /// Looks up an endpoint by its identifier.
    pub fn endpoint(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    /// Returns the base URL registered for a region code.
    ///
    /// ## Examples
    ///
    /// ```
    /// use watsonx_define::{AuthStrategy, RestApi};
    ///
    /// let api = RestApi {
    ///     name: "Regional".into(),
    ///     description: String::new(),
    ///     service_name: "regional".into(),
    ///     base_url: "https://eu.example.com".into(),
    ///     docs_url: None,
    ///     auth: AuthStrategy::NoAuth,
    ///     regions: vec![("eu-de".into(), "https://eu.example.com".into())],
    ///     headers: vec![],
    ///     endpoints: vec![],
    /// };
    /// assert_eq!(api.region_url("eu-de"), Some("https://eu.example.com"));
    /// assert_eq!(api.region_url("INVALID_REGION"), None);
    /// ```
    pub fn region_url(&self, region: &str) -> Option<&str> {
        self.regions
            .iter()
            .find(|(code, _)| code == region)
            .map(|(_, url)| url.as_str())
    }
}

/// A single API endpoint definition.
///
/// ## Path Parameters
///
/// Paths support template parameters using curly braces:
/// `/bucket_registrations/{bucket_id}`.
///
/// ## Examples
///
/// ```
/// use watsonx_define::{ApiRequest, ApiResponse, Endpoint, RestMethod};
///
/// let endpoint = Endpoint {
///     id: "UpdateBucketRegistration".to_string(),
///     method: RestMethod::Patch,
///     path: "/bucket_registrations/{bucket_id}".to_string(),
///     description: "Update a bucket registration".to_string(),
///     query: vec![],
///     request: Some(ApiRequest::json_patch()),
///     response: ApiResponse::enveloped("BucketRegistrationResult", "bucket_registration"),
///     headers: vec![],
/// };
///
/// assert_eq!(endpoint.path_params(), vec!["bucket_id"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Identifier for this endpoint, PascalCase (e.g., "ListCatalogs").
    pub id: String,
    /// HTTP method for this endpoint.
    pub method: RestMethod,
    /// Path template (e.g., "/catalogs/{catalog_id}").
    pub path: String,
    /// Human-readable description of what this endpoint does.
    pub description: String,
    /// Names of the query parameters the endpoint accepts.
    pub query: Vec<String>,
    /// Request body definition (`None` when the endpoint takes no body).
    pub request: Option<ApiRequest>,
    /// Expected response type for this endpoint.
    pub response: ApiResponse,
    /// HTTP headers specific to this endpoint.
    ///
    /// These headers are merged with API-level headers, with endpoint headers
    /// taking precedence for matching keys (case-insensitive comparison).
    pub headers: Vec<(String, String)>,
}

impl Endpoint {
    /// Extracts path parameter names from the template, in order of appearance.
    pub fn path_params(&self) -> Vec<&str> {
        let mut params = Vec::new();
        let mut rest = self.path.as_str();
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            if close > 0 {
                params.push(&after[..close]);
            }
            rest = &after[close + 1..];
        }
        params
    }

    /// Returns true if the endpoint declares the named query parameter.
    pub fn accepts_query(&self, name: &str) -> bool {
        self.query.iter().any(|q| q == name)
    }

    /// Renders the path template, asking `value_for` for every placeholder.
    ///
    /// Values are inserted verbatim; callers are responsible for escaping.
    ///
    /// ## Examples
    ///
    /// ```
    /// use watsonx_define::{ApiResponse, Endpoint, RestMethod};
    ///
    /// let endpoint = Endpoint {
    ///     id: "GetTable".into(),
    ///     method: RestMethod::Get,
    ///     path: "/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}".into(),
    ///     description: String::new(),
    ///     query: vec!["engine_id".into()],
    ///     request: None,
    ///     response: ApiResponse::json_type("Table"),
    ///     headers: vec![],
    /// };
    ///
    /// let path = endpoint
    ///     .render_path(|name| Some(format!("<{name}>")))
    ///     .unwrap();
    /// assert_eq!(path, "/catalogs/<catalog_id>/schemas/<schema_id>/tables/<table_id>");
    /// ```
    pub fn render_path<F>(&self, mut value_for: F) -> Result<String, PathTemplateError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut out = String::with_capacity(self.path.len());
        let mut rest = self.path.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| PathTemplateError::Unclosed(self.path.clone()))?;
            let name = &after[..close];
            let value =
                value_for(name).ok_or_else(|| PathTemplateError::MissingParam(name.to_string()))?;
            out.push_str(&value);
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn endpoint(path: &str) -> Endpoint {
        Endpoint {
            id: "Test".to_string(),
            method: RestMethod::Get,
            path: path.to_string(),
            description: String::new(),
            query: vec!["engine_id".to_string()],
            request: None,
            response: ApiResponse::Empty,
            headers: vec![],
        }
    }

    #[test]
    fn rest_method_display_uppercase() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Patch.to_string(), "PATCH");
        assert_eq!(RestMethod::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn rest_method_from_str_is_case_sensitive() {
        assert_eq!(RestMethod::from_str("PUT").unwrap(), RestMethod::Put);
        assert!(RestMethod::from_str("get").is_err());
        assert!(RestMethod::from_str("").is_err());
    }

    #[test]
    fn rest_method_iter_all_variants() {
        assert_eq!(RestMethod::iter().count(), 7);
    }

    #[test]
    fn rest_method_serde_roundtrip() {
        let serialized = serde_json::to_string(&RestMethod::Post).unwrap();
        assert_eq!(serialized, "\"POST\"");
        let parsed: RestMethod = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, RestMethod::Post);
    }

    #[test]
    fn path_params_in_order() {
        let ep = endpoint("/catalogs/{catalog_id}/schemas/{schema_id}/tables/{table_id}");
        assert_eq!(ep.path_params(), vec!["catalog_id", "schema_id", "table_id"]);
    }

    #[test]
    fn path_params_ignores_unclosed_placeholder() {
        let ep = endpoint("/catalogs/{catalog_id");
        assert!(ep.path_params().is_empty());
    }

    #[test]
    fn render_path_substitutes_all_placeholders() {
        let ep = endpoint("/presto_engines/{engine_id}/catalogs/{catalog_id}");
        let path = ep
            .render_path(|name| match name {
                "engine_id" => Some("presto-01".to_string()),
                "catalog_id" => Some("iceberg_data".to_string()),
                _ => None,
            })
            .unwrap();
        assert_eq!(path, "/presto_engines/presto-01/catalogs/iceberg_data");
    }

    #[test]
    fn render_path_reports_missing_value() {
        let ep = endpoint("/bucket_registrations/{bucket_id}");
        let err = ep.render_path(|_| None).unwrap_err();
        assert_eq!(err, PathTemplateError::MissingParam("bucket_id".to_string()));
    }

    #[test]
    fn render_path_reports_unclosed_placeholder() {
        let ep = endpoint("/bucket_registrations/{bucket_id");
        let err = ep.render_path(|_| Some("x".to_string())).unwrap_err();
        assert!(matches!(err, PathTemplateError::Unclosed(_)));
    }

    #[test]
    fn render_path_without_placeholders_is_identity() {
        let ep = endpoint("/ready");
        assert_eq!(ep.render_path(|_| None).unwrap(), "/ready");
    }

    #[test]
    fn accepts_query_checks_declared_names() {
        let ep = endpoint("/catalogs");
        assert!(ep.accepts_query("engine_id"));
        assert!(!ep.accepts_query("catalog_names"));
    }
}
