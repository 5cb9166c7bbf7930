//! watsonx.data Definition Library
//!
//! This crate provides the types (primitives) used to describe a REST API as a
//! table of endpoint descriptors. The `watsonx-data` runtime consults these
//! descriptors when it assembles a request: the HTTP method, the path template,
//! the request body encoding, the declared query parameters and the shape of
//! the response all come from here rather than from per-operation code.
//!
//! ## Core Types
//!
//! - [`RestApi`] - A complete REST API definition with default URL, regions, auth and endpoints
//! - [`Endpoint`] - A single API endpoint with method, path, and schemas
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, etc.)
//! - [`AuthStrategy`] - Authentication kinds (IAM, Bearer, Basic, None)
//! - [`ApiResponse`] - Response type definitions (JSON, enveloped JSON, Empty)
//! - [`ApiRequest`] - Request body type definitions (JSON, JSON-Patch, FormData)
//! - [`FormField`] - Form field definitions for multipart requests
//! - [`FormFieldKind`] - Form field type classification (Text, File)
//! - [`Schema`] - Type information for request/response bodies
//!
//! ## Examples
//!
//! ```
//! use watsonx_define::{RestApi, Endpoint, RestMethod, AuthStrategy, ApiResponse};
//!
//! let api = RestApi {
//!     name: "Lakehouse".to_string(),
//!     description: "Lakehouse API".to_string(),
//!     service_name: "lakehouse".to_string(),
//!     base_url: "https://lakehouse.example.com/api/v2".to_string(),
//!     docs_url: None,
//!     auth: AuthStrategy::Iam,
//!     regions: vec![],
//!     headers: vec![],
//!     endpoints: vec![
//!         Endpoint {
//!             id: "ListCatalogs".to_string(),
//!             method: RestMethod::Get,
//!             path: "/catalogs".to_string(),
//!             description: "List catalogs".to_string(),
//!             query: vec![],
//!             request: None,
//!             response: ApiResponse::enveloped("CatalogCollection", "catalogs"),
//!             headers: vec![],
//!         },
//!     ],
//! };
//!
//! assert_eq!(api.name, "Lakehouse");
//! assert!(api.endpoint("ListCatalogs").is_some());
//! ```

pub mod auth;
pub mod prelude;
pub mod request;
pub mod response;
pub mod schema;
pub mod types;

// Re-export main types at crate root
pub use auth::AuthStrategy;
pub use request::{ApiRequest, FormField, FormFieldKind};
pub use response::ApiResponse;
pub use schema::{Schema, SchemaObject};
pub use types::{Endpoint, PathTemplateError, RestApi, RestMethod};
