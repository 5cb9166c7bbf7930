//! Convenient re-exports for working with endpoint definitions.
//!
//! ## Examples
//!
//! ```
//! use watsonx_define::prelude::*;
//!
//! let api = RestApi {
//!     name: "MyAPI".to_string(),
//!     description: "My API".to_string(),
//!     service_name: "my_api".to_string(),
//!     base_url: "https://api.example.com".to_string(),
//!     docs_url: None,
//!     auth: AuthStrategy::BearerToken,
//!     regions: vec![],
//!     headers: vec![],
//!     endpoints: vec![],
//! };
//! assert!(api.endpoints.is_empty());
//! ```

pub use crate::auth::AuthStrategy;
pub use crate::request::{ApiRequest, FormField, FormFieldKind};
pub use crate::response::ApiResponse;
pub use crate::schema::{Schema, SchemaObject};
pub use crate::types::{Endpoint, PathTemplateError, RestApi, RestMethod};
