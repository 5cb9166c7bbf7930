//! Schema definitions for request/response types.
//!
//! A [`Schema`] names the Rust type that carries a request or response body.
//! The runtime never reflects on it; it exists so the endpoint table documents
//! which model each endpoint exchanges and so tests can cross-check that the
//! operation wired to an endpoint uses the type the table names.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait bound for types that can be used in API schemas.
///
/// The trait is automatically implemented for any type that satisfies
/// all the required bounds.
///
/// ## Examples
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use watsonx_define::SchemaObject;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Bucket {
///     name: String,
/// }
///
/// fn accepts_schema<T: SchemaObject>(_: T) {}
/// accepts_schema(Bucket { name: "b".into() });
/// ```
pub trait SchemaObject: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static {}

impl<T> SchemaObject for T where
    T: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static
{
}

/// A schema descriptor naming a body type.
///
/// ## Examples
///
/// ```
/// use watsonx_define::Schema;
///
/// let schema = Schema::new("BucketRegistration");
/// assert_eq!(schema.full_path(), "BucketRegistration");
///
/// let schema = Schema::with_path("BucketRegistration", "watsonx_definitions::watsonx_data");
/// assert_eq!(
///     schema.full_path(),
///     "watsonx_definitions::watsonx_data::BucketRegistration"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// The Rust type name (e.g., "BucketRegistration").
    pub type_name: String,
    /// Module path where this type is defined.
    pub module_path: Option<String>,
}

impl Schema {
    /// Creates a new schema with just a type name.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            module_path: None,
        }
    }

    /// Creates a schema with a module path.
    pub fn with_path(type_name: impl Into<String>, module_path: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            module_path: Some(module_path.into()),
        }
    }

    /// Returns the fully qualified type path.
    pub fn full_path(&self) -> String {
        match &self.module_path {
            Some(path) => format!("{}::{}", path, self.type_name),
            None => self.type_name.clone(),
        }
    }
}
