//! Options types, one per operation.
//!
//! Every Options type carries the fields its endpoint needs and a
//! [`CallOptions`] value for per-call settings. Mandatory fields are taken
//! positionally by `new`; `Default` builds an empty value that fails
//! validation before any request is sent.
//!
//! ```rust
//! use watsonx_data::options::GetTableOptions;
//! use watsonx_data::Operation;
//!
//! let options = GetTableOptions::new("iceberg_data", "sales", "orders", "presto-01")
//!     .with_auth_instance_id("crn:v1:bluemix:public:lakehouse:us-south:a/1::")
//!     .with_header("X-Request-Origin", "nightly-report");
//! assert!(options.validate().is_ok());
//! assert!(GetTableOptions::default().validate().is_err());
//! ```

use watsonx_definitions::watsonx_data::{
    CreateBucketRegistrationBody, CreateColumnsBody, CreateDatabaseRegistrationBody,
    CreateExternalEngineBody, CreateOtherEngineBody, CreatePrestoEngineBody, CreateSchemaBody,
    CreateSparkEngineApplicationBody, CreateSparkEngineBody, ExplainAnalyzeStatementBody,
    ExplainStatementBody, ScaleEngineBody,
};

use crate::error::ValidationError;
use crate::operation::require;

/// Adds the per-call setters shared by every Options type.
macro_rules! call_setters {
    ($name:ident) => {
        impl $name {
            /// Sets the `AuthInstanceId` header for this call.
            pub fn with_auth_instance_id(mut self, instance_id: impl Into<String>) -> Self {
                self.call.auth_instance_id = Some(instance_id.into());
                self
            }

            /// Adds a custom header; a later value for the same name wins.
            pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.call.headers.insert(name.into(), value.into());
                self
            }

            /// Adds several custom headers.
            pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
            where
                I: IntoIterator<Item = (K, V)>,
                K: Into<String>,
                V: Into<String>,
            {
                self.call
                    .headers
                    .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
                self
            }
        }
    };
}

/// Declares an Options type whose mandatory fields are path segments and
/// required query parameters, optionally followed by a JSON or JSON-patch body.
macro_rules! options {
    (
        $(#[$meta:meta])*
        $name:ident = $endpoint:literal -> $output:ty {
            path: [$($path:ident),* $(,)?],
            query: [$($query:ident),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $path: String,)*
            $(pub $query: String,)*
            /// Per-call settings.
            pub call: $crate::operation::CallOptions,
        }

        impl $name {
            /// Creates the options from their mandatory fields.
            pub fn new($($path: impl Into<String>,)* $($query: impl Into<String>,)*) -> Self {
                Self {
                    $($path: $path.into(),)*
                    $($query: $query.into(),)*
                    call: Default::default(),
                }
            }
        }

        call_setters!($name);

        impl $crate::operation::Operation for $name {
            const ENDPOINT_ID: &'static str = $endpoint;
            type Output = $output;

            fn validate(&self) -> Result<(), $crate::error::ValidationError> {
                $($crate::operation::require(Self::ENDPOINT_ID, stringify!($path), &self.$path)?;)*
                $($crate::operation::require(Self::ENDPOINT_ID, stringify!($query), &self.$query)?;)*
                Ok(())
            }

            fn path_param(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($path) => Some(self.$path.as_str()),)*
                    _ => None,
                }
            }

            fn query(&self) -> Vec<(&'static str, String)> {
                vec![$((stringify!($query), self.$query.clone())),*]
            }

            fn call_options(&self) -> &$crate::operation::CallOptions {
                &self.call
            }
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident = $endpoint:literal -> $output:ty {
            path: [$($path:ident),* $(,)?],
            query: [$($query:ident),* $(,)?],
            json: $body:ty $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $path: String,)*
            $(pub $query: String,)*
            /// The request body.
            pub body: Option<$body>,
            /// Per-call settings.
            pub call: $crate::operation::CallOptions,
        }

        impl $name {
            /// Creates the options from their mandatory fields and the body.
            pub fn new($($path: impl Into<String>,)* $($query: impl Into<String>,)* body: $body) -> Self {
                Self {
                    $($path: $path.into(),)*
                    $($query: $query.into(),)*
                    body: Some(body),
                    call: Default::default(),
                }
            }

            /// Replaces the request body.
            pub fn with_body(mut self, body: $body) -> Self {
                self.body = Some(body);
                self
            }
        }

        call_setters!($name);

        impl $crate::operation::Operation for $name {
            const ENDPOINT_ID: &'static str = $endpoint;
            type Output = $output;

            fn validate(&self) -> Result<(), $crate::error::ValidationError> {
                $($crate::operation::require(Self::ENDPOINT_ID, stringify!($path), &self.$path)?;)*
                $($crate::operation::require(Self::ENDPOINT_ID, stringify!($query), &self.$query)?;)*
                match &self.body {
                    Some(body) => $crate::options::RequiredFields::check_required(body, Self::ENDPOINT_ID),
                    None => Err($crate::error::ValidationError::missing(Self::ENDPOINT_ID, "body")),
                }
            }

            fn path_param(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($path) => Some(self.$path.as_str()),)*
                    _ => None,
                }
            }

            fn query(&self) -> Vec<(&'static str, String)> {
                vec![$((stringify!($query), self.$query.clone())),*]
            }

            fn body(&self) -> Result<$crate::request::RequestBody, $crate::error::ValidationError> {
                match &self.body {
                    Some(body) => $crate::request::RequestBody::json(body),
                    None => Ok($crate::request::RequestBody::None),
                }
            }

            fn call_options(&self) -> &$crate::operation::CallOptions {
                &self.call
            }
        }
    };

    (
        $(#[$meta:meta])*
        $name:ident = $endpoint:literal -> $output:ty {
            path: [$($path:ident),* $(,)?],
            query: [$($query:ident),* $(,)?],
            patch $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $path: String,)*
            $(pub $query: String,)*
            /// The patch document; may be empty but must be set.
            pub body: Option<Vec<watsonx_definitions::watsonx_data::JsonPatchOperation>>,
            /// Per-call settings.
            pub call: $crate::operation::CallOptions,
        }

        impl $name {
            /// Creates the options from their mandatory fields and the patch.
            pub fn new(
                $($path: impl Into<String>,)*
                $($query: impl Into<String>,)*
                body: Vec<watsonx_definitions::watsonx_data::JsonPatchOperation>,
            ) -> Self {
                Self {
                    $($path: $path.into(),)*
                    $($query: $query.into(),)*
                    body: Some(body),
                    call: Default::default(),
                }
            }

            /// Replaces the patch document.
            pub fn with_body(mut self, body: Vec<watsonx_definitions::watsonx_data::JsonPatchOperation>) -> Self {
                self.body = Some(body);
                self
            }
        }

        call_setters!($name);

        impl $crate::operation::Operation for $name {
            const ENDPOINT_ID: &'static str = $endpoint;
            type Output = $output;

            fn validate(&self) -> Result<(), $crate::error::ValidationError> {
                $($crate::operation::require(Self::ENDPOINT_ID, stringify!($path), &self.$path)?;)*
                $($crate::operation::require(Self::ENDPOINT_ID, stringify!($query), &self.$query)?;)*
                $crate::operation::require_some(Self::ENDPOINT_ID, "body", &self.body)
            }

            fn path_param(&self, name: &str) -> Option<&str> {
                match name {
                    $(stringify!($path) => Some(self.$path.as_str()),)*
                    _ => None,
                }
            }

            fn query(&self) -> Vec<(&'static str, String)> {
                vec![$((stringify!($query), self.$query.clone())),*]
            }

            fn body(&self) -> Result<$crate::request::RequestBody, $crate::error::ValidationError> {
                match &self.body {
                    Some(body) => $crate::request::RequestBody::json(body),
                    None => Ok($crate::request::RequestBody::None),
                }
            }

            fn call_options(&self) -> &$crate::operation::CallOptions {
                &self.call
            }
        }
    };
}

mod buckets;
mod catalogs;
mod databases;
mod engines;
mod presto;
mod spark;

pub use buckets::*;
pub use catalogs::*;
pub use databases::*;
pub use engines::*;
pub use presto::*;
pub use spark::*;

options! {
    /// Options for `get_ready`.
    GetReadyOptions = "GetReady" -> () {
        path: [],
        query: [],
    }
}

/// Mandatory fields inside a JSON request body.
pub(crate) trait RequiredFields {
    /// Fails if a mandatory field of the body is empty.
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError>;
}

impl RequiredFields for CreateBucketRegistrationBody {
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError> {
        require(operation, "bucket_type", &self.bucket_type)?;
        require(operation, "catalog_name", &self.catalog_name)?;
        require(operation, "description", &self.description)?;
        require(operation, "managed_by", &self.managed_by)?;
        require(operation, "table_type", &self.table_type)
    }
}

impl RequiredFields for CreateDatabaseRegistrationBody {
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError> {
        require(operation, "catalog_name", &self.catalog_name)?;
        require(operation, "database_display_name", &self.database_display_name)?;
        require(operation, "database_type", &self.database_type)
    }
}

impl RequiredFields for CreateExternalEngineBody {
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError> {
        require(operation, "origin", &self.origin)
    }
}

impl RequiredFields for CreateOtherEngineBody {
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError> {
        require(operation, "engine_display_name", &self.engine_display_name)?;
        require(
            operation,
            "engine_details.connection_string",
            &self.engine_details.connection_string,
        )?;
        require(
            operation,
            "engine_details.type",
            &self.engine_details.engine_type,
        )
    }
}

impl RequiredFields for CreatePrestoEngineBody {
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError> {
        require(operation, "origin", &self.origin)?;
        require(operation, "type", &self.engine_type)
    }
}

impl RequiredFields for ScaleEngineBody {
    fn check_required(&self, _operation: &'static str) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl RequiredFields for ExplainStatementBody {
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError> {
        require(operation, "statement", &self.statement)
    }
}

impl RequiredFields for ExplainAnalyzeStatementBody {
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError> {
        require(operation, "statement", &self.statement)
    }
}

impl RequiredFields for CreateSparkEngineBody {
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError> {
        require(operation, "origin", &self.origin)
    }
}

impl RequiredFields for CreateSparkEngineApplicationBody {
    fn check_required(&self, _operation: &'static str) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl RequiredFields for CreateSchemaBody {
    fn check_required(&self, operation: &'static str) -> Result<(), ValidationError> {
        require(operation, "custom_path", &self.custom_path)?;
        require(operation, "schema_name", &self.schema_name)
    }
}

impl RequiredFields for CreateColumnsBody {
    fn check_required(&self, _operation: &'static str) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Operation;

    #[test]
    fn get_ready_needs_nothing() {
        let options = GetReadyOptions::new();
        assert!(options.validate().is_ok());
        assert!(options.query().is_empty());
        assert_eq!(options.path_param("anything"), None);
    }

    #[test]
    fn header_setters_are_last_write_wins() {
        let options = GetReadyOptions::new()
            .with_header("X-Trace", "first")
            .with_header("X-Trace", "second")
            .with_headers([("X-Other", "1")]);
        assert_eq!(options.call.headers.get("X-Trace").unwrap(), "second");
        assert_eq!(options.call.headers.len(), 2);

        let options = options
            .with_auth_instance_id("one")
            .with_auth_instance_id("two");
        assert_eq!(options.call.auth_instance_id.as_deref(), Some("two"));
    }

    #[test]
    fn other_engine_details_are_checked() {
        let body = CreateOtherEngineBody::new(
            "hive-ext",
            watsonx_definitions::watsonx_data::OtherEngineDetails::new("", "hive"),
        );
        let err = body.check_required("CreateOtherEngine").unwrap_err();
        assert!(err.to_string().contains("engine_details.connection_string"));
    }
}
