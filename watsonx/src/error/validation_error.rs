//! Options validation errors.

use thiserror::Error;
use watsonx_define::PathTemplateError;

/// Errors found in an Options value before anything is sent.
///
/// A call that fails with one of these never reaches the network.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is unset or empty.
    #[error("{operation} validation failed: required field `{field}` is missing")]
    MissingField {
        /// The endpoint identifier of the operation.
        operation: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// A required multipart field declared by the endpoint was not supplied.
    #[error("{operation} validation failed: form field `{field}` is required")]
    MissingFormField {
        /// The endpoint identifier of the operation.
        operation: &'static str,
        /// The missing form field.
        field: String,
    },

    /// The Options value tried to send a query parameter its endpoint does not declare.
    #[error("{operation} does not accept query parameter `{name}`")]
    UndeclaredQuery {
        /// The endpoint identifier of the operation.
        operation: &'static str,
        /// The offending parameter.
        name: &'static str,
    },

    /// The Options value names an endpoint missing from the API definition.
    #[error("No endpoint named {0} is defined")]
    UnknownEndpoint(&'static str),

    /// The endpoint's path template could not be rendered.
    #[error("Path template error: {0}")]
    PathTemplate(#[from] PathTemplateError),

    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Body(#[from] serde_json::Error),

    /// A patch was requested from a value that is not a JSON object.
    #[error("Cannot build a patch from a non-object value")]
    PatchSource,
}

impl ValidationError {
    /// Creates a missing field error.
    pub fn missing(operation: &'static str, field: &'static str) -> Self {
        Self::MissingField { operation, field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_operation() {
        let err = ValidationError::missing("UpdateDatabase", "database_id");
        let display = err.to_string();
        assert!(display.contains("UpdateDatabase"));
        assert!(display.contains("database_id"));
        assert!(display.contains("validation"));
    }

    #[test]
    fn test_path_template_conversion() {
        let err: ValidationError = PathTemplateError::MissingParam("bucket_id".into()).into();
        assert!(matches!(err, ValidationError::PathTemplate(_)));
    }
}
