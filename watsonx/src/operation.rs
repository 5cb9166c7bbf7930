//! The contract every Options type fulfils.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::error::ValidationError;
use crate::request::RequestBody;

/// Per-call settings shared by every Options type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Value for the `AuthInstanceId` header.
    pub auth_instance_id: Option<String>,
    /// Extra headers, applied after every other header.
    pub headers: BTreeMap<String, String>,
}

/// A single watsonx.data operation.
///
/// Options types describe *what* to send; the endpoint descriptor named by
/// [`ENDPOINT_ID`](Self::ENDPOINT_ID) describes *how*: method, path
/// template, declared query parameters, body encoding and response shape.
pub trait Operation {
    /// Identifier of the endpoint in the API definition.
    const ENDPOINT_ID: &'static str;

    /// The typed result of a successful call.
    type Output: DeserializeOwned;

    /// Checks that every required field is set.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Value for a path template placeholder.
    fn path_param(&self, _name: &str) -> Option<&str> {
        None
    }

    /// Query parameters to send; unset optional parameters are left out.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// The request body.
    fn body(&self) -> Result<RequestBody, ValidationError> {
        Ok(RequestBody::None)
    }

    /// Shared per-call settings.
    fn call_options(&self) -> &CallOptions;
}

/// Fails with a validation error when `value` is empty.
pub(crate) fn require(
    operation: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::missing(operation, field));
    }
    Ok(())
}

/// Fails with a validation error when `value` is `None`.
pub(crate) fn require_some<T>(
    operation: &'static str,
    field: &'static str,
    value: &Option<T>,
) -> Result<(), ValidationError> {
    if value.is_none() {
        return Err(ValidationError::missing(operation, field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_empty() {
        assert!(require("GetTable", "table_id", "t1").is_ok());
        let err = require("GetTable", "table_id", "").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                operation: "GetTable",
                field: "table_id"
            }
        ));
    }

    #[test]
    fn require_some_accepts_empty_collections() {
        let empty: Option<Vec<u8>> = Some(vec![]);
        assert!(require_some("UpdateDatabase", "body", &empty).is_ok());
        assert!(require_some::<Vec<u8>>("UpdateDatabase", "body", &None).is_err());
    }
}
