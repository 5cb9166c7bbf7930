//! JSON-Patch helpers for the `update_*` operations.
//!
//! watsonx.data updates resources with RFC 6902 patch documents. Callers can
//! hand-write the operations with [`JsonPatchOperation`] or let [`as_patch`]
//! derive them from the desired state of a resource.

use serde::Serialize;
use serde_json::Value;
use watsonx_definitions::watsonx_data::JsonPatchOperation;

use crate::error::ValidationError;

/// Derives a patch that sets every top-level field of `updated`.
///
/// Each field present in the serialized value becomes one `add` operation on
/// `/<field>`. Nothing is removed and nested objects are replaced whole.
///
/// ## Errors
///
/// Returns [`ValidationError::PatchSource`] when `updated` does not serialize
/// to a JSON object.
///
/// ## Examples
///
/// ```rust
/// use serde_json::json;
/// use watsonx_data::patch::as_patch;
///
/// let patch = as_patch(&json!({"description": "nightly", "tags": ["etl"]})).unwrap();
/// assert_eq!(patch.len(), 2);
/// assert_eq!(patch[0].path, "/description");
/// ```
pub fn as_patch<T: Serialize + ?Sized>(
    updated: &T,
) -> Result<Vec<JsonPatchOperation>, ValidationError> {
    let Value::Object(fields) = serde_json::to_value(updated)? else {
        return Err(ValidationError::PatchSource);
    };
    Ok(fields
        .into_iter()
        .map(|(field, value)| {
            JsonPatchOperation::add(format!("/{}", escape_pointer(&field)), value)
        })
        .collect())
}

/// Escapes a key for use as one JSON Pointer token.
fn escape_pointer(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use watsonx_definitions::watsonx_data::{DatabaseRegistration, JsonPatchOp};

    #[test]
    fn one_add_per_top_level_field() {
        let patch = as_patch(&json!({
            "database_display_name": "sales",
            "database_details": {"port": 50000}
        }))
        .unwrap();

        assert_eq!(patch.len(), 2);
        assert!(patch.iter().all(|op| op.op == JsonPatchOp::Add));
        let details = patch
            .iter()
            .find(|op| op.path == "/database_details")
            .unwrap();
        assert_eq!(details.value, Some(json!({"port": 50000})));
    }

    #[test]
    fn skipped_fields_produce_no_operations() {
        let registration = DatabaseRegistration {
            description: Some("warehouse".into()),
            ..Default::default()
        };
        let patch = as_patch(&registration).unwrap();
        assert_eq!(patch.len(), 1);
        assert_eq!(patch[0].path, "/description");
    }

    #[test]
    fn pointer_tokens_are_escaped() {
        let patch = as_patch(&json!({"a/b~c": 1})).unwrap();
        assert_eq!(patch[0].path, "/a~1b~0c");
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(matches!(
            as_patch(&json!([1, 2])),
            Err(ValidationError::PatchSource)
        ));
        assert!(matches!(
            as_patch("text"),
            Err(ValidationError::PatchSource)
        ));
    }
}
