//! API request body type definitions.
//!
//! The request type determines how the runtime encodes the body of a call
//! and which `Content-Type` it sends.
//!
//! ## Request Types
//!
//! - [`ApiRequest::Json`] - JSON request body (most common)
//! - [`ApiRequest::JsonPatch`] - RFC 6902 patch document
//! - [`ApiRequest::FormData`] - Multipart form-data for driver/file uploads

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// The type of content a form field accepts.
///
/// ## Examples
///
/// ```
/// use watsonx_define::FormFieldKind;
///
/// let text = FormFieldKind::Text;
/// let jar = FormFieldKind::File {
///     accept: vec!["application/java-archive".into()],
/// };
/// assert_ne!(text, jar);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormFieldKind {
    /// Plain text field.
    Text,

    /// File upload field.
    ///
    /// The `accept` patterns follow MIME type syntax with wildcards. An empty
    /// vec means any file type is accepted.
    File {
        /// Accepted MIME type patterns.
        accept: Vec<String>,
    },
}

/// Describes a single field in a multipart form.
///
/// Fields are required unless marked as optional.
///
/// ## Examples
///
/// ```
/// use watsonx_define::FormField;
///
/// let name = FormField::text("catalog_name");
/// assert!(name.required);
///
/// let ssl = FormField::text("ssl")
///     .optional()
///     .with_description("Enable TLS towards the database");
/// assert!(!ssl.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Field name as it appears in Content-Disposition.
    pub name: String,

    /// The kind of field.
    pub kind: FormFieldKind,

    /// Whether this field is required.
    pub required: bool,

    /// Human-readable description of this field.
    pub description: Option<String>,
}

impl FormField {
    /// Creates a required text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FormFieldKind::Text,
            required: true,
            description: None,
        }
    }

    /// Creates a required file field accepting any type.
    ///
    /// ## Examples
    ///
    /// ```
    /// use watsonx_define::{FormField, FormFieldKind};
    ///
    /// let field = FormField::file("driver");
    /// assert!(matches!(field.kind, FormFieldKind::File { accept } if accept.is_empty()));
    /// ```
    pub fn file(name: impl Into<String>) -> Self {
        Self::file_accept(name, vec![])
    }

    /// Creates a required file field with MIME type restrictions.
    pub fn file_accept(name: impl Into<String>, accept: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: FormFieldKind::File { accept },
            required: true,
            description: None,
        }
    }

    /// Makes the field optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Adds a description to the field.
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Returns true if this field carries file content.
    pub fn is_file(&self) -> bool {
        matches!(self.kind, FormFieldKind::File { .. })
    }
}

/// Describes the request body format for an API endpoint.
///
/// ## Examples
///
/// ```
/// use watsonx_define::{ApiRequest, FormField};
///
/// let create = ApiRequest::json_type("CreateBucketRegistrationBody");
/// assert_eq!(create.content_type(), Some("application/json"));
///
/// let update = ApiRequest::json_patch();
/// assert_eq!(update.content_type(), Some("application/json-patch+json"));
///
/// let upload = ApiRequest::form_data(vec![
///     FormField::file("driver"),
///     FormField::text("driver_file_name"),
/// ]);
/// // multipart boundaries are chosen by the transport
/// assert_eq!(upload.content_type(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiRequest {
    /// JSON request body.
    ///
    /// Sets Content-Type to `application/json`.
    Json(Schema),

    /// RFC 6902 JSON-Patch document (a list of patch operations).
    ///
    /// Sets Content-Type to `application/json-patch+json`.
    JsonPatch,

    /// Multipart form-data request.
    ///
    /// Sets Content-Type to `multipart/form-data` with a generated boundary.
    FormData {
        /// Fields in the multipart form.
        fields: Vec<FormField>,
    },
}

impl ApiRequest {
    /// Creates a JSON request with the given schema.
    pub fn json(schema: Schema) -> Self {
        Self::Json(schema)
    }

    /// Creates a JSON request with just a type name.
    pub fn json_type(type_name: impl Into<String>) -> Self {
        Self::Json(Schema::new(type_name))
    }

    /// Creates a JSON-Patch request.
    pub fn json_patch() -> Self {
        Self::JsonPatch
    }

    /// Creates a multipart form-data request.
    pub fn form_data(fields: Vec<FormField>) -> Self {
        Self::FormData { fields }
    }

    /// Returns the fixed content type for this request kind.
    ///
    /// Multipart requests return `None` because the boundary parameter is
    /// generated per request.
    pub fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json(_) => Some("application/json"),
            Self::JsonPatch => Some("application/json-patch+json"),
            Self::FormData { .. } => None,
        }
    }

    /// Returns the required form fields, or an empty iterator for non-form requests.
    pub fn required_fields(&self) -> impl Iterator<Item = &FormField> {
        let fields: &[FormField] = match self {
            Self::FormData { fields } => fields,
            _ => &[],
        };
        fields.iter().filter(|f| f.required)
    }
}

impl From<Schema> for ApiRequest {
    fn from(schema: Schema) -> Self {
        ApiRequest::Json(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_field_text_is_required_by_default() {
        let field = FormField::text("name");
        assert_eq!(field.name, "name");
        assert!(field.required);
        assert!(matches!(field.kind, FormFieldKind::Text));
        assert!(field.description.is_none());
        assert!(!field.is_file());
    }

    #[test]
    fn form_field_builder_chaining() {
        let field = FormField::text("description")
            .optional()
            .with_description("Free-form description");

        assert!(!field.required);
        assert_eq!(field.description.as_deref(), Some("Free-form description"));
    }

    #[test]
    fn form_field_file_accept_sets_mime_types() {
        let field = FormField::file_accept("driver", vec!["application/java-archive".into()]);
        assert!(field.is_file());
        if let FormFieldKind::File { accept } = field.kind {
            assert_eq!(accept, vec!["application/java-archive"]);
        } else {
            panic!("Expected File kind");
        }
    }

    #[test]
    fn required_fields_skips_optional_ones() {
        let request = ApiRequest::form_data(vec![
            FormField::file("driver"),
            FormField::text("catalog_name"),
            FormField::text("description").optional(),
        ]);

        let names: Vec<_> = request.required_fields().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["driver", "catalog_name"]);
    }

    #[test]
    fn required_fields_is_empty_for_json() {
        let request = ApiRequest::json_type("CreateSchemaBody");
        assert_eq!(request.required_fields().count(), 0);
    }

    #[test]
    fn content_types_per_kind() {
        assert_eq!(
            ApiRequest::json_type("X").content_type(),
            Some("application/json")
        );
        assert_eq!(
            ApiRequest::json_patch().content_type(),
            Some("application/json-patch+json")
        );
        assert_eq!(ApiRequest::form_data(vec![]).content_type(), None);
    }

    #[test]
    fn api_request_from_schema() {
        let request: ApiRequest = Schema::new("CreateEngineBody").into();
        assert!(matches!(request, ApiRequest::Json(s) if s.type_name == "CreateEngineBody"));
    }
}
