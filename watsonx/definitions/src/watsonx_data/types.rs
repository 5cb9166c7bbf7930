//! watsonx.data REST API types.
//!
//! Request bodies and result models for the watsonx.data service. Result
//! fields are optional throughout because the service omits whatever it has
//! nothing to say about; unknown keys are ignored on decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// =============================================================================
// Common Types
// =============================================================================

/// Success envelope returned next to most payloads.
///
/// ## Example
///
/// ```json
/// {
///   "message": "Successful message",
///   "message_code": "Success"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Machine-readable message code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_code: Option<String>,
}

/// A body that carries nothing but the success envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponseBody {
    /// The success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// One entry of a service error body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceErrorItem {
    /// Error code (e.g. `not_found`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Error description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Link to further documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

/// Error body returned with non-2xx statuses.
///
/// ## Example
///
/// ```json
/// {
///   "errors": [{"code": "not_found", "message": "bucket not found"}],
///   "trace": "f6a5c3e1"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    /// Individual errors.
    #[serde(default)]
    pub errors: Vec<ServiceErrorItem>,

    /// Request trace identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// RFC 6902 operation kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JsonPatchOp {
    /// Add a value at the target location.
    Add,
    /// Remove the value at the target location.
    Remove,
    /// Replace the value at the target location.
    Replace,
    /// Move the value at `from` to the target location.
    Move,
    /// Copy the value at `from` to the target location.
    Copy,
    /// Test that the value at the target location equals `value`.
    Test,
}

/// A single RFC 6902 patch operation.
///
/// ## Examples
///
/// ```
/// use watsonx_definitions::watsonx_data::{JsonPatchOp, JsonPatchOperation};
///
/// let op = JsonPatchOperation::replace("/description", "customer data");
/// let json = serde_json::to_value(&op).unwrap();
/// assert_eq!(json["op"], "replace");
/// assert_eq!(json["path"], "/description");
/// assert!(json.get("from").is_none());
///
/// let moved = JsonPatchOperation::move_from("/a", "/b");
/// assert_eq!(moved.op, JsonPatchOp::Move);
/// assert_eq!(moved.from.as_deref(), Some("/a"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonPatchOperation {
    /// The operation to perform.
    pub op: JsonPatchOp,

    /// JSON pointer to the target location.
    pub path: String,

    /// JSON pointer to the source location (`move` and `copy`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// The value to add, replace or test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl JsonPatchOperation {
    /// Creates an `add` operation.
    pub fn add(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::with_value(JsonPatchOp::Add, path, value)
    }

    /// Creates a `replace` operation.
    pub fn replace(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::with_value(JsonPatchOp::Replace, path, value)
    }

    /// Creates a `test` operation.
    pub fn test(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self::with_value(JsonPatchOp::Test, path, value)
    }

    /// Creates a `remove` operation.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: JsonPatchOp::Remove,
            path: path.into(),
            from: None,
            value: None,
        }
    }

    /// Creates a `move` operation.
    pub fn move_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_from(JsonPatchOp::Move, from, path)
    }

    /// Creates a `copy` operation.
    pub fn copy_from(from: impl Into<String>, path: impl Into<String>) -> Self {
        Self::with_from(JsonPatchOp::Copy, from, path)
    }

    fn with_value(
        op: JsonPatchOp,
        path: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        Self {
            op,
            path: path.into(),
            from: None,
            value: Some(value.into()),
        }
    }

    fn with_from(op: JsonPatchOp, from: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            op,
            path: path.into(),
            from: Some(from.into()),
            value: None,
        }
    }
}

/// Size and count of one node pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Node type (e.g. `starter`, `cache_optimized`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    /// Number of nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
}

// =============================================================================
// Bucket Registrations
// =============================================================================

/// Connection details for a bucket being registered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketDetails {
    /// Access key for the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    /// Actual bucket name.
    pub bucket_name: String,

    /// Object storage endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Secret key for the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
}

/// Catalog associated with a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCatalog {
    /// Catalog name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,

    /// Catalog tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_tags: Option<Vec<String>>,

    /// Catalog type (e.g. `iceberg`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
}

/// A registered bucket.
///
/// ## Example
///
/// ```json
/// {
///   "bucket_display_name": "sample-bucket-displayname",
///   "bucket_id": "samplebucket123",
///   "bucket_name": "sample-bucket",
///   "bucket_type": "ibm_cos",
///   "managed_by": "ibm",
///   "region": "us-south",
///   "state": "active"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRegistration {
    /// Actions the caller may perform on the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,

    /// Catalog associated with the bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalog: Option<BucketCatalog>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_display_name: Option<String>,

    /// Bucket identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_id: Option<String>,

    /// Actual bucket name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,

    /// Bucket type (e.g. `ibm_cos`, `amazon_s3`, `minio`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_type: Option<String>,

    /// Username of the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation time (epoch seconds, as a string).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Object storage endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Who manages the bucket (`ibm` or `customer`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,

    /// Region the bucket lives in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Mark bucket active or inactive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Request body for `CreateBucketRegistration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBucketRegistrationBody {
    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_details: Option<BucketDetails>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_display_name: Option<String>,

    /// Bucket type.
    pub bucket_type: String,

    /// Name of the catalog created for the bucket.
    pub catalog_name: String,

    /// Description.
    pub description: String,

    /// Who manages the bucket.
    pub managed_by: String,

    /// Region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Initial state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Table format of the associated catalog (e.g. `iceberg`).
    pub table_type: String,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Result of `ListBucketRegistrations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRegistrationCollection {
    /// Registered buckets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_registrations: Option<Vec<BucketRegistration>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of create/get/update bucket registration calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketRegistrationResult {
    /// The bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_registration: Option<BucketRegistration>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of `ListBucketObjects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketObjectCollection {
    /// Object keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<String>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

// =============================================================================
// Database Registrations
// =============================================================================

/// Connection details of a registered database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseDetails {
    /// Database name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,

    /// Host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Password.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    /// Whether TLS is used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,

    /// Table names to expose, comma separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<String>,

    /// Username.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Catalog associated with a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseCatalog {
    /// Catalog name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,

    /// Catalog tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_tags: Option<Vec<String>>,

    /// Catalog type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
}

/// A registered database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRegistration {
    /// Actions the caller may perform on the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,

    /// Catalog associated with the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalog: Option<DatabaseCatalog>,

    /// Username of the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,

    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_details: Option<DatabaseDetails>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_display_name: Option<String>,

    /// Database identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,

    /// Database type (e.g. `db2`, `postgresql`, `mysql`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_type: Option<String>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Request body for `CreateDatabaseRegistration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDatabaseRegistrationBody {
    /// Name of the catalog created for the database.
    pub catalog_name: String,

    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,

    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_details: Option<DatabaseDetails>,

    /// Display name.
    pub database_display_name: String,

    /// Database type.
    pub database_type: String,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Result of `ListDatabaseRegistrations`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRegistrationCollection {
    /// Registered databases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_registrations: Option<Vec<DatabaseRegistration>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of create/get/update database registration calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRegistrationResult {
    /// The database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_registration: Option<DatabaseRegistration>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

// =============================================================================
// Db2 / Netezza / Other Engines
// =============================================================================

/// Connection details of an external engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineDetails {
    /// External engine connection string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,

    /// Metastore host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metastore_host: Option<String>,
}

/// A registered Db2 engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Db2Engine {
    /// Actions the caller may perform on the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,

    /// Engine build version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,

    /// Username of the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation time (epoch milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<EngineDetails>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,

    /// Engine identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,

    /// Engine host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,

    /// Origin (`external`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Engine port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    /// Engine status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Engine type (`db2`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
}

/// A registered Netezza engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetezzaEngine {
    /// Actions the caller may perform on the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,

    /// Engine build version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,

    /// Username of the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation time (epoch milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<EngineDetails>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,

    /// Engine identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,

    /// Engine host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,

    /// Origin (`external`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Engine port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    /// Engine status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Engine type (`netezza`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
}

/// Request body shared by `CreateDb2Engine` and `CreateNetezzaEngine`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateExternalEngineBody {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<EngineDetails>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,

    /// Origin (`external`).
    pub origin: String,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Result of `ListDb2Engines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Db2EngineCollection {
    /// Db2 engines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db2_engines: Option<Vec<Db2Engine>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of create/update Db2 engine calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Db2EngineResult {
    /// The engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<Db2Engine>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of `ListNetezzaEngines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetezzaEngineCollection {
    /// Netezza engines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub netezza_engines: Option<Vec<NetezzaEngine>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of create/update Netezza engine calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetezzaEngineResult {
    /// The engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<NetezzaEngine>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Connection details of an engine type watsonx.data does not manage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherEngineDetails {
    /// External engine connection string.
    pub connection_string: String,

    /// Engine type (e.g. `spark`, `netezza`).
    pub engine_type: String,

    /// Metastore host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metastore_host: Option<String>,
}

/// A registered engine of another type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherEngine {
    /// Username of the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation time (epoch milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<OtherEngineDetails>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,

    /// Engine identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,

    /// Origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Engine status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Engine type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
}

/// Request body for `CreateOtherEngine`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOtherEngineBody {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Connection details.
    pub engine_details: OtherEngineDetails,

    /// Display name.
    pub engine_display_name: String,

    /// Origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Result of `ListOtherEngines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherEngineCollection {
    /// Engines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engines: Option<Vec<OtherEngine>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of `CreateOtherEngine`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherEngineResult {
    /// The engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<OtherEngine>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

// =============================================================================
// Presto Engines
// =============================================================================

/// Sizing of a Presto engine being created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrestoEngineDetails {
    /// API key for a remote engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// External connection string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,

    /// Coordinator pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<NodeDescription>,

    /// Predefined size (`starter`, `small`, `medium`, `large`, `custom`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_config: Option<String>,

    /// Worker pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<NodeDescription>,
}

/// A Presto engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrestoEngine {
    /// Actions the caller may perform on the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,

    /// Catalogs attached to the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalogs: Option<Vec<String>>,

    /// Engine build version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,

    /// Coordinator pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<NodeDescription>,

    /// Username of the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation time (epoch milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,

    /// Engine identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,

    /// Externally reachable host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_host_name: Option<String>,

    /// Group identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Internal host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,

    /// Origin (`native`, `external`, `discover`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Engine port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,

    /// Region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Predefined size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_config: Option<String>,

    /// Engine status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Numeric status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<i64>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Engine type (`presto`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,

    /// Presto version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Worker pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<NodeDescription>,
}

/// Request body for `CreatePrestoEngine`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePrestoEngineBody {
    /// Catalogs to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_catalogs: Option<Vec<String>>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sizing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<PrestoEngineDetails>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,

    /// Origin (`native`, `external`, `discover`).
    pub origin: String,

    /// Region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Engine type (`presto`).
    #[serde(rename = "type")]
    pub engine_type: String,

    /// Presto version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Result of `ListPrestoEngines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrestoEngineCollection {
    /// Presto engines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presto_engines: Option<Vec<PrestoEngine>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of create/get/update Presto engine calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrestoEngineResult {
    /// The engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<PrestoEngine>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Request body for `CreateEngineScale`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleEngineBody {
    /// Coordinator pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<NodeDescription>,

    /// Worker pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<NodeDescription>,
}

/// Request body for `RunExplainStatement`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainStatementBody {
    /// Output format (`text`, `graphviz`, `json`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// The SQL statement to explain.
    pub statement: String,

    /// Plan type (`logical`, `distributed`, `validate`, `io`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub plan_type: Option<String>,
}

/// Request body for `RunExplainAnalyzeStatement`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainAnalyzeStatementBody {
    /// The SQL statement to analyze.
    pub statement: String,

    /// Verbose output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

/// Result of the explain endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplainResult {
    /// The rendered plan.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

// =============================================================================
// Spark Engines
// =============================================================================

/// Connection details of a Spark engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkEngineDetails {
    /// API key for a remote engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// External connection string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,

    /// Analytics Engine instance identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,

    /// Who manages the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,
}

/// A Spark engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkEngine {
    /// Actions the caller may perform on the engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,

    /// Engine build version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_version: Option<String>,

    /// Username of the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation time (epoch milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<i64>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<SparkEngineDetails>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,

    /// Engine identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_id: Option<String>,

    /// Origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Engine status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Engine type (`spark`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
}

/// Request body for `CreateSparkEngine`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSparkEngineBody {
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Connection details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_details: Option<SparkEngineDetails>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_display_name: Option<String>,

    /// Origin (`native`, `external`).
    pub origin: String,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Result of `ListSparkEngines`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkEngineCollection {
    /// Spark engines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_engines: Option<Vec<SparkEngine>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of create/update Spark engine calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkEngineResult {
    /// The engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<SparkEngine>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// What to run and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkApplicationDetails {
    /// Application file path (e.g. `cos://bucket/app.py`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,

    /// Application arguments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<String>>,

    /// Spark configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf: Option<BTreeMap<String, String>>,

    /// Environment variables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,

    /// Application name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request body for `CreateSparkEngineApplication`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSparkEngineApplicationBody {
    /// What to run.
    pub application_details: SparkApplicationDetails,

    /// Job endpoint for a remote engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_endpoint: Option<String>,

    /// Service instance for a remote engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_instance_id: Option<String>,

    /// Engine kind (`iae`, `emr`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engine_type: Option<String>,
}

/// Summary of a submitted Spark application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkEngineApplication {
    /// Application identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    /// Auto termination time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_termination_time: Option<String>,

    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,

    /// End time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Failure time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_time: Option<String>,

    /// Finish time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<String>,

    /// Submission identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Identifier assigned by Spark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_application_id: Option<String>,

    /// Name assigned by Spark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_application_name: Option<String>,

    /// Start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Application state (`accepted`, `running`, `finished`, `failed`, `stopped`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Submission time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_time: Option<String>,

    /// Template identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

/// Result of `ListSparkEngineApplications`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkEngineApplicationCollection {
    /// Applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<SparkEngineApplication>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// A state transition detail of a Spark application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStateDetail {
    /// Detail code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Detail message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Detail type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub detail_type: Option<String>,
}

/// Full status of a Spark application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SparkEngineApplicationStatus {
    /// What was submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_details: Option<SparkApplicationDetails>,

    /// Application identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    /// Auto termination time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_termination_time: Option<String>,

    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<String>,

    /// Deploy mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_mode: Option<String>,

    /// End time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Failure time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_time: Option<String>,

    /// Finish time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<String>,

    /// Submission identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Driver return code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_code: Option<String>,

    /// Identifier assigned by Spark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_application_id: Option<String>,

    /// Name assigned by Spark.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_application_name: Option<String>,

    /// Start time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Application state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// State transition details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_details: Option<Vec<ApplicationStateDetail>>,

    /// Submission time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_time: Option<String>,

    /// Template identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

// =============================================================================
// Catalogs, Schemas, Tables, Columns, Snapshots
// =============================================================================

/// A catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Actions the caller may perform on the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<String>>,

    /// Buckets backing the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_buckets: Option<Vec<String>>,

    /// Databases backing the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_databases: Option<Vec<String>>,

    /// Engines the catalog is attached to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_engines: Option<Vec<String>>,

    /// Catalog name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_name: Option<String>,

    /// Catalog type (`iceberg`, `hive`, `delta`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,

    /// Username of the creator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,

    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Metastore host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    /// Catalog identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Last metadata sync time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sync_at: Option<String>,

    /// Who manages the catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_by: Option<String>,

    /// Metastore kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metastore: Option<String>,

    /// Metastore port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// Catalog status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Last sync description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_description: Option<String>,

    /// Tables that failed to sync.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_exception: Option<Vec<String>>,

    /// Sync status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_status: Option<String>,

    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Thrift URI of the metastore.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thrift_uri: Option<String>,
}

/// Result of catalog listing calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCollection {
    /// Catalogs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogs: Option<Vec<Catalog>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of single-catalog calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogResult {
    /// The catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Catalog>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Result of `ListSchemas`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCollection {
    /// Schema names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<Vec<String>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Request body for `CreateSchema`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSchemaBody {
    /// Bucket holding the schema data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,

    /// Path inside the bucket.
    pub custom_path: String,

    /// Schema name.
    pub schema_name: String,
}

/// Result of `ListTables`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCollection {
    /// Table names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<Vec<String>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// A table column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_name: Option<String>,

    /// Column comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Extra information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<String>,

    /// Length for character types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,

    /// Precision for decimal types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<String>,

    /// Scale for decimal types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,

    /// Data type (e.g. `varchar`, `bigint`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

/// A table and its columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,

    /// Table name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
}

/// Result of column listing and creation calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnCollection {
    /// Columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

/// Request body for `CreateColumns`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateColumnsBody {
    /// Columns to add.
    pub columns: Vec<Column>,
}

/// A table snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Commit time (epoch milliseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed_at: Option<String>,

    /// Operation that produced the snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    /// Snapshot identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,

    /// Snapshot summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<BTreeMap<String, String>>,
}

/// Result of `ListTableSnapshots`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotCollection {
    /// Snapshots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshots: Option<Vec<Snapshot>>,

    /// Success envelope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<SuccessResponse>,
}

// =============================================================================
// Request Body Constructors
// =============================================================================

impl CreateBucketRegistrationBody {
    /// Creates a body with the required fields set.
    ///
    /// ## Examples
    ///
    /// ```
    /// use watsonx_definitions::watsonx_data::CreateBucketRegistrationBody;
    ///
    /// let body = CreateBucketRegistrationBody {
    ///     region: Some("us-south".into()),
    ///     ..CreateBucketRegistrationBody::new(
    ///         "ibm_cos",
    ///         "sampleCatalog",
    ///         "COS bucket for customer data",
    ///         "ibm",
    ///         "iceberg",
    ///     )
    /// };
    /// assert_eq!(body.catalog_name, "sampleCatalog");
    /// ```
    pub fn new(
        bucket_type: impl Into<String>,
        catalog_name: impl Into<String>,
        description: impl Into<String>,
        managed_by: impl Into<String>,
        table_type: impl Into<String>,
    ) -> Self {
        Self {
            bucket_type: bucket_type.into(),
            catalog_name: catalog_name.into(),
            description: description.into(),
            managed_by: managed_by.into(),
            table_type: table_type.into(),
            ..Default::default()
        }
    }
}

impl CreateDatabaseRegistrationBody {
    /// Creates a body with the required fields set.
    pub fn new(
        catalog_name: impl Into<String>,
        database_display_name: impl Into<String>,
        database_type: impl Into<String>,
    ) -> Self {
        Self {
            catalog_name: catalog_name.into(),
            database_display_name: database_display_name.into(),
            database_type: database_type.into(),
            ..Default::default()
        }
    }
}

impl CreateExternalEngineBody {
    /// Creates a body for an engine of the given origin.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Default::default()
        }
    }
}

impl OtherEngineDetails {
    /// Creates connection details for an engine of `engine_type`.
    pub fn new(connection_string: impl Into<String>, engine_type: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            engine_type: engine_type.into(),
            metastore_host: None,
        }
    }
}

impl CreateOtherEngineBody {
    /// Creates a body with the required fields set.
    pub fn new(engine_display_name: impl Into<String>, engine_details: OtherEngineDetails) -> Self {
        Self {
            engine_display_name: engine_display_name.into(),
            engine_details,
            ..Default::default()
        }
    }
}

impl CreatePrestoEngineBody {
    /// Creates a body with the required fields set.
    pub fn new(origin: impl Into<String>, engine_type: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            engine_type: engine_type.into(),
            ..Default::default()
        }
    }
}

impl ExplainStatementBody {
    /// Creates a body explaining `statement` with server defaults.
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            ..Default::default()
        }
    }
}

impl ExplainAnalyzeStatementBody {
    /// Creates a body analyzing `statement`.
    pub fn new(statement: impl Into<String>) -> Self {
        Self {
            statement: statement.into(),
            verbose: None,
        }
    }
}

impl CreateSparkEngineBody {
    /// Creates a body for an engine of the given origin.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Default::default()
        }
    }
}

impl CreateSparkEngineApplicationBody {
    /// Creates a body submitting `application_details`.
    pub fn new(application_details: SparkApplicationDetails) -> Self {
        Self {
            application_details,
            ..Default::default()
        }
    }
}

impl CreateSchemaBody {
    pub fn new(custom_path: impl Into<String>, schema_name: impl Into<String>) -> Self {
        Self {
            bucket_name: None,
            custom_path: custom_path.into(),
            schema_name: schema_name.into(),
        }
    }
}

impl CreateColumnsBody {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}
