//! Convenient re-exports for working with the watsonx.data definition.
//!
//! ## Examples
//!
//! ```
//! use watsonx_definitions::prelude::*;
//!
//! let api = define_watsonx_data_api();
//! assert_eq!(api.base_url, DEFAULT_SERVICE_URL);
//!
//! let patch = JsonPatchOperation::replace("/description", "updated");
//! assert_eq!(patch.op, JsonPatchOp::Replace);
//! ```

pub use crate::watsonx_data::{
    DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL, define_watsonx_data_api,
};

pub use crate::watsonx_data::{
    BucketRegistration, BucketRegistrationCollection, BucketRegistrationResult, Catalog,
    CatalogCollection, CatalogResult, Column, Db2Engine, DatabaseRegistration, JsonPatchOp,
    JsonPatchOperation, NetezzaEngine, OtherEngine, PrestoEngine, SparkEngine,
    SparkEngineApplicationStatus, SuccessResponse, SuccessResponseBody, Table,
};
