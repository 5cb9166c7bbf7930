//! Client library for the IBM watsonx.data REST API.
//!
//! The crate turns an Options value into an HTTP request, sends it with an
//! authenticator and an optional retry policy, and decodes the JSON response
//! into the operation's result type.
//!
//! ## Features
//!
//! - **Descriptor-driven requests**: method, path, query, body encoding and
//!   response shape come from the `watsonx-definitions` endpoint table
//! - **One Options type per operation**: mandatory fields are validated
//!   before anything is sent
//! - **Authenticators**: IAM API key, bearer token, basic auth, none
//! - **External configuration**: credentials file or `WATSONX_DATA_*`
//!   environment variables
//! - **Deadlines and retries**: per-call [`CallContext`], exponential
//!   backoff on transient failures
//! - **Layered error handling**: see [`error`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use watsonx_data::auth::IamAuthenticator;
//! use watsonx_data::options::CreateBucketRegistrationOptions;
//! use watsonx_data::{ServiceOptions, WatsonxData};
//! use watsonx_definitions::watsonx_data::CreateBucketRegistrationBody;
//!
//! # async fn run() -> watsonx_data::error::WatsonxResult<()> {
//! let auth = Arc::new(IamAuthenticator::new("my-api-key")?);
//! let mut service = WatsonxData::new(ServiceOptions::with_authenticator(auth))?;
//! service.set_auth_instance_id("crn:v1:bluemix:public:lakehouse:us-south:a/1234::");
//!
//! let options = CreateBucketRegistrationOptions::new(CreateBucketRegistrationBody::new(
//!     "ibm_cos",
//!     "sampleCatalog",
//!     "COS bucket for customer data",
//!     "ibm",
//!     "iceberg",
//! ));
//! let response = service.create_bucket_registration(&options).await?;
//! if let Some(bucket) = response.result.and_then(|r| r.bucket_registration) {
//!     println!("registered {:?}", bucket.bucket_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod options;
pub mod patch;

mod context;
mod executor;
mod operation;
mod operations;
mod request;
mod response;
mod retry;
mod service;

pub use context::CallContext;
pub use operation::{CallOptions, Operation};
pub use request::{FormPart, FormValue, PreparedRequest, RequestBody, AUTH_INSTANCE_ID_HEADER};
pub use response::{DetailedResponse, RawResponse};
pub use retry::{is_retryable_status, RetryPolicy};
pub use service::{ServiceOptions, WatsonxData, USER_AGENT};
