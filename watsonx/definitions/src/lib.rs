//! watsonx.data API Definitions
//!
//! This crate contains the watsonx.data REST API definition built from the
//! primitives in `watsonx-define`, together with every request body and
//! result model the service exchanges.
//!
//! ## Examples
//!
//! ```
//! use watsonx_definitions::watsonx_data::define_watsonx_data_api;
//!
//! let api = define_watsonx_data_api();
//! assert_eq!(api.name, "WatsonxData");
//! assert!(api.endpoint("CreateBucketRegistration").is_some());
//! ```

pub mod prelude;
pub mod watsonx_data;

pub use watsonx_data::define_watsonx_data_api;
