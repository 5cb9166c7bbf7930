//! Layered error types for the watsonx.data client.
//!
//! Each layer of a call fails in its own enum; [`WatsonxError`] aggregates
//! them so callers can use `?` throughout and still match on the layer that
//! failed.

mod auth_error;
mod client_error;
mod config_error;
mod response_error;
mod validation_error;
mod watsonx_error;

pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use response_error::ResponseError;
pub use validation_error::ValidationError;
pub use watsonx_error::{WatsonxError, WatsonxResult};
