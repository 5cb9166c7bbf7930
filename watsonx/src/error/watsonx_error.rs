//! Top-level error type.

use super::{AuthError, ClientError, ConfigError, ResponseError, ValidationError};
use crate::response::RawResponse;
use thiserror::Error;

/// Result alias used by every fallible client operation.
pub type WatsonxResult<T> = Result<T, WatsonxError>;

/// Top-level error type for all client operations.
///
/// This enum aggregates all error categories, enabling unified error handling
/// while preserving the ability to match on specific error types when needed.
///
/// ## Examples
///
/// ```rust
/// use watsonx_data::error::{ClientError, WatsonxError};
///
/// fn describe(err: &WatsonxError) -> &'static str {
///     match err {
///         WatsonxError::Config(_) => "misconfigured",
///         WatsonxError::Validation(_) => "invalid options",
///         WatsonxError::Auth(_) => "authentication",
///         WatsonxError::Client(_) => "dispatch",
///         WatsonxError::Response(_) => "service",
///     }
/// }
///
/// let err: WatsonxError = ClientError::DeadlineExceeded.into();
/// assert_eq!(describe(&err), "dispatch");
/// assert!(err.is_deadline_exceeded());
/// ```
#[derive(Debug, Error)]
pub enum WatsonxError {
    /// Construction and configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Options validation errors (no request was sent).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authenticator errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Dispatch errors (URL, transport, deadline).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Errors that carry a received response.
    #[error(transparent)]
    Response(#[from] ResponseError),
}

impl WatsonxError {
    /// Returns `true` if the call context's deadline elapsed.
    pub fn is_deadline_exceeded(&self) -> bool {
        matches!(self, Self::Client(ClientError::DeadlineExceeded))
    }

    /// Returns `true` if the Options value was rejected before dispatch.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns the received response, if the error carries one.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Self::Response(e) => Some(e.response()),
            _ => None,
        }
    }

    /// Returns the HTTP status of the received response, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.status_code()),
            Self::Client(ClientError::Request(e)) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
