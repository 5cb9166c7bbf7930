//! HTTP client and dispatch errors.

use thiserror::Error;

/// Errors from the dispatch layer.
///
/// These cover everything between a valid Options value and a response:
/// an unusable service URL, header encoding, transport failures and the
/// caller's deadline.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service URL was set to the empty string.
    #[error("service URL is missing")]
    ServiceUrlMissing,

    /// The call context's deadline elapsed before the call completed.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// A header name or value cannot be sent.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The header name.
        name: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ClientError {
    /// Returns `true` if this error is retryable.
    ///
    /// Only transport failures qualify; a request that never left the client
    /// or that ran out of time is not retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            _ => false,
        }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}
