//! Errors carrying a received HTTP response.

use thiserror::Error;

use crate::response::RawResponse;

/// Errors raised after a response arrived.
///
/// Both variants keep the raw response so callers can inspect the status,
/// headers and body that caused the failure.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// The service answered with a non-success status.
    #[error("HTTP {}: {message}", response.status_code)]
    Service {
        /// Message extracted from the error body, or the status reason.
        message: String,
        /// The response as received.
        response: Box<RawResponse>,
    },

    /// A success response whose body could not be decoded.
    #[error("An error occurred while processing the HTTP response: {source}")]
    Processing {
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
        /// The response as received.
        response: Box<RawResponse>,
    },
}

impl ResponseError {
    /// Returns the response attached to this error.
    pub fn response(&self) -> &RawResponse {
        match self {
            Self::Service { response, .. } | Self::Processing { response, .. } => response,
        }
    }

    /// Returns the HTTP status of the attached response.
    pub fn status_code(&self) -> u16 {
        self.response().status_code
    }
}
