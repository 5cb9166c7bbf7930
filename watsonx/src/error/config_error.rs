//! Service construction and configuration errors.

use std::path::PathBuf;

use thiserror::Error;

use super::AuthError;

/// Errors raised while building or reconfiguring a service handle.
///
/// These surface from constructors and setters, never from a call in flight.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Neither the options nor the external configuration named an authenticator.
    #[error("no authenticator could be determined")]
    MissingAuthenticator,

    /// The authenticator rejected its own configuration.
    #[error("Invalid authenticator configuration: {0}")]
    InvalidAuthenticator(#[source] AuthError),

    /// A property the chosen authenticator needs is absent.
    #[error("Missing required property {key} for service {service}")]
    MissingProperty {
        /// The service whose configuration was consulted.
        service: String,
        /// The full property key (e.g. `WATSONX_DATA_APIKEY`).
        key: String,
    },

    /// A property is present but cannot be interpreted.
    #[error("Invalid value for {key}: {value}")]
    InvalidProperty {
        /// The full property key.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// The configured authentication type is not one this client knows.
    #[error("Unsupported authentication type: {0}")]
    UnsupportedAuthType(String),

    /// The credentials file could not be read.
    #[error("Failed to read credentials file {}: {message}", path.display())]
    CredentialsFile {
        /// The file that was read.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// A region code has no registered URL.
    #[error("region not found: {0}")]
    RegionNotFound(String),

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl ConfigError {
    /// Creates a missing property error.
    pub fn missing_property(service: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingProperty {
            service: service.into(),
            key: key.into(),
        }
    }

    /// Creates an invalid property error.
    pub fn invalid_property(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidProperty {
            key: key.into(),
            value: value.into(),
        }
    }
}
