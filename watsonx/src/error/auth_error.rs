//! Authentication errors.

use thiserror::Error;

/// Errors raised by authenticators.
///
/// Configuration problems (an empty API key, a password wrapped in quotes)
/// are reported when the authenticator is built; token problems are
/// reported by the call that needed the token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A credential the authenticator needs is empty.
    #[error("{authenticator} authenticator requires a non-empty {field}")]
    MissingCredential {
        /// The authenticator kind.
        authenticator: &'static str,
        /// The missing credential.
        field: &'static str,
    },

    /// A credential contains characters that indicate a templating mistake.
    #[error("The {field} property is invalid: it must not contain braces or surrounding quotes")]
    InvalidCredential {
        /// The offending credential.
        field: &'static str,
    },

    /// The token request could not be sent or its body not read.
    #[error("IAM token request failed: {0}")]
    TokenRequest(#[source] reqwest::Error),

    /// The token service answered with a non-success status.
    #[error("IAM token request rejected with HTTP {status}: {message}")]
    TokenRejected {
        /// HTTP status returned by the token service.
        status: u16,
        /// Error text returned by the token service.
        message: String,
    },

    /// The token service answered with something that is not a token.
    #[error("Invalid IAM token response: {0}")]
    InvalidTokenResponse(#[source] serde_json::Error),
}

impl AuthError {
    /// Returns `true` if retrying the call might obtain a token.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::TokenRequest(e) => e.is_timeout() || e.is_connect(),
            Self::TokenRejected { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_display() {
        let err = AuthError::MissingCredential {
            authenticator: "IAM",
            field: "apikey",
        };
        assert_eq!(
            err.to_string(),
            "IAM authenticator requires a non-empty apikey"
        );
    }

    #[test]
    fn test_token_rejected_5xx_is_transient() {
        let err = AuthError::TokenRejected {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert!(err.is_transient());
    }

    #[test]
    fn test_token_rejected_400_is_not_transient() {
        let err = AuthError::TokenRejected {
            status: 400,
            message: "BXNIM0415E: Provided API key could not be found".to_string(),
        };
        assert!(!err.is_transient());
    }

    #[test]
    fn test_invalid_credential_not_transient() {
        let err = AuthError::InvalidCredential { field: "password" };
        assert!(!err.is_transient());
        assert!(err.to_string().contains("password"));
    }
}
