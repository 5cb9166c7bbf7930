//! Authenticators whose credentials never change.

use std::fmt;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use watsonx_define::AuthStrategy;

use super::{check_credential, Authenticator};
use crate::error::AuthError;

/// Sends requests without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthAuthenticator;

#[async_trait]
impl Authenticator for NoAuthAuthenticator {
    fn authentication_type(&self) -> AuthStrategy {
        AuthStrategy::NoAuth
    }

    fn validate(&self) -> Result<(), AuthError> {
        Ok(())
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, AuthError> {
        Ok(request)
    }
}

/// HTTP Basic authentication.
#[derive(Clone)]
pub struct BasicAuthenticator {
    username: String,
    password: String,
}

impl BasicAuthenticator {
    /// Creates a Basic authenticator.
    ///
    /// ## Errors
    ///
    /// Returns an error if either credential is empty, contains braces or is
    /// wrapped in quotes.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let auth = Self {
            username: username.into(),
            password: password.into(),
        };
        auth.validate()?;
        Ok(auth)
    }

    /// The configured username.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for BasicAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicAuthenticator")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BasicAuthenticator {
    fn authentication_type(&self) -> AuthStrategy {
        AuthStrategy::Basic
    }

    fn validate(&self) -> Result<(), AuthError> {
        check_credential("Basic", "username", &self.username)?;
        check_credential("Basic", "password", &self.password)
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, AuthError> {
        Ok(request.basic_auth(&self.username, Some(&self.password)))
    }
}

/// A caller-supplied bearer token.
#[derive(Clone)]
pub struct BearerTokenAuthenticator {
    token: String,
}

impl BearerTokenAuthenticator {
    /// Creates a bearer-token authenticator.
    ///
    /// ## Errors
    ///
    /// Returns an error if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, AuthError> {
        let auth = Self {
            token: token.into(),
        };
        auth.validate()?;
        Ok(auth)
    }
}

impl fmt::Debug for BearerTokenAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenAuthenticator")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Authenticator for BearerTokenAuthenticator {
    fn authentication_type(&self) -> AuthStrategy {
        AuthStrategy::BearerToken
    }

    fn validate(&self) -> Result<(), AuthError> {
        if self.token.is_empty() {
            return Err(AuthError::MissingCredential {
                authenticator: "BearerToken",
                field: "bearer token",
            });
        }
        Ok(())
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, AuthError> {
        Ok(request.bearer_auth(&self.token))
    }
}
