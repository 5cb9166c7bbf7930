//! Authenticators.
//!
//! An [`Authenticator`] decorates an outgoing request with credentials. The
//! service handle holds one behind an `Arc`, so clones of a handle share it
//! (and, for IAM, share its token cache).
//!
//! | Kind | Type | Header |
//! |------|------|--------|
//! | `noAuth` | [`NoAuthAuthenticator`] | none |
//! | `basic` | [`BasicAuthenticator`] | `Authorization: Basic ...` |
//! | `bearerToken` | [`BearerTokenAuthenticator`] | `Authorization: Bearer <token>` |
//! | `iam` | [`IamAuthenticator`] | `Authorization: Bearer <IAM access token>` |

mod iam;
mod static_credentials;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use watsonx_define::AuthStrategy;

use crate::config::ServiceProperties;
use crate::error::{AuthError, ConfigError, WatsonxResult};

pub use iam::{IamAuthenticator, DEFAULT_IAM_URL};
pub use static_credentials::{BasicAuthenticator, BearerTokenAuthenticator, NoAuthAuthenticator};

/// Attaches credentials to outgoing requests.
#[async_trait]
pub trait Authenticator: Send + Sync + fmt::Debug {
    /// The kind of authentication this authenticator performs.
    fn authentication_type(&self) -> AuthStrategy;

    /// Checks the authenticator's own configuration.
    fn validate(&self) -> Result<(), AuthError>;

    /// Adds credentials to `request`.
    ///
    /// May suspend to obtain or refresh a token.
    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, AuthError>;
}

/// Rejects empty credentials and credentials that look like unexpanded
/// templates (`{apikey}`) or copy-paste accidents (`"secret"`).
pub(crate) fn check_credential(
    authenticator: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), AuthError> {
    if value.is_empty() {
        return Err(AuthError::MissingCredential {
            authenticator,
            field,
        });
    }
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if value.contains('{') || value.contains('}') || quoted {
        return Err(AuthError::InvalidCredential { field });
    }
    Ok(())
}

/// Builds the authenticator named by external configuration.
///
/// `AUTH_TYPE` selects the kind (IAM when absent); each kind then reads the
/// properties it needs:
///
/// - `iam`: `APIKEY`, optional `AUTH_URL`, `CLIENT_ID`, `CLIENT_SECRET`,
///   `SCOPE`, `AUTH_DISABLE_SSL`
/// - `basic`: `USERNAME`, `PASSWORD`
/// - `bearerToken`: `BEARER_TOKEN`
/// - `noAuth`: nothing
pub fn authenticator_from_properties(
    props: &ServiceProperties,
) -> WatsonxResult<Arc<dyn Authenticator>> {
    let invalid = ConfigError::InvalidAuthenticator;
    let authenticator: Arc<dyn Authenticator> = match props.auth_type()? {
        AuthStrategy::NoAuth => Arc::new(NoAuthAuthenticator),
        AuthStrategy::Basic => Arc::new(
            BasicAuthenticator::new(props.require("USERNAME")?, props.require("PASSWORD")?)
                .map_err(invalid)?,
        ),
        AuthStrategy::BearerToken => Arc::new(
            BearerTokenAuthenticator::new(props.require("BEARER_TOKEN")?).map_err(invalid)?,
        ),
        AuthStrategy::Iam => {
            let mut iam = IamAuthenticator::new(props.require("APIKEY")?).map_err(invalid)?;
            if let Some(url) = props.get("AUTH_URL") {
                iam = iam.with_url(url);
            }
            if let (Some(id), Some(secret)) = (props.get("CLIENT_ID"), props.get("CLIENT_SECRET")) {
                iam = iam.with_client_credentials(id, secret);
            }
            if let Some(scope) = props.get("SCOPE") {
                iam = iam.with_scope(scope);
            }
            if props.flag("AUTH_DISABLE_SSL")? {
                iam = iam.disable_ssl_verification().map_err(invalid)?;
            }
            Arc::new(iam)
        }
    };
    Ok(authenticator)
}
