//! IBM Cloud IAM API-key authentication.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::RequestBuilder;
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;
use watsonx_define::AuthStrategy;

use super::{check_credential, Authenticator};
use crate::error::AuthError;

/// IAM endpoint used when no `AUTH_URL` is configured.
pub const DEFAULT_IAM_URL: &str = "https://iam.cloud.ibm.com";

const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const TOKEN_PATH: &str = "/identity/token";
const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(3600);
/// Upper bound on the lifetime a token response may claim.
const MAX_TOKEN_LIFETIME: Duration = Duration::from_secs(24 * 3600);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug)]
struct CachedToken {
    access_token: String,
    refresh_at: Instant,
}

/// Exchanges an API key for IAM access tokens.
///
/// Tokens are cached and reused until 80% of their lifetime has elapsed;
/// concurrent callers wait on a single refresh.
///
/// ## Examples
///
/// ```rust
/// use watsonx_data::auth::{Authenticator, IamAuthenticator};
/// use watsonx_define::AuthStrategy;
///
/// let iam = IamAuthenticator::new("my-api-key")
///     .unwrap()
///     .with_url("https://iam.test.cloud.ibm.com");
/// assert_eq!(iam.authentication_type(), AuthStrategy::Iam);
/// assert_eq!(iam.token_url(), "https://iam.test.cloud.ibm.com/identity/token");
/// ```
pub struct IamAuthenticator {
    apikey: String,
    url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Option<String>,
    client: reqwest::Client,
    token: Mutex<Option<CachedToken>>,
}

impl IamAuthenticator {
    /// Creates an IAM authenticator for `apikey`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the key is empty or malformed, or the token client
    /// cannot be built.
    pub fn new(apikey: impl Into<String>) -> Result<Self, AuthError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(AuthError::TokenRequest)?;
        let auth = Self {
            apikey: apikey.into(),
            url: DEFAULT_IAM_URL.to_string(),
            client_id: None,
            client_secret: None,
            scope: None,
            client,
            token: Mutex::new(None),
        };
        auth.validate()?;
        Ok(auth)
    }

    /// Uses a different IAM endpoint.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Authenticates the token request itself with a client id and secret.
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Requests tokens for the given scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Accepts invalid TLS certificates from the IAM endpoint.
    pub fn disable_ssl_verification(mut self) -> Result<Self, AuthError> {
        self.client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(AuthError::TokenRequest)?;
        Ok(self)
    }

    /// The full token endpoint URL.
    pub fn token_url(&self) -> String {
        let base = self.url.trim_end_matches('/');
        if base.ends_with(TOKEN_PATH) {
            base.to_string()
        } else {
            format!("{base}{TOKEN_PATH}")
        }
    }

    /// Returns a valid access token, fetching a new one when needed.
    pub async fn access_token(&self) -> Result<String, AuthError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.access_token.clone());
            }
        }

        let fresh = self.request_token().await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);
        Ok(access_token)
    }

    async fn request_token(&self) -> Result<CachedToken, AuthError> {
        let url = self.token_url();
        debug!(url = %url, "requesting IAM access token");

        let mut form = vec![("grant_type", GRANT_TYPE), ("apikey", self.apikey.as_str())];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }

        let mut request = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(&form);
        if let (Some(id), Some(secret)) = (&self.client_id, &self.client_secret) {
            request = request.basic_auth(id, Some(secret));
        }

        let response = request.send().await.map_err(AuthError::TokenRequest)?;
        let status = response.status();
        let body = response.bytes().await.map_err(AuthError::TokenRequest)?;

        if !status.is_success() {
            return Err(AuthError::TokenRejected {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let token: TokenResponse =
            serde_json::from_slice(&body).map_err(AuthError::InvalidTokenResponse)?;
        let lifetime = token
            .expires_in
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME);
        debug!(expires_in = lifetime.as_secs(), "IAM access token refreshed");

        Ok(CachedToken {
            access_token: token.access_token,
            refresh_at: Instant::now() + refresh_after(lifetime),
        })
    }
}

/// Time until a token with `lifetime` should be replaced: 80% of the
/// lifetime, which is capped at [`MAX_TOKEN_LIFETIME`].
fn refresh_after(lifetime: Duration) -> Duration {
    lifetime.min(MAX_TOKEN_LIFETIME) / 5 * 4
}

impl fmt::Debug for IamAuthenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IamAuthenticator")
            .field("url", &self.url)
            .field("apikey", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("scope", &self.scope)
            .finish()
    }
}

#[async_trait]
impl Authenticator for IamAuthenticator {
    fn authentication_type(&self) -> AuthStrategy {
        AuthStrategy::Iam
    }

    fn validate(&self) -> Result<(), AuthError> {
        check_credential("IAM", "apikey", &self.apikey)
    }

    async fn authenticate(&self, request: RequestBuilder) -> Result<RequestBuilder, AuthError> {
        let token = self.access_token().await?;
        Ok(request.bearer_auth(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn token_server(expires_in: u64, expected_calls: u64) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .and(body_string_contains(
                "grant_type=urn%3Aibm%3Aparams%3Aoauth%3Agrant-type%3Aapikey",
            ))
            .and(body_string_contains("apikey=test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "iam-token-1",
                "refresh_token": "unused",
                "token_type": "Bearer",
                "expires_in": expires_in,
                "expiration": 1_700_000_000u64
            })))
            .expect(expected_calls)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn token_is_fetched_once_and_cached() {
        let server = token_server(3600, 1).await;
        let iam = IamAuthenticator::new("test-key").unwrap().with_url(server.uri());

        assert_eq!(iam.access_token().await.unwrap(), "iam-token-1");
        assert_eq!(iam.access_token().await.unwrap(), "iam-token-1");
    }

    #[tokio::test]
    async fn expired_token_is_refreshed() {
        let server = token_server(0, 2).await;
        let iam = IamAuthenticator::new("test-key").unwrap().with_url(server.uri());

        iam.access_token().await.unwrap();
        iam.access_token().await.unwrap();
    }

    #[tokio::test]
    async fn huge_lifetime_is_capped() {
        let server = token_server(u64::MAX, 1).await;
        let iam = IamAuthenticator::new("test-key").unwrap().with_url(server.uri());

        assert_eq!(iam.access_token().await.unwrap(), "iam-token-1");
        assert_eq!(iam.access_token().await.unwrap(), "iam-token-1");
    }

    #[test]
    fn refresh_happens_at_eighty_percent() {
        assert_eq!(refresh_after(Duration::from_secs(3600)), Duration::from_secs(2880));
        assert_eq!(refresh_after(Duration::ZERO), Duration::ZERO);
        assert_eq!(
            refresh_after(Duration::from_secs(u64::MAX)),
            MAX_TOKEN_LIFETIME / 5 * 4
        );
    }

    #[tokio::test]
    async fn rejected_key_surfaces_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .respond_with(ResponseTemplate::new(400).set_body_string("BXNIM0415E"))
            .mount(&server)
            .await;

        let iam = IamAuthenticator::new("test-key").unwrap().with_url(server.uri());
        let err = iam.access_token().await.unwrap_err();
        assert!(matches!(err, AuthError::TokenRejected { status: 400, .. }));
    }

    #[test]
    fn token_url_is_not_duplicated() {
        let iam = IamAuthenticator::new("k")
            .unwrap()
            .with_url("https://iam.example.com/identity/token/");
        assert_eq!(iam.token_url(), "https://iam.example.com/identity/token");
    }

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(
            IamAuthenticator::new(""),
            Err(AuthError::MissingCredential { field: "apikey", .. })
        ));
    }
}
