//! The watsonx.data service handle.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use reqwest::header::HeaderMap;
use url::Url;
use watsonx_define::RestApi;
use watsonx_definitions::watsonx_data::{
    define_watsonx_data_api, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL,
};

use crate::auth::{authenticator_from_properties, Authenticator};
use crate::config::ServiceProperties;
use crate::context::CallContext;
use crate::error::{ConfigError, ValidationError, WatsonxResult};
use crate::executor::Transport;
use crate::operation::Operation;
use crate::request::{prepare, PreparedRequest, RequestDefaults};
use crate::response::{decode, DetailedResponse};
use crate::retry::RetryPolicy;

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("watsonx-data-rust/", env!("CARGO_PKG_VERSION"));

/// Construction options for [`WatsonxData`].
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    /// Name used to look up external configuration; `watsonx_data` when unset.
    pub service_name: Option<String>,
    /// Base URL; the default regional URL when unset.
    pub url: Option<String>,
    /// The authenticator; required unless it comes from external configuration.
    pub authenticator: Option<Arc<dyn Authenticator>>,
}

impl ServiceOptions {
    /// Options with the given authenticator and everything else defaulted.
    pub fn with_authenticator(authenticator: Arc<dyn Authenticator>) -> Self {
        Self {
            authenticator: Some(authenticator),
            ..Self::default()
        }
    }

    /// Sets the base URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the external configuration name.
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }
}

/// Client for the watsonx.data REST API.
///
/// A handle is cheap to clone. Clones share the authenticator (and with it
/// any cached IAM token) but each carries its own URL, headers and retry
/// settings.
///
/// ## Examples
///
/// ```rust
/// use std::sync::Arc;
/// use watsonx_data::auth::BearerTokenAuthenticator;
/// use watsonx_data::{ServiceOptions, WatsonxData};
///
/// let auth = Arc::new(BearerTokenAuthenticator::new("token").unwrap());
/// let mut service = WatsonxData::new(ServiceOptions::with_authenticator(auth)).unwrap();
/// assert!(service.service_url().starts_with("https://us-south."));
///
/// let url = WatsonxData::get_service_url_for_region("eu-de").unwrap();
/// service.set_service_url(url).unwrap();
/// assert!(service.service_url().contains("eu-de"));
/// ```
#[derive(Debug, Clone)]
pub struct WatsonxData {
    service_url: String,
    transport: Transport,
    default_headers: HeaderMap,
    auth_instance_id: Option<String>,
}

impl WatsonxData {
    /// Creates a handle from explicit options.
    ///
    /// ## Errors
    ///
    /// Returns a configuration error when no authenticator is given, the
    /// authenticator's own configuration is invalid, or the URL does not parse.
    pub fn new(options: ServiceOptions) -> WatsonxResult<Self> {
        let authenticator = options
            .authenticator
            .ok_or(ConfigError::MissingAuthenticator)?;
        authenticator
            .validate()
            .map_err(ConfigError::InvalidAuthenticator)?;

        let service_url = options
            .url
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        check_url(&service_url)?;

        Ok(Self {
            service_url,
            transport: Transport {
                client: build_client(false)?,
                authenticator,
                retry: None,
            },
            default_headers: HeaderMap::new(),
            auth_instance_id: None,
        })
    }

    /// Creates a handle from external configuration.
    ///
    /// Properties are looked up under `options.service_name` (default
    /// `watsonx_data`). An explicit URL or authenticator in `options` wins
    /// over the configured one.
    ///
    /// ## Errors
    ///
    /// Returns a configuration error when a required property is missing, the
    /// auth type is unsupported, or a property cannot be parsed.
    pub fn from_external_config(options: ServiceOptions) -> WatsonxResult<Self> {
        let service_name = options
            .service_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        let props = ServiceProperties::load(&service_name)?;
        Self::from_properties(&props, options)
    }

    /// Creates a handle from already loaded properties.
    pub fn from_properties(
        props: &ServiceProperties,
        options: ServiceOptions,
    ) -> WatsonxResult<Self> {
        let authenticator = match options.authenticator {
            Some(authenticator) => authenticator,
            None => authenticator_from_properties(props)?,
        };
        let url = options.url.or_else(|| props.url().map(str::to_string));

        let mut service = Self::new(ServiceOptions {
            service_name: Some(props.service_name().to_string()),
            url,
            authenticator: Some(authenticator),
        })?;

        if props.flag("DISABLE_SSL")? {
            service.disable_ssl_verification()?;
        }
        if props.flag("ENABLE_RETRIES")? {
            service.enable_retries(
                props.number("MAX_RETRIES")?.unwrap_or(0),
                props.seconds("RETRY_INTERVAL")?.unwrap_or(Duration::ZERO),
            );
        }
        if let Some(instance) = props.get("AUTH_INSTANCE_ID") {
            service.set_auth_instance_id(instance);
        }
        Ok(service)
    }

    /// The watsonx.data API definition every call is assembled from.
    pub fn api() -> &'static RestApi {
        static API: OnceLock<RestApi> = OnceLock::new();
        API.get_or_init(define_watsonx_data_api)
    }

    /// Returns the base URL registered for a region code such as `eu-de`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::RegionNotFound`] for an unknown region.
    pub fn get_service_url_for_region(region: &str) -> Result<String, ConfigError> {
        Self::api()
            .region_url(region)
            .map(str::to_string)
            .ok_or_else(|| ConfigError::RegionNotFound(region.to_string()))
    }

    /// The base URL calls are sent to.
    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// Replaces the base URL.
    ///
    /// An empty URL is accepted; calls then fail with
    /// [`ClientError::ServiceUrlMissing`](crate::error::ClientError::ServiceUrlMissing).
    pub fn set_service_url(&mut self, url: impl Into<String>) -> Result<(), ConfigError> {
        let url = url.into();
        check_url(&url)?;
        self.service_url = url;
        Ok(())
    }

    /// The authenticator shared by this handle and its clones.
    pub fn authenticator(&self) -> &Arc<dyn Authenticator> {
        &self.transport.authenticator
    }

    /// Retries transient failures up to `max_retries` times, waiting at most
    /// `max_interval` between attempts. Zero values select the defaults.
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.transport.retry = Some(RetryPolicy::new(max_retries, max_interval));
    }

    /// Makes every call a single attempt.
    pub fn disable_retries(&mut self) {
        self.transport.retry = None;
    }

    /// The active retry policy, if retries are enabled.
    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.transport.retry
    }

    /// Headers sent with every call, below per-call headers.
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    /// The handle's default headers.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// `AuthInstanceId` sent when an Options value does not set one.
    pub fn set_auth_instance_id(&mut self, instance_id: impl Into<String>) {
        self.auth_instance_id = Some(instance_id.into());
    }

    /// The default `AuthInstanceId`, if set.
    pub fn auth_instance_id(&self) -> Option<&str> {
        self.auth_instance_id.as_deref()
    }

    /// Accepts invalid TLS certificates from the service.
    pub fn disable_ssl_verification(&mut self) -> Result<(), ConfigError> {
        self.transport.client = build_client(true)?;
        Ok(())
    }

    /// Assembles the request for `options` without sending it.
    pub fn prepare<O: Operation>(&self, options: &O) -> WatsonxResult<PreparedRequest> {
        prepare(
            Self::api(),
            RequestDefaults {
                service_url: &self.service_url,
                headers: &self.default_headers,
                auth_instance_id: self.auth_instance_id.as_deref(),
            },
            options,
        )
    }

    /// Runs any operation.
    pub async fn call<O: Operation>(
        &self,
        options: &O,
    ) -> WatsonxResult<DetailedResponse<O::Output>> {
        self.call_with_context(options, CallContext::new()).await
    }

    /// Runs any operation within `ctx`.
    pub async fn call_with_context<O: Operation>(
        &self,
        options: &O,
        ctx: CallContext,
    ) -> WatsonxResult<DetailedResponse<O::Output>> {
        let request = self.prepare(options)?;
        let endpoint = Self::api()
            .endpoint(O::ENDPOINT_ID)
            .ok_or(ValidationError::UnknownEndpoint(O::ENDPOINT_ID))?;

        let raw = self.transport.execute(&request, ctx).await?;
        decode(raw, &endpoint.response)
    }
}

fn check_url(url: &str) -> Result<(), ConfigError> {
    if !url.is_empty() {
        Url::parse(url)?;
    }
    Ok(())
}

fn build_client(accept_invalid_certs: bool) -> Result<reqwest::Client, ConfigError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .danger_accept_invalid_certs(accept_invalid_certs)
        .build()
        .map_err(ConfigError::HttpClient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::NoAuthAuthenticator;
    use crate::error::{AuthError, WatsonxError};
    use watsonx_define::AuthStrategy;

    fn service() -> WatsonxData {
        WatsonxData::new(ServiceOptions::with_authenticator(Arc::new(NoAuthAuthenticator)))
            .unwrap()
    }

    fn props(pairs: &[(&str, &str)]) -> ServiceProperties {
        ServiceProperties::from_pairs(
            "watsonx_data",
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn missing_authenticator_is_config_error() {
        let err = WatsonxData::new(ServiceOptions::default()).unwrap_err();
        assert!(matches!(err, WatsonxError::Config(ConfigError::MissingAuthenticator)));
        assert!(err.to_string().contains("no authenticator could be determined"));
    }

    /// An authenticator whose credential went missing after construction.
    #[derive(Debug)]
    struct Misconfigured;

    #[async_trait::async_trait]
    impl Authenticator for Misconfigured {
        fn authentication_type(&self) -> AuthStrategy {
            AuthStrategy::BearerToken
        }

        fn validate(&self) -> Result<(), AuthError> {
            Err(AuthError::MissingCredential {
                authenticator: "Bearer",
                field: "token",
            })
        }

        async fn authenticate(
            &self,
            request: reqwest::RequestBuilder,
        ) -> Result<reqwest::RequestBuilder, AuthError> {
            Ok(request)
        }
    }

    #[test]
    fn invalid_authenticator_is_config_error() {
        let options = ServiceOptions::with_authenticator(Arc::new(Misconfigured));
        let err = WatsonxData::new(options).unwrap_err();
        assert!(matches!(
            err,
            WatsonxError::Config(ConfigError::InvalidAuthenticator(
                AuthError::MissingCredential { field: "token", .. }
            ))
        ));
    }

    #[test]
    fn defaults_to_regional_url() {
        assert_eq!(service().service_url(), DEFAULT_SERVICE_URL);
    }

    #[test]
    fn rejects_malformed_url() {
        let err = WatsonxData::new(
            ServiceOptions::with_authenticator(Arc::new(NoAuthAuthenticator)).url("not a url"),
        )
        .unwrap_err();
        assert!(matches!(err, WatsonxError::Config(ConfigError::InvalidUrl(_))));

        let mut service = service();
        assert!(service.set_service_url("::bad::").is_err());
        assert_eq!(service.service_url(), DEFAULT_SERVICE_URL);
    }

    #[test]
    fn empty_url_is_accepted_by_setter() {
        let mut service = service();
        service.set_service_url("").unwrap();
        assert_eq!(service.service_url(), "");
    }

    #[test]
    fn clones_have_independent_urls() {
        let mut original = service();
        let mut clone = original.clone();
        clone.set_service_url("https://clone.example.com").unwrap();
        original.set_service_url("https://original.example.com").unwrap();
        assert_eq!(clone.service_url(), "https://clone.example.com");
        assert_eq!(original.service_url(), "https://original.example.com");
        assert!(Arc::ptr_eq(original.authenticator(), clone.authenticator()));
    }

    #[test]
    fn region_lookup() {
        assert_eq!(
            WatsonxData::get_service_url_for_region("us-south").unwrap(),
            DEFAULT_SERVICE_URL
        );
        let err = WatsonxData::get_service_url_for_region("INVALID_REGION").unwrap_err();
        assert!(err.to_string().contains("region not found"));
    }

    #[test]
    fn retry_toggles() {
        let mut service = service();
        assert!(service.retry_policy().is_none());
        service.enable_retries(0, Duration::ZERO);
        assert_eq!(service.retry_policy(), Some(RetryPolicy::default()));
        service.enable_retries(2, Duration::from_secs(5));
        assert_eq!(service.retry_policy().unwrap().max_retries, 2);
        service.disable_retries();
        assert!(service.retry_policy().is_none());
    }

    #[test]
    fn from_properties_applies_optional_settings() {
        let service = WatsonxData::from_properties(
            &props(&[
                ("WATSONX_DATA_AUTH_TYPE", "noauth"),
                ("WATSONX_DATA_URL", "https://props.example.com/api/v2"),
                ("WATSONX_DATA_ENABLE_RETRIES", "true"),
                ("WATSONX_DATA_MAX_RETRIES", "2"),
                ("WATSONX_DATA_RETRY_INTERVAL", "3"),
                ("WATSONX_DATA_AUTH_INSTANCE_ID", "crn:v1:instance"),
            ]),
            ServiceOptions::default(),
        )
        .unwrap();

        assert_eq!(service.service_url(), "https://props.example.com/api/v2");
        assert_eq!(
            service.retry_policy(),
            Some(RetryPolicy::new(2, Duration::from_secs(3)))
        );
        assert_eq!(service.auth_instance_id(), Some("crn:v1:instance"));
    }

    #[test]
    fn explicit_url_beats_properties() {
        let service = WatsonxData::from_properties(
            &props(&[
                ("WATSONX_DATA_AUTH_TYPE", "noauth"),
                ("WATSONX_DATA_URL", "https://props.example.com"),
            ]),
            ServiceOptions::default().url("https://explicit.example.com"),
        )
        .unwrap();
        assert_eq!(service.service_url(), "https://explicit.example.com");
    }

    #[test]
    fn from_properties_reports_missing_apikey() {
        let err = WatsonxData::from_properties(&props(&[]), ServiceOptions::default()).unwrap_err();
        assert!(err.to_string().contains("WATSONX_DATA_APIKEY"));
    }

    #[test]
    fn user_agent_names_the_crate() {
        assert!(USER_AGENT.starts_with("watsonx-data-rust/"));
    }
}
