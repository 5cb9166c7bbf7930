//! Request execution with tracing instrumentation.
//!
//! The [`Transport`] owns the HTTP client, the authenticator and the retry
//! policy. It sends a [`PreparedRequest`], retrying transient failures, and
//! returns the raw response; decoding is left to the caller.

use std::sync::Arc;

use tracing::{debug, instrument, warn, Span};

use crate::auth::Authenticator;
use crate::context::CallContext;
use crate::error::{ClientError, WatsonxError, WatsonxResult};
use crate::request::PreparedRequest;
use crate::response::RawResponse;
use crate::retry::{is_retryable_status, retry_after, RetryPolicy};

/// Sends prepared requests.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    pub client: reqwest::Client,
    pub authenticator: Arc<dyn Authenticator>,
    pub retry: Option<RetryPolicy>,
}

impl Transport {
    /// Sends `request`, honouring the retry policy and the context deadline.
    ///
    /// Any HTTP status is returned as a response; only transport, auth and
    /// deadline failures are errors here.
    #[instrument(
        name = "watsonx_request",
        skip(self, request, ctx),
        fields(
            operation = request.operation,
            http.method = %request.method,
            http.url = %request.url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn execute(
        &self,
        request: &PreparedRequest,
        ctx: CallContext,
    ) -> WatsonxResult<RawResponse> {
        let attempts = self.send_with_retries(request);
        let outcome = match ctx.deadline() {
            Some(deadline) => tokio::time::timeout_at(deadline, attempts)
                .await
                .unwrap_or_else(|_| Err(ClientError::DeadlineExceeded.into())),
            None => attempts.await,
        };

        match &outcome {
            Ok(raw) => {
                let span = Span::current();
                span.record("http.status_code", raw.status_code);
                let otel_status = match raw.status_code {
                    200..=299 => "OK",
                    500..=599 => "ERROR",
                    _ => "UNSET",
                };
                span.record("otel.status_code", otel_status);
                debug!(status = raw.status_code, "watsonx.data request completed");
            }
            Err(e) => {
                Span::current().record("otel.status_code", "ERROR");
                debug!(error = %e, "watsonx.data request failed");
            }
        }
        outcome
    }

    async fn send_with_retries(&self, request: &PreparedRequest) -> WatsonxResult<RawResponse> {
        let mut attempt = 0u32;
        loop {
            let outcome = self.send_once(request).await;

            let Some(policy) = self.retry.filter(|p| attempt < p.max_retries) else {
                return outcome;
            };
            let hinted = match &outcome {
                Ok(raw) if is_retryable_status(raw.status_code) => retry_after(&raw.headers),
                Err(WatsonxError::Client(e)) if e.is_retryable() => None,
                Err(WatsonxError::Auth(e)) if e.is_transient() => None,
                _ => return outcome,
            };

            let delay = policy.delay(attempt, hinted);
            attempt += 1;
            match &outcome {
                Ok(raw) => warn!(
                    operation = request.operation,
                    status = raw.status_code,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "retrying watsonx.data request"
                ),
                Err(e) => warn!(
                    operation = request.operation,
                    error = %e,
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "retrying watsonx.data request"
                ),
            }
            tokio::time::sleep(delay).await;
        }
    }

    async fn send_once(&self, request: &PreparedRequest) -> WatsonxResult<RawResponse> {
        let builder = request.to_reqwest(&self.client)?;
        let builder = self.authenticator.authenticate(builder).await?;

        let response = builder.send().await.map_err(ClientError::Request)?;
        let status_code = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(ClientError::Request)?;

        Ok(RawResponse {
            status_code,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::header::HeaderMap;
    use tracing_test::traced_test;
    use url::Url;
    use watsonx_define::RestMethod;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::auth::NoAuthAuthenticator;
    use crate::request::RequestBody;

    fn transport(retry: Option<RetryPolicy>) -> Transport {
        Transport {
            client: reqwest::Client::new(),
            authenticator: Arc::new(NoAuthAuthenticator),
            retry,
        }
    }

    fn ready(server: &MockServer) -> PreparedRequest {
        PreparedRequest {
            operation: "GetReady",
            method: RestMethod::Get,
            url: Url::parse(&format!("{}/ready", server.uri())).unwrap(),
            headers: HeaderMap::new(),
            body: RequestBody::None,
        }
    }

    async fn flaky_server(failures: u64, status: u16) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ready"))
            .respond_with(ResponseTemplate::new(status))
            .up_to_n_times(failures)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ready"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    #[traced_test]
    async fn retries_unavailable_then_succeeds() {
        let server = flaky_server(2, 503).await;
        let policy = RetryPolicy::new(3, Duration::from_millis(10));

        let raw = transport(Some(policy))
            .execute(&ready(&server), CallContext::new())
            .await
            .unwrap();

        assert_eq!(raw.status_code, 200);
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
        assert!(logs_contain("retrying watsonx.data request"));
    }

    #[tokio::test]
    async fn without_policy_a_single_attempt_is_made() {
        let server = flaky_server(1, 503).await;
        let raw = transport(None)
            .execute(&ready(&server), CallContext::new())
            .await
            .unwrap();
        assert_eq!(raw.status_code, 503);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn not_implemented_is_not_retried() {
        let server = flaky_server(1, 501).await;
        let policy = RetryPolicy::new(3, Duration::from_millis(10));
        let raw = transport(Some(policy))
            .execute(&ready(&server), CallContext::new())
            .await
            .unwrap();
        assert_eq!(raw.status_code, 501);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn retries_stop_at_the_limit() {
        let server = flaky_server(10, 429).await;
        let policy = RetryPolicy::new(2, Duration::from_millis(5));
        let raw = transport(Some(policy))
            .execute(&ready(&server), CallContext::new())
            .await
            .unwrap();
        assert_eq!(raw.status_code, 429);
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn deadline_cuts_backoff_short() {
        let server = flaky_server(10, 503).await;
        let policy = RetryPolicy::new(4, Duration::from_secs(5));
        let err = transport(Some(policy))
            .execute(
                &ready(&server),
                CallContext::with_timeout(Duration::from_millis(200)),
            )
            .await
            .unwrap_err();
        assert!(err.is_deadline_exceeded());
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    #[traced_test]
    async fn connection_failures_are_retried_up_to_the_limit() {
        let request = PreparedRequest {
            operation: "GetReady",
            method: RestMethod::Get,
            url: Url::parse("http://127.0.0.1:1/ready").unwrap(),
            headers: HeaderMap::new(),
            body: RequestBody::None,
        };
        let policy = RetryPolicy::new(2, Duration::from_millis(5));

        let err = transport(Some(policy))
            .execute(&request, CallContext::new())
            .await
            .unwrap_err();

        assert!(matches!(err, WatsonxError::Client(ClientError::Request(_))));
        assert!(err.response().is_none());
        logs_assert(|lines: &[&str]| {
            let retries = lines
                .iter()
                .filter(|line| line.contains("retrying watsonx.data request"))
                .count();
            match retries {
                2 => Ok(()),
                n => Err(format!("expected 2 retries, saw {n}")),
            }
        });
    }
}
