//! Retry policy for transient failures.
//!
//! A call is retried when the transport fails or the service answers 429 or
//! a 5xx other than 501. Delays grow exponentially from one second (or the
//! interval cap, if smaller) and never exceed the cap. A `Retry-After`
//! header given in seconds replaces the computed delay, still capped.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};

/// How often and how patiently a handle retries.
///
/// ## Examples
///
/// ```rust
/// use std::time::Duration;
/// use watsonx_data::RetryPolicy;
///
/// let policy = RetryPolicy::new(3, Duration::from_secs(4));
/// assert_eq!(policy.backoff(0), Duration::from_secs(1));
/// assert_eq!(policy.backoff(1), Duration::from_secs(2));
/// assert_eq!(policy.backoff(5), Duration::from_secs(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Upper bound on any single delay.
    pub max_interval: Duration,
}

impl RetryPolicy {
    /// Retries used when `0` is requested.
    pub const DEFAULT_MAX_RETRIES: u32 = 4;
    /// Interval cap used when a zero interval is requested.
    pub const DEFAULT_MAX_INTERVAL: Duration = Duration::from_secs(30);

    const INITIAL_DELAY: Duration = Duration::from_secs(1);

    /// Creates a policy; zero values select the defaults.
    pub fn new(max_retries: u32, max_interval: Duration) -> Self {
        Self {
            max_retries: if max_retries == 0 {
                Self::DEFAULT_MAX_RETRIES
            } else {
                max_retries
            },
            max_interval: if max_interval.is_zero() {
                Self::DEFAULT_MAX_INTERVAL
            } else {
                max_interval
            },
        }
    }

    /// Delay before retry number `attempt + 1`.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let initial = Self::INITIAL_DELAY.min(self.max_interval);
        let factor = 2u32.saturating_pow(attempt.min(16));
        initial.saturating_mul(factor).min(self.max_interval)
    }

    /// Delay before the next retry, preferring the server's `Retry-After`.
    pub fn delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        match retry_after {
            Some(d) => d.min(self.max_interval),
            None => self.backoff(attempt),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(0, Duration::ZERO)
    }
}

/// Returns `true` if a response with this status should be retried.
pub fn is_retryable_status(status: u16) -> bool {
    status == 429 || ((500..600).contains(&status) && status != 501)
}

/// Reads a `Retry-After` header given in whole seconds.
pub(crate) fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}
