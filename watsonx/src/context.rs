//! Per-call deadlines.

use std::time::Duration;

use tokio::time::Instant;

/// Bounds a single call in time.
///
/// The deadline covers the whole call: token acquisition, every retry
/// attempt and every backoff sleep. When it elapses the call fails with
/// [`ClientError::DeadlineExceeded`](crate::error::ClientError::DeadlineExceeded).
///
/// ## Examples
///
/// ```rust
/// use std::time::Duration;
/// use watsonx_data::CallContext;
///
/// let unbounded = CallContext::new();
/// assert!(unbounded.deadline().is_none());
///
/// let bounded = CallContext::with_timeout(Duration::from_secs(5));
/// assert!(bounded.remaining().unwrap() <= Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallContext {
    deadline: Option<Instant>,
}

impl CallContext {
    /// A context without a deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// A context with an absolute deadline.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// The deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline (zero once it has passed).
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(Instant::now()))
    }
}
