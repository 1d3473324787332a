//! Reconnection backoff policy, used to decide whether and when to retry establishing a
//! secure channel after a connection attempt fails.

use std::time::Duration;

/// Generates a sequence of exponentially increasing delays, up to a configured limit on
/// both delay and retry count.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    current: Duration,
    max: Duration,
    retries_left: Option<u32>,
}

impl ExponentialBackoff {
    /// Create a new backoff generator.
    ///
    /// `initial` is the delay before the first retry, `max` caps the delay so it never
    /// grows without bound, and `retries` is the number of retries to allow before
    /// [`ExponentialBackoff::next`] starts returning `None`, or `None` for unlimited retries.
    pub fn new(initial: Duration, max: Duration, retries: Option<u32>) -> Self {
        Self {
            current: initial,
            max,
            retries_left: retries,
        }
    }

    /// Return the next delay to wait before retrying, or `None` if no more retries should
    /// be attempted.
    pub fn next(&mut self) -> Option<Duration> {
        if let Some(retries_left) = &mut self.retries_left {
            if *retries_left == 0 {
                return None;
            }
            *retries_left -= 1;
        }

        let delay = self.current;
        self.current = (self.current * 2).min(self.max);
        Some(delay)
    }
}

/// Governs how a session reconnects to its server after the secure channel is lost.
#[derive(Debug, Clone)]
pub struct SessionRetryPolicy {
    initial_delay: Duration,
    max_delay: Duration,
    retry_limit: Option<u32>,
}

impl SessionRetryPolicy {
    /// Default number of times to retry a lost connection before giving up, if the client
    /// configuration doesn't say otherwise.
    pub const DEFAULT_RETRY_LIMIT: u32 = 10;

    /// Create a new retry policy.
    ///
    /// `retry_limit` of `None` means retry forever.
    pub fn new(max_delay: Duration, retry_limit: Option<u32>, initial_delay: Duration) -> Self {
        Self {
            initial_delay,
            max_delay,
            retry_limit,
        }
    }

    /// Create a fresh backoff generator for a single reconnection sequence.
    pub fn new_backoff(&self) -> ExponentialBackoff {
        ExponentialBackoff::new(self.initial_delay, self.max_delay, self.retry_limit)
    }
}

impl Default for SessionRetryPolicy {
    fn default() -> Self {
        Self::new(
            Duration::from_secs(30),
            Some(Self::DEFAULT_RETRY_LIMIT),
            Duration::from_secs(1),
        )
    }
}
