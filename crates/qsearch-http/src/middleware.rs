//! Retry middleware with exponential backoff and jitter

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{error::HttpError, Result};

/// Lower bound of the jitter factor applied to each backoff delay
pub const JITTER_MIN: f64 = 0.8;
/// Upper bound of the jitter factor applied to each backoff delay
pub const JITTER_MAX: f64 = 1.2;

/// Retry policy shared read-only by every backend call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Upper bound for a single delay
    pub max_delay: Duration,
    /// Randomize each delay within `[JITTER_MIN, JITTER_MAX]`
    pub jitter: bool,
    /// Response statuses treated as transient
    pub retry_on: Vec<u16>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 6,
            base_delay: Duration::from_secs(3),
            max_delay: Duration::from_secs(300),
            jitter: true,
            // Service unavailable, and the backend's "not ready" unprocessable answer
            retry_on: vec![503, 422],
        }
    }
}

impl RetryPolicy {
    /// Whether the error is one of the transient conditions
    pub fn is_retryable(&self, error: &HttpError) -> bool {
        error
            .status()
            .is_some_and(|status| self.retry_on.contains(&status.as_u16()))
    }

    /// Un-jittered delay after the given failed attempt (1-based)
    pub fn base_backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(31);
        let delay = self.base_delay.saturating_mul(1u32 << exponent);
        delay.min(self.max_delay)
    }

    /// Delay to wait after the given failed attempt (1-based)
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let delay = self.base_backoff(attempt);
        if !self.jitter {
            return delay;
        }

        let factor = rand::thread_rng().gen_range(JITTER_MIN..=JITTER_MAX);
        delay.mul_f64(factor).min(self.max_delay)
    }

    /// Upper bound on the total time spent sleeping for one call
    pub fn worst_case_total_delay(&self) -> Duration {
        let factor = if self.jitter { JITTER_MAX } else { 1.0 };
        (1..self.max_attempts.max(1))
            .map(|attempt| self.base_backoff(attempt).mul_f64(factor).min(self.max_delay))
            .sum()
    }
}

/// Retry middleware for backend operations
#[derive(Debug, Clone)]
pub struct RetryMiddleware {
    policy: RetryPolicy,
}

impl RetryMiddleware {
    /// Create new retry middleware
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    /// Execute operation with retry logic.
    ///
    /// Transient failures are retried until `max_attempts` attempts were made,
    /// after which the last failure is returned. Any other failure is returned
    /// immediately. Backoff state lives on this call's stack only.
    pub async fn execute<F, Fut, T>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!("Request succeeded on attempt {attempt}");
                    }
                    return Ok(result);
                }
                Err(e) if !self.policy.is_retryable(&e) => {
                    debug!("Non-retryable error: {e}");
                    return Err(e);
                }
                Err(e) if attempt >= max_attempts => {
                    warn!("Giving up after {attempt} attempts: {e}");
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.policy.backoff_delay(attempt);
                    warn!(
                        "Request failed (attempt {}/{}), retrying in {:?}: {}",
                        attempt, max_attempts, delay, e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
