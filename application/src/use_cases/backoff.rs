//! Rate-limit backoff for reasoning-service calls.
//!
//! Every call site in the pipeline wraps its gateway call in
//! [`invoke_with_backoff`]: an explicit retry loop that only reacts to
//! rate-limit signals. Any other failure, and any failure after the retry
//! budget is spent, propagates to the caller unchanged.

use crate::ports::reasoning_gateway::GatewayError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Retry policy for rate-limited service calls.
///
/// The delay doubles on each successive retry, with no jitter - retries
/// are already serialized behind the pipeline's single thread of control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffPolicy {
    /// Retries after the initial attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(2000),
        }
    }
}

impl BackoffPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }
}

/// Execute a gateway operation, retrying rate-limited failures with
/// exponential backoff.
///
/// The operation is a resilience-decorated unit of work: this function
/// never inspects what the unit does, only whether its error carries a
/// rate-limit signal.
pub async fn invoke_with_backoff<F, Fut, T>(
    policy: &BackoffPolicy,
    mut operation: F,
) -> Result<T, GatewayError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GatewayError>>,
{
    let mut retries_left = policy.max_retries;
    let mut delay = policy.base_delay;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_rate_limited() && retries_left > 0 => {
                warn!(
                    "Quota hit: {}. Retrying in {:?}... ({} retries left)",
                    e, delay, retries_left
                );
                sleep(delay).await;
                retries_left -= 1;
                delay = delay.saturating_mul(2);
            }
            Err(e) => return Err(e),
        }
    }
}
