//! Bounded polling against external state
//!
//! A generic "wait for a predicate over external state, with timeout"
//! primitive. The probe is any async closure that reports `Some(value)` once
//! the condition holds; nothing here knows about any particular driver's
//! visibility vocabulary.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::debug;

use crate::error::{E2eError, E2eResult};

/// Shared wait budget for all polling operations in a scenario.
#[derive(Debug, Clone, Copy)]
pub struct WaitBudget {
    /// Total time a single wait may take before it fails.
    pub timeout: Duration,
    /// Pause between probe attempts.
    pub poll_interval: Duration,
}

impl Default for WaitBudget {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// Poll `probe` until it yields a value or the budget expires.
///
/// Probe errors propagate immediately; a probe that keeps answering `None`
/// past the deadline turns into [`E2eError::WaitTimeout`] naming `what`.
/// No retries happen beyond this loop.
pub async fn wait_until<T, F, Fut>(budget: WaitBudget, what: &str, mut probe: F) -> E2eResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = E2eResult<Option<T>>>,
{
    let deadline = Instant::now() + budget.timeout;
    let mut attempts = 0usize;

    loop {
        attempts += 1;
        if let Some(value) = probe().await? {
            debug!("condition '{}' met after {} attempt(s)", what, attempts);
            return Ok(value);
        }
        if Instant::now() >= deadline {
            return Err(E2eError::WaitTimeout {
                what: what.to_string(),
                timeout: budget.timeout,
            });
        }
        sleep(budget.poll_interval).await;
    }
}
