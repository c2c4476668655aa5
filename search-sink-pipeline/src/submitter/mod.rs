//! Bulk submission with bounded retry.
//!
//! Drives one submission cycle against the search engine: attempt, classify
//! the result, back off linearly on transport failure, escalate when the
//! attempt budget is spent. Item-level rejections terminate the cycle
//! immediately; retrying them would resubmit the sibling documents that
//! already succeeded.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::warn;

use crate::errors::SubmitError;
use search_sink_repository::{ItemFailure, SearchSinkClient};
use search_sink_shared::BulkUnit;

/// Retry policy for bulk submission.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of submission attempts.
    pub max_attempts: u32,
    /// Base backoff; the sleep after failed attempt `n` is `backoff_unit * n`.
    pub backoff_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_unit: Duration::from_millis(1000),
        }
    }
}

/// Result of a submission cycle that reached the engine.
#[derive(Debug)]
pub enum BulkOutcome {
    /// Every document in the unit was applied.
    Success,
    /// The engine accepted the request but rejected individual documents.
    /// Reported per document, never retried.
    PartialFailure(Vec<ItemFailure>),
}

/// Submits bulk units with bounded retry and linear backoff.
///
/// The caller blocks on `submit` until the cycle terminates; there is one
/// outstanding submission per task instance at a time.
pub struct BulkSubmitter {
    client: Arc<dyn SearchSinkClient>,
    policy: RetryPolicy,
}

impl BulkSubmitter {
    /// Create a submitter with the default retry policy.
    pub fn new(client: Arc<dyn SearchSinkClient>) -> Self {
        Self {
            client,
            policy: RetryPolicy::default(),
        }
    }

    /// Create a submitter with a custom retry policy.
    pub fn with_policy(client: Arc<dyn SearchSinkClient>, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Submit one bulk unit, consuming it.
    ///
    /// Transport failures are retried with linear backoff
    /// (`backoff_unit * attempt_number`) until the attempt budget is spent,
    /// then escalated as `SubmitError::RetriesExhausted` wrapping the last
    /// error. A shutdown signal observed during the backoff sleep aborts the
    /// cycle with `SubmitError::Interrupted` instead; shutdown means the
    /// process is going away, not that the sink is unavailable.
    pub async fn submit(
        &self,
        unit: BulkUnit,
        shutdown: &mut broadcast::Receiver<()>,
    ) -> Result<BulkOutcome, SubmitError> {
        let mut attempt: u32 = 1;

        loop {
            match self.client.submit_bulk(&unit).await {
                Ok(report) => {
                    return if report.has_failures() {
                        Ok(BulkOutcome::PartialFailure(report.item_failures))
                    } else {
                        Ok(BulkOutcome::Success)
                    };
                }
                Err(e) => {
                    if attempt >= self.policy.max_attempts {
                        return Err(SubmitError::RetriesExhausted {
                            attempts: attempt,
                            source: e,
                        });
                    }

                    let delay = self.policy.backoff_unit * attempt;
                    warn!(
                        attempt = attempt,
                        max_attempts = self.policy.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Bulk submission failed, retrying"
                    );

                    tokio::select! {
                        _ = tokio::time::sleep(delay) => {}
                        _ = shutdown.recv() => return Err(SubmitError::Interrupted),
                    }

                    attempt += 1;
                }
            }
        }
    }
}
