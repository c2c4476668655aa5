//! Orchestrator for one sink task instance.
//!
//! Drives a delivery cycle end to end: normalize each record, assemble the
//! bulk unit, short-circuit when nothing is indexable, submit, and interpret
//! the outcome. Batches are processed strictly sequentially; the host never
//! calls `process_batch` concurrently with itself on one instance.

use tokio::sync::broadcast;
use tracing::{debug, error, info, instrument, warn};

use crate::builder::BulkRequestBuilder;
use crate::errors::SubmitError;
use crate::normalizer::{Normalized, RecordNormalizer};
use crate::submitter::{BulkOutcome, BulkSubmitter};
use search_sink_shared::RawRecord;

/// Coordinates the normalizer, builder and submitter for one task instance.
pub struct SinkOrchestrator {
    normalizer: RecordNormalizer,
    submitter: BulkSubmitter,
    index: String,
    shutdown_tx: broadcast::Sender<()>,
}

impl SinkOrchestrator {
    /// Create an orchestrator writing to the given destination index.
    pub fn new(submitter: BulkSubmitter, index: impl Into<String>) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            normalizer: RecordNormalizer::new(),
            submitter,
            index: index.into(),
            shutdown_tx,
        }
    }

    /// Process one batch of records delivered by the host.
    ///
    /// Skipped records and item-level failures are reported through logs and
    /// do not fail the batch; only a terminal submission failure surfaces as
    /// an error, which the host treats as fatal for this task instance.
    #[instrument(skip(self, records), fields(record_count = records.len()))]
    pub async fn process_batch(&self, records: Vec<RawRecord>) -> Result<(), SubmitError> {
        if records.is_empty() {
            return Ok(());
        }

        let total = records.len();
        let mut builder = BulkRequestBuilder::new();

        for record in records {
            match self.normalizer.normalize(record) {
                Normalized::Document(doc) => builder.push(self.index.as_str(), doc),
                Normalized::Skip(reason) => {
                    debug!(reason = %reason, "Record skipped");
                }
            }
        }

        if builder.is_empty() {
            debug!(records = total, "No indexable documents in batch");
            return Ok(());
        }

        let unit = builder.build();
        let count = unit.len();
        let mut shutdown = self.shutdown_tx.subscribe();

        match self.submitter.submit(unit, &mut shutdown).await? {
            BulkOutcome::Success => {
                info!(count = count, index = %self.index, "Bulk save success");
            }
            BulkOutcome::PartialFailure(failures) => {
                for failure in &failures {
                    error!(
                        position = failure.position,
                        reason = %failure.reason,
                        "Failed to index document"
                    );
                }
                warn!(
                    failed = failures.len(),
                    total = count,
                    index = %self.index,
                    "Bulk request completed with item failures"
                );
            }
        }

        Ok(())
    }

    /// Periodic flush signal carrying the latest acknowledged offsets.
    ///
    /// Delivery already happens synchronously inside `process_batch`; this
    /// exists to satisfy the host contract and only logs.
    pub fn flush(&self, offsets: &[(String, i32, i64)]) {
        debug!(partitions = offsets.len(), "Flush signal received");
    }

    /// Signal shutdown to an in-flight submission cycle.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}
