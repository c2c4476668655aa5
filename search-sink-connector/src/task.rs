//! Sink task: the per-partition-range worker driven by the host framework.
//!
//! Owns the search engine client handle for its whole lifetime and processes
//! delivered batches strictly sequentially. Everything here is adaptation to
//! the host contract; the pipeline crate does the work.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::config::ConnectorConfig;
use crate::connector::VERSION;
use crate::ConnectError;
use search_sink_pipeline::{BulkSubmitter, SinkOrchestrator};
use search_sink_repository::OpenSearchSinkClient;
use search_sink_shared::RawRecord;

/// One sink task instance.
pub struct SearchSinkTask {
    orchestrator: SinkOrchestrator,
}

impl SearchSinkTask {
    /// Start the task: parse configuration and construct the client handle.
    ///
    /// Any failure here surfaces at startup, before the first batch, as a
    /// configuration error distinct from runtime submission errors.
    pub fn start(props: &HashMap<String, String>) -> Result<Self, ConnectError> {
        let config = ConnectorConfig::from_props(props)?;

        let client = OpenSearchSinkClient::new(&config.connection).map_err(|e| {
            ConnectError::config(format!("Failed to create search engine client: {}", e))
        })?;

        let submitter = BulkSubmitter::new(Arc::new(client));
        let orchestrator = SinkOrchestrator::new(submitter, config.index.as_str());

        info!(version = VERSION, index = %config.index, "Search sink task started");

        Ok(Self { orchestrator })
    }

    /// Deliver one batch of records. Called once per delivery cycle; the
    /// host never calls this concurrently with itself on one instance.
    pub async fn put(&self, records: Vec<RawRecord>) -> Result<(), ConnectError> {
        self.orchestrator
            .process_batch(records)
            .await
            .map_err(ConnectError::from)
    }

    /// Periodic flush signal carrying the latest acknowledged offsets.
    pub fn flush(&self, offsets: &[(String, i32, i64)]) {
        self.orchestrator.flush(offsets);
    }

    /// Stop the task. Interrupts an in-flight backoff sleep and releases the
    /// client handle.
    pub fn stop(self) {
        self.orchestrator.shutdown();
        info!("Stopped search sink task");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ES_INDEX, ES_PORT};

    fn props(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_start_with_defaults() {
        let task = SearchSinkTask::start(&HashMap::new());
        assert!(task.is_ok());
    }

    #[test]
    fn test_start_rejects_bad_config() {
        let result = SearchSinkTask::start(&props(&[(ES_PORT, "not-a-port")]));
        assert!(matches!(result, Err(ConnectError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_empty_batch_is_a_no_op() {
        let task = SearchSinkTask::start(&props(&[(ES_INDEX, "orders")])).unwrap();

        // No client call happens for an empty batch, so this succeeds with
        // no search engine running.
        task.put(Vec::new()).await.unwrap();
        task.flush(&[]);
        task.stop();
    }
}
