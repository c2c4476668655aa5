//! Error types for the search sink pipeline.

use search_sink_repository::SearchError;
use thiserror::Error;

/// Terminal failure of one submission cycle.
///
/// Either outcome stops data flow for the task instance; the host decides
/// whether to crash the task or retry the whole batch later.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// Every attempt failed at the transport level; wraps the last error.
    #[error("Bulk submission failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// The error from the final attempt.
        #[source]
        source: SearchError,
    },

    /// A shutdown signal arrived during the backoff sleep. The process is
    /// going away, which is not the same condition as the sink being
    /// unavailable; callers must not fold this into retry exhaustion.
    #[error("Bulk submission interrupted by shutdown")]
    Interrupted,
}
