//! # Search Sink Connector
//!
//! Host-framework adapter for the search sink. This crate is thin glue: it
//! declares the configuration keys, validates them at startup, and exposes
//! the connector/task lifecycle the host framework drives. The actual
//! batch-to-bulk-request work lives in `search-sink-pipeline`.

pub mod config;
pub mod connector;
pub mod task;

pub use config::{ConfigError, ConnectorConfig};
pub use connector::SearchSinkConnector;
pub use task::SearchSinkTask;

use thiserror::Error;

use search_sink_pipeline::SubmitError;

/// Errors surfaced to the host framework.
#[derive(Error, Debug)]
pub enum ConnectError {
    /// Configuration or client-construction failure, detected at startup
    /// before any batch is processed.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Terminal submission failure escalated from the pipeline; stops data
    /// flow for this task instance until external remediation.
    #[error("Submit error: {0}")]
    SubmitError(#[from] SubmitError),
}

impl ConnectError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

impl From<ConfigError> for ConnectError {
    fn from(err: ConfigError) -> Self {
        Self::ConfigError(err.to_string())
    }
}
