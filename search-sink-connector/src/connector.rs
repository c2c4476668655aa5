//! Connector-level lifecycle adapter.
//!
//! Runs once per connector instance, before any task starts: validates the
//! user-supplied configuration and fans the properties out to the task
//! instances the host framework decides to run.

use std::collections::HashMap;

use tracing::info;

use crate::config::{ConfigError, ConnectorConfig};

/// Connector version reported to the host framework.
pub const VERSION: &str = "1.0";

/// Connector-level adapter.
///
/// Holds no indexing logic; its job is to reject bad configuration before a
/// task ever runs and to hand each task its settings.
pub struct SearchSinkConnector {
    props: HashMap<String, String>,
}

impl SearchSinkConnector {
    /// Validate the supplied properties and keep them for task fan-out.
    ///
    /// A `ConfigError` here prevents the connector from starting at all.
    pub fn start(props: HashMap<String, String>) -> Result<Self, ConfigError> {
        ConnectorConfig::from_props(&props)?;
        info!("Starting search sink connector");
        Ok(Self { props })
    }

    /// Connector version string.
    pub fn version(&self) -> &'static str {
        VERSION
    }

    /// Produce one property map per task. Every task gets the same settings;
    /// per-task divergence would go here if it were ever needed.
    pub fn task_configs(&self, max_tasks: usize) -> Vec<HashMap<String, String>> {
        (0..max_tasks).map(|_| self.props.clone()).collect()
    }

    /// Stop the connector.
    pub fn stop(&self) {
        info!("Stopping search sink connector");
    }
}
