//! Search sink client trait definition.
//!
//! This module defines the abstract interface for bulk writes to the search
//! engine, allowing different backend implementations (OpenSearch, mock, etc.).

use async_trait::async_trait;

use crate::errors::SearchError;
use search_sink_shared::BulkUnit;

/// A single document rejected by the search engine inside an otherwise
/// accepted bulk call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// Position of the failed operation within the submitted bulk unit.
    pub position: usize,
    /// Rejection reason reported by the engine.
    pub reason: String,
}

/// Outcome of one accepted bulk call.
///
/// The engine answered the request; `item_failures` lists the documents it
/// rejected individually. An empty list means every operation was applied.
#[derive(Debug, Clone, Default)]
pub struct BulkReport {
    /// Per-document rejections, in bulk unit order.
    pub item_failures: Vec<ItemFailure>,
}

impl BulkReport {
    /// A report with no item failures.
    pub fn success() -> Self {
        Self::default()
    }

    /// Whether any document in the batch was rejected.
    pub fn has_failures(&self) -> bool {
        !self.item_failures.is_empty()
    }
}

/// Abstract interface for bulk writes to the search engine.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync`; one client handle is shared
/// across every batch a task instance processes.
///
/// # Error Handling
///
/// `Err(SearchError)` means the call itself failed and nothing is known
/// about individual documents. `Ok(BulkReport)` means the engine answered;
/// per-document rejections are carried inside the report.
#[async_trait]
pub trait SearchSinkClient: Send + Sync {
    /// Submit one bulk unit to the search engine.
    ///
    /// # Arguments
    ///
    /// * `unit` - The non-empty bulk unit to write
    ///
    /// # Returns
    ///
    /// * `Ok(BulkReport)` - The engine accepted the request; the report
    ///   lists any per-document rejections
    /// * `Err(SearchError)` - The call failed at the transport level
    async fn submit_bulk(&self, unit: &BulkUnit) -> Result<BulkReport, SearchError>;

    /// Check if the search engine is healthy and reachable.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - If the search engine is healthy
    /// * `Ok(false)` - If the search engine is unhealthy
    /// * `Err(SearchError)` - If the health check fails to execute
    async fn health_check(&self) -> Result<bool, SearchError>;
}
