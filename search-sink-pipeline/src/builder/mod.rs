//! Bulk request assembly.
//!
//! Accumulates normalized documents into one bulk unit addressed at a
//! destination index. A builder serves exactly one batch: `build` consumes
//! it, and the next batch starts from a fresh builder.

use serde_json::{Map, Value};

use search_sink_shared::{BulkOperation, BulkUnit};

/// Incremental builder for one bulk unit.
///
/// Input order is preserved so the engine's per-item response positions line
/// up with the source records and logging stays deterministic.
#[derive(Debug, Default)]
pub struct BulkRequestBuilder {
    operations: Vec<BulkOperation>,
}

impl BulkRequestBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one document addressed at the given index.
    pub fn push(&mut self, index: impl Into<String>, document: Map<String, Value>) {
        self.operations.push(BulkOperation {
            index: index.into(),
            document,
        });
    }

    /// Number of accumulated operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether nothing was accumulated. Callers use this to skip the
    /// submission entirely instead of sending an empty bulk call.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Consume the builder and produce the bulk unit.
    pub fn build(self) -> BulkUnit {
        BulkUnit::new(self.operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(key: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key.to_string(), json!(1));
        map
    }

    #[test]
    fn test_build_preserves_order() {
        let mut builder = BulkRequestBuilder::new();
        builder.push("idx", doc("first"));
        builder.push("idx", doc("second"));
        builder.push("other", doc("third"));

        let unit = builder.build();
        let ops = unit.operations();

        assert_eq!(ops.len(), 3);
        assert!(ops[0].document.contains_key("first"));
        assert!(ops[1].document.contains_key("second"));
        assert!(ops[2].document.contains_key("third"));
        assert_eq!(ops[2].index, "other");
    }

    #[test]
    fn test_empty_builder() {
        let builder = BulkRequestBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.len(), 0);
        assert!(builder.build().is_empty());
    }
}
