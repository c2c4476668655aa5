//! Bulk write unit submitted to the search engine.
//!
//! A `BulkUnit` is one network-level batched write: an ordered sequence of
//! index operations, each addressed at a destination index. It is built once
//! per record batch and consumed exactly once by submission.

use serde_json::{Map, Value};

/// One document operation inside a bulk unit.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkOperation {
    /// Destination index the document is written to.
    pub index: String,
    /// The normalized document body.
    pub document: Map<String, Value>,
}

/// An ordered batch of index operations, submitted as a single bulk call.
///
/// Order is preserved from insertion so that per-item failure positions in
/// the engine's response line up with the source records, and so logging is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BulkUnit {
    operations: Vec<BulkOperation>,
}

impl BulkUnit {
    /// Create a bulk unit from already-ordered operations.
    pub fn new(operations: Vec<BulkOperation>) -> Self {
        Self { operations }
    }

    /// The operations in insertion order.
    pub fn operations(&self) -> &[BulkOperation] {
        &self.operations
    }

    /// Number of operations in the unit.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether the unit carries no operations.
    ///
    /// An empty unit must never reach the network; callers short-circuit
    /// before submission.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(key: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key.to_string(), json!(true));
        map
    }

    #[test]
    fn test_preserves_insertion_order() {
        let unit = BulkUnit::new(vec![
            BulkOperation {
                index: "idx".to_string(),
                document: doc("first"),
            },
            BulkOperation {
                index: "idx".to_string(),
                document: doc("second"),
            },
        ]);

        assert_eq!(unit.len(), 2);
        assert!(unit.operations()[0].document.contains_key("first"));
        assert!(unit.operations()[1].document.contains_key("second"));
    }

    #[test]
    fn test_default_is_empty() {
        let unit = BulkUnit::default();
        assert!(unit.is_empty());
        assert_eq!(unit.len(), 0);
    }
}
