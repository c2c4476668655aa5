//! Record payload normalization.
//!
//! Converts a heterogeneous record payload into a uniform key-value document
//! for indexing, or signals a skip. Every unsupported input degrades to a
//! logged skip; the rest of the batch keeps moving.

use std::fmt;

use serde_json::{Map, Value};
use tracing::{error, warn};

use search_sink_shared::{RawRecord, RecordValue};

/// Why a record was left out of the bulk unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Absent payload, signaling deletion upstream; never indexed.
    Tombstone,
    /// Text payload that does not parse into a JSON object.
    InvalidJson,
    /// Payload type this sink cannot convert; carries the type name.
    UnsupportedType(&'static str),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Tombstone => write!(f, "tombstone"),
            SkipReason::InvalidJson => write!(f, "invalid JSON"),
            SkipReason::UnsupportedType(t) => write!(f, "unsupported type {}", t),
        }
    }
}

/// Outcome of normalizing one record.
#[derive(Debug)]
pub enum Normalized {
    /// A document ready for the bulk unit.
    Document(Map<String, Value>),
    /// The record is left out; the batch continues without it.
    Skip(SkipReason),
}

/// Converts record payloads into documents.
///
/// There is no error path at this layer. One malformed record must never
/// block the rest of the batch, so every failure mode maps to a `Skip`.
#[derive(Debug, Default)]
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize one record, consuming it.
    ///
    /// Structured mappings are taken as-is; text payloads are parsed as a
    /// JSON object; everything else is skipped with the reason logged.
    pub fn normalize(&self, record: RawRecord) -> Normalized {
        let key = record.partition_key();

        let value = match record.value {
            Some(v) => v,
            None => {
                warn!(record = %key, "Skipping tombstone record");
                return Normalized::Skip(SkipReason::Tombstone);
            }
        };

        match value {
            RecordValue::Map(map) => Normalized::Document(map),
            RecordValue::Text(text) => match serde_json::from_str::<Value>(&text) {
                Ok(Value::Object(map)) => Normalized::Document(map),
                Ok(_) | Err(_) => {
                    error!(record = %key, value = %text, "Invalid JSON");
                    Normalized::Skip(SkipReason::InvalidJson)
                }
            },
            RecordValue::Bytes(bytes) => {
                warn!(
                    record = %key,
                    payload_type = "bytes",
                    len = bytes.len(),
                    "Skipping record with unsupported payload type"
                );
                Normalized::Skip(SkipReason::UnsupportedType("bytes"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: RecordValue) -> RawRecord {
        RawRecord::new("topic", 0, 0, value)
    }

    #[test]
    fn test_tombstone_is_skipped() {
        let normalizer = RecordNormalizer::new();
        let result = normalizer.normalize(RawRecord::tombstone("topic", 0, 0));
        assert!(matches!(result, Normalized::Skip(SkipReason::Tombstone)));
    }

    #[test]
    fn test_map_payload_used_directly() {
        let normalizer = RecordNormalizer::new();
        let mut map = Map::new();
        map.insert("a".to_string(), json!(1));

        let result = normalizer.normalize(record(RecordValue::Map(map.clone())));
        match result {
            Normalized::Document(doc) => assert_eq!(doc, map),
            other => panic!("expected document, got {:?}", other),
        }
    }

    #[test]
    fn test_text_payload_parsed_as_object() {
        let normalizer = RecordNormalizer::new();
        let result = normalizer.normalize(record(RecordValue::Text(
            r#"{"a": 1, "nested": {"b": [2, 3]}}"#.to_string(),
        )));

        match result {
            Normalized::Document(doc) => {
                assert_eq!(doc["a"], json!(1));
                assert_eq!(doc["nested"]["b"], json!([2, 3]));
            }
            other => panic!("expected document, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_skipped() {
        let normalizer = RecordNormalizer::new();
        let result = normalizer.normalize(record(RecordValue::Text("not-json".to_string())));
        assert!(matches!(result, Normalized::Skip(SkipReason::InvalidJson)));
    }

    #[test]
    fn test_non_object_json_is_skipped() {
        let normalizer = RecordNormalizer::new();
        for text in ["[1, 2, 3]", "42", "\"plain\"", "null"] {
            let result = normalizer.normalize(record(RecordValue::Text(text.to_string())));
            assert!(
                matches!(result, Normalized::Skip(SkipReason::InvalidJson)),
                "expected skip for {}",
                text
            );
        }
    }

    #[test]
    fn test_bytes_payload_is_skipped() {
        let normalizer = RecordNormalizer::new();
        let result = normalizer.normalize(record(RecordValue::Bytes(vec![0x01, 0x02])));
        assert!(matches!(
            result,
            Normalized::Skip(SkipReason::UnsupportedType("bytes"))
        ));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let normalizer = RecordNormalizer::new();
        let mut map = Map::new();
        map.insert("a".to_string(), json!({"b": 1}));

        let first = normalizer.normalize(record(RecordValue::Map(map.clone())));
        let second = normalizer.normalize(record(RecordValue::Map(map)));

        match (first, second) {
            (Normalized::Document(a), Normalized::Document(b)) => assert_eq!(a, b),
            other => panic!("expected two documents, got {:?}", other),
        }
    }
}
