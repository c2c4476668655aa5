//! Record types handed to the sink by the host framework.
//!
//! One `RawRecord` is delivered per consumed message. The payload arrives in
//! whatever shape the host's converter produced; `RecordValue` enumerates the
//! shapes the sink knows about.

use serde_json::{Map, Value};

/// Payload of a consumed record, as decoded by the host framework.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// Payload already decoded into a structured mapping.
    Map(Map<String, Value>),
    /// Text payload expected to contain a JSON object.
    Text(String),
    /// Raw bytes the host converter left undecoded.
    Bytes(Vec<u8>),
}

/// One record handed to the sink task per delivery cycle.
///
/// The topic/partition/offset triple identifies the record for logging and
/// correlation only; it never addresses the destination index. A `None`
/// value is a tombstone.
#[derive(Debug, Clone)]
pub struct RawRecord {
    /// Source topic the record was consumed from.
    pub topic: String,
    /// Source partition within the topic.
    pub partition: i32,
    /// Offset of the record within the partition.
    pub offset: i64,
    /// Decoded payload; `None` marks a tombstone.
    pub value: Option<RecordValue>,
}

impl RawRecord {
    /// Create a record with a payload.
    pub fn new(
        topic: impl Into<String>,
        partition: i32,
        offset: i64,
        value: RecordValue,
    ) -> Self {
        Self {
            topic: topic.into(),
            partition,
            offset,
            value: Some(value),
        }
    }

    /// Create a tombstone record (absent payload, signals deletion upstream).
    pub fn tombstone(topic: impl Into<String>, partition: i32, offset: i64) -> Self {
        Self {
            topic: topic.into(),
            partition,
            offset,
            value: None,
        }
    }

    /// Render the topic/partition/offset identity for log correlation.
    pub fn partition_key(&self) -> String {
        format!("{}-{}@{}", self.topic, self.partition, self.offset)
    }
}
