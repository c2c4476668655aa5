//! # Search Sink Shared
//!
//! Shared data types for the search sink connector system: the raw records
//! handed over by the host framework and the bulk write unit submitted to
//! the search engine.

pub mod bulk;
pub mod record;

pub use bulk::{BulkOperation, BulkUnit};
pub use record::{RawRecord, RecordValue};
