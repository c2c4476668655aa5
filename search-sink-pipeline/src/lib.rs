//! # Search Sink Pipeline
//!
//! This crate provides the core pipeline that turns a delivered batch of
//! records into one bulk write against the search engine.
//!
//! ## Architecture
//!
//! 1. **Normalizer**: Converts heterogeneous record payloads into documents
//! 2. **Builder**: Assembles documents into one bulk unit
//! 3. **Submitter**: Sends the unit with bounded retry and linear backoff
//! 4. **Orchestrator**: Drives one delivery cycle and interprets the outcome

pub mod builder;
pub mod errors;
pub mod normalizer;
pub mod orchestrator;
pub mod submitter;

pub use builder::BulkRequestBuilder;
pub use errors::SubmitError;
pub use normalizer::{Normalized, RecordNormalizer, SkipReason};
pub use orchestrator::SinkOrchestrator;
pub use submitter::{BulkOutcome, BulkSubmitter, RetryPolicy};
