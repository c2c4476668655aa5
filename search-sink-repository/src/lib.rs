//! # Search Sink Repository
//!
//! This crate provides the trait and implementation for interacting with the
//! destination search engine. It includes definitions for errors, the client
//! interface, connection configuration, and a concrete implementation for
//! OpenSearch.

pub mod config;
pub mod errors;
pub mod interfaces;
pub mod opensearch;

pub use config::{BasicAuth, ConnectionConfig, Scheme};
pub use errors::SearchError;
pub use interfaces::{BulkReport, ItemFailure, SearchSinkClient};
pub use opensearch::OpenSearchSinkClient;
