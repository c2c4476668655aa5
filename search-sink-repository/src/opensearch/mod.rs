//! OpenSearch backend for the search sink.

mod client;

pub use client::OpenSearchSinkClient;
