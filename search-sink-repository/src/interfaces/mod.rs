//! Abstract interfaces for the search engine collaborator.

mod search_sink_client;

pub use search_sink_client::{BulkReport, ItemFailure, SearchSinkClient};
