//! Search error types.
//!
//! This module defines the error types that can occur while talking to the
//! search engine. Every variant here is an engine-level failure of the call
//! itself; per-document rejections are reported through `BulkReport` instead.

use thiserror::Error;

/// Errors that can occur during search engine operations.
#[derive(Error, Debug)]
pub enum SearchError {
    /// Failed to construct the client or establish a connection.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The request itself failed (timeout, refused connection, non-success
    /// HTTP status for the whole bulk call).
    #[error("Transport error: {0}")]
    TransportError(String),

    /// Failed to parse the response from the search engine.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
