//! Connection configuration for the search engine client.

use std::fmt;

/// URL scheme used to reach the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

/// Basic-auth credentials for the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

/// Connection settings for the search engine client.
///
/// Certificate validation is on by default. Setting
/// `danger_accept_invalid_certs` disables certificate and hostname
/// verification for HTTPS connections, which allows man-in-the-middle
/// attacks; it exists for test clusters with self-signed certificates only.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// URL scheme (`http` or `https`).
    pub scheme: Scheme,
    /// Search engine host name.
    pub host: String,
    /// Search engine port.
    pub port: u16,
    /// Optional basic-auth credentials.
    pub auth: Option<BasicAuth>,
    /// Accept invalid TLS certificates. Explicit opt-in, default `false`.
    pub danger_accept_invalid_certs: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Http,
            host: "localhost".to_string(),
            port: 9200,
            auth: None,
            danger_accept_invalid_certs: false,
        }
    }
}

impl ConnectionConfig {
    /// Assemble the node URL from scheme, host and port.
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
