//! Configuration key declarations for the search sink connector.
//!
//! The connector is configured through a flat property map supplied by the
//! host framework. Keys are declared here with their defaults; parsing
//! failures are startup errors and prevent the task from starting.

use std::collections::HashMap;

use thiserror::Error;

use search_sink_repository::{BasicAuth, ConnectionConfig, Scheme};

/// Search engine host name.
pub const ES_HOST: &str = "es.host";
const ES_HOST_DEFAULT: &str = "localhost";

/// Search engine port.
pub const ES_PORT: &str = "es.port";
const ES_PORT_DEFAULT: &str = "9200";

/// Destination index for consumed records.
pub const ES_INDEX: &str = "es.index";
const ES_INDEX_DEFAULT: &str = "kafka-connector-index";

/// Basic-auth username. Optional; must be set together with the password.
pub const ES_USERNAME: &str = "es.username";

/// Basic-auth password. Optional; must be set together with the username.
pub const ES_PASSWORD: &str = "es.password";

/// URL scheme used to reach the search engine, `http` or `https`.
pub const ES_SCHEME: &str = "es.scheme";
const ES_SCHEME_DEFAULT: &str = "http";

/// Accept invalid TLS certificates for HTTPS connections.
///
/// Disables certificate and hostname verification, which allows
/// man-in-the-middle attacks. Explicit opt-in for test clusters with
/// self-signed certificates only; never enable in production.
pub const ES_DANGER_ACCEPT_INVALID_CERTS: &str = "es.tls.danger-accept-invalid-certs";
const ES_DANGER_ACCEPT_INVALID_CERTS_DEFAULT: &str = "false";

/// Errors raised while parsing the connector properties.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A property value failed to parse or validate.
    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: &'static str, reason: String },

    /// Username and password must be supplied together.
    #[error("'es.username' and 'es.password' must be set together")]
    IncompleteCredentials,
}

impl ConfigError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            reason: reason.into(),
        }
    }
}

/// Parsed and validated connector configuration.
#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    /// Connection settings for the search engine client.
    pub connection: ConnectionConfig,
    /// Destination index name.
    pub index: String,
}

impl ConnectorConfig {
    /// Parse the user-supplied properties, applying defaults and validating
    /// every value.
    pub fn from_props(props: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = props
            .get(ES_HOST)
            .cloned()
            .unwrap_or_else(|| ES_HOST_DEFAULT.to_string());

        let port_raw = props.get(ES_PORT).map(String::as_str).unwrap_or(ES_PORT_DEFAULT);
        let port: u16 = port_raw.parse().map_err(|_| {
            ConfigError::invalid(ES_PORT, format!("expected a port number, got '{}'", port_raw))
        })?;

        let index = props
            .get(ES_INDEX)
            .cloned()
            .unwrap_or_else(|| ES_INDEX_DEFAULT.to_string());
        if index.trim().is_empty() {
            return Err(ConfigError::invalid(ES_INDEX, "index name must not be empty"));
        }

        let scheme_raw = props
            .get(ES_SCHEME)
            .map(String::as_str)
            .unwrap_or(ES_SCHEME_DEFAULT);
        let scheme = match scheme_raw {
            "http" => Scheme::Http,
            "https" => Scheme::Https,
            other => {
                return Err(ConfigError::invalid(
                    ES_SCHEME,
                    format!("expected 'http' or 'https', got '{}'", other),
                ))
            }
        };

        let auth = match (props.get(ES_USERNAME), props.get(ES_PASSWORD)) {
            (Some(username), Some(password)) => Some(BasicAuth {
                username: username.clone(),
                password: password.clone(),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteCredentials),
        };

        let insecure_raw = props
            .get(ES_DANGER_ACCEPT_INVALID_CERTS)
            .map(String::as_str)
            .unwrap_or(ES_DANGER_ACCEPT_INVALID_CERTS_DEFAULT);
        let danger_accept_invalid_certs = match insecure_raw {
            "true" => true,
            "false" => false,
            other => {
                return Err(ConfigError::invalid(
                    ES_DANGER_ACCEPT_INVALID_CERTS,
                    format!("expected 'true' or 'false', got '{}'", other),
                ))
            }
        };

        Ok(Self {
            connection: ConnectionConfig {
                scheme,
                host,
                port,
                auth,
                danger_accept_invalid_certs,
            },
            index,
        })
    }
}
